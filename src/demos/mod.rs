//! The demo scenes
//!
//! Each demo owns its [`Scene`] together with all of its interaction state
//! (orbits, animators, cyclers). Nothing is shared between demos, so any
//! number of them can exist side by side.

mod cottage;
mod forest;
mod lock_key;
mod ludo;
mod mobile_phone;
mod pc_desk;
mod playground;

pub use cottage::Cottage;
pub use forest::{scatter_points, Forest};
pub use lock_key::LockKey;
pub use ludo::Ludo;
pub use mobile_phone::MobilePhone;
pub use pc_desk::PcDesk;
pub use playground::Playground;

use std::fmt;
use std::str::FromStr;

use crate::assets::AssetId;
use crate::error::DemoError;
use crate::input::InputEvent;
use crate::scene::{Camera, Projection, Scene};
use crate::DemoConfig;

/// What an input event did to a demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Nothing changed
    Ignored,
    /// State changed; the next frame shows it
    Updated,
    /// State changed and the demo wants a frame drawn right away
    Redraw,
}

impl EventResponse {
    pub fn changed(self) -> bool {
        !matches!(self, EventResponse::Ignored)
    }
}

/// One interactive scene
pub trait Demo {
    fn name(&self) -> &'static str;

    fn scene(&self) -> &Scene;

    fn scene_mut(&mut self) -> &mut Scene;

    /// React to a single input event
    fn handle_event(&mut self, event: &InputEvent) -> EventResponse;

    /// Per-frame update, called once per tick before rendering
    fn update(&mut self);
}

/// Selector for the available demos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Playground,
    Cottage,
    Forest,
    LockKey,
    Ludo,
    MobilePhone,
    PcDesk,
}

impl DemoKind {
    pub const ALL: [DemoKind; 7] = [
        DemoKind::Playground,
        DemoKind::Cottage,
        DemoKind::Forest,
        DemoKind::LockKey,
        DemoKind::Ludo,
        DemoKind::MobilePhone,
        DemoKind::PcDesk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Playground => "playground",
            DemoKind::Cottage => "cottage",
            DemoKind::Forest => "forest",
            DemoKind::LockKey => "lock-key",
            DemoKind::Ludo => "ludo",
            DemoKind::MobilePhone => "mobile-phone",
            DemoKind::PcDesk => "pc-desk",
        }
    }

    /// Build a fresh instance of the demo
    pub fn build(self, config: &DemoConfig) -> Box<dyn Demo> {
        let demo: Box<dyn Demo> = match self {
            DemoKind::Playground => Box::new(Playground::new(config)),
            DemoKind::Cottage => Box::new(Cottage::new(config)),
            DemoKind::Forest => Box::new(Forest::new(config)),
            DemoKind::LockKey => Box::new(LockKey::new(config)),
            DemoKind::Ludo => Box::new(Ludo::new(config)),
            DemoKind::MobilePhone => Box::new(MobilePhone::new(config)),
            DemoKind::PcDesk => Box::new(PcDesk::new(config)),
        };

        let scene = demo.scene();
        log::info!(
            "Built demo '{}': {} objects, {} lights, {} assets requested",
            demo.name(),
            scene.object_count(),
            scene.lights().len(),
            scene.assets.len()
        );
        demo
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| DemoError::UnknownDemo(s.to_string()))
    }
}

/// Perspective camera shared by all demos: 75° vertical FOV, near 0.1, far 1000
fn demo_camera(config: &DemoConfig, position: glam::Vec3, target: glam::Vec3) -> Camera {
    Camera::new(position, target).with_projection(Projection::perspective(
        75.0,
        config.aspect(),
        0.1,
        1000.0,
    ))
}

/// Request a list of textures, keeping their order
fn request_textures(scene: &mut Scene, paths: &[&str]) -> Vec<AssetId> {
    paths
        .iter()
        .map(|path| scene.assets.request_texture(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.name().parse::<DemoKind>().unwrap(), kind);
        }
        assert_eq!("PC_Desk".parse::<DemoKind>().unwrap(), DemoKind::PcDesk);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "teapot".parse::<DemoKind>().unwrap_err();
        assert!(matches!(err, DemoError::UnknownDemo(name) if name == "teapot"));
    }

    #[test]
    fn every_demo_builds_with_its_own_scene() {
        let config = DemoConfig::default();
        for kind in DemoKind::ALL {
            let demo = kind.build(&config);
            assert_eq!(demo.name(), kind.name());
            assert!(demo.scene().object_count() > 0);
            assert!(!demo.scene().lights().is_empty());
        }
    }
}

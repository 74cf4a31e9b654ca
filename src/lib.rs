//! Scene Demos - interactive 3D scenes driven by orbiting cameras and lights
//!
//! Seven small scenes share one runtime:
//! - Playground, Cottage, Forest, LockKey, Ludo, MobilePhone and PcDesk
//!
//! # Features
//! - Orbit placement for cameras and lights with keyboard control
//!   (discrete-step and continuous-poll styles)
//! - Auto-orbiting lights, a two-state toggle animator and texture cycling
//! - Asset loading that resolves over several frames; objects appear once
//!   their model is loaded
//! - A frame loop with explicit start/stop and single stepping
//! - Native (winit) and web (WebAssembly) entry points

pub mod animation;
pub mod assets;
pub mod demos;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod renderer;
pub mod scene;

#[cfg(not(target_arch = "wasm32"))]
pub mod window;

// Web-specific modules
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::path::PathBuf;

pub use demos::{Demo, DemoKind, EventResponse};
pub use error::{DemoError, LoadError};
pub use frame_loop::FrameLoop;
pub use input::InputEvent;
pub use renderer::{RecordingRenderer, Renderer};
pub use scene::Scene;

/// Configuration shared by every demo
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Window title
    pub title: String,
    /// Initial viewport width
    pub width: u32,
    /// Initial viewport height
    pub height: u32,
    /// Device pixel ratio
    pub pixel_ratio: f32,
    /// Directory that texture and model paths are relative to
    pub asset_root: PathBuf,
    /// Asset requests resolved per frame
    pub asset_loads_per_frame: usize,
    /// Treat OS key auto-repeat as extra steps in discrete-step controls
    pub key_repeat: bool,
    /// Seed for scene randomness (tree layout, light colours)
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Scene Demos".to_string(),
            width: 1280,
            height: 720,
            pixel_ratio: 1.0,
            asset_root: PathBuf::from("assets"),
            asset_loads_per_frame: 1,
            key_repeat: true,
            seed: 0x5eed,
        }
    }
}

impl DemoConfig {
    /// Viewport aspect ratio
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

// Web initialization helper
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging() {
    // Set up panic hook for better error messages in console
    console_error_panic_hook::set_once();
    // Already set when the page starts a second demo
    let _ = console_log::init_with_level(log::Level::Info);
}

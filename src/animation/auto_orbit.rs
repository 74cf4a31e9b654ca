//! Unattended orbiting

use glam::Vec3;

use crate::scene::{AxisConvention, OrbitState};

/// Moves an entity around its orbit by a fixed angle every tick
#[derive(Debug, Clone, PartialEq)]
pub struct AutoOrbit {
    orbit: OrbitState,
}

impl AutoOrbit {
    pub fn new(orbit: OrbitState) -> Self {
        Self { orbit }
    }

    /// Orbit through `position` around the vertical axis
    pub fn from_position(position: Vec3, angular_speed: f32) -> Self {
        Self::new(OrbitState::from_position(
            position,
            angular_speed,
            AxisConvention::CosSin,
        ))
    }

    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    /// Advance one tick and re-project `position`, keeping its height
    pub fn tick(&mut self, position: &mut Vec3) {
        self.orbit.step(1.0);
        self.orbit.place(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_radius_and_height() {
        let mut position = Vec3::new(8.0, 10.0, -8.0);
        let mut light = AutoOrbit::from_position(position, 0.004);
        let radius = light.orbit().radius();

        for _ in 0..1000 {
            light.tick(&mut position);
            assert_eq!(position.y, 10.0);
            let r = (position.x * position.x + position.z * position.z).sqrt();
            assert!((r - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn advances_by_speed_per_tick() {
        let mut position = Vec3::new(-5.0, 4.0, -5.0);
        let mut light = AutoOrbit::from_position(position, 0.003);
        let start = light.orbit().angle;
        for _ in 0..10 {
            light.tick(&mut position);
        }
        assert!((light.orbit().angle - start - 0.03).abs() < 1e-5);
    }
}

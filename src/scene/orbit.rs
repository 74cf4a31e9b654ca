//! Circular orbit placement for cameras and lights
//!
//! An orbiting entity moves on a horizontal circle around the world Y axis.
//! Its height is owned by the entity itself; the orbit only supplies the
//! horizontal (x, z) coordinates.

use glam::{Vec2, Vec3};

/// Which trig function feeds which horizontal axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConvention {
    /// `x = r·cos θ`, `z = r·sin θ`
    #[default]
    CosSin,
    /// `x = r·sin θ`, `z = r·cos θ`
    SinCos,
}

/// Project a polar (radius, angle) pair onto the horizontal plane.
///
/// Returns `(x, z)` packed in a `Vec2`.
pub fn project(radius: f32, angle: f32, convention: AxisConvention) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    match convention {
        AxisConvention::CosSin => Vec2::new(radius * cos, radius * sin),
        AxisConvention::SinCos => Vec2::new(radius * sin, radius * cos),
    }
}

/// Step size and clamp range for vertical movement of an orbiting camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalControl {
    pub shift: f32,
    pub min: f32,
    pub max: f32,
    /// Keep the look-at target level with the camera
    pub track_height: bool,
}

impl VerticalControl {
    pub fn new(shift: f32, min: f32, max: f32) -> Self {
        Self {
            shift,
            min,
            max,
            track_height: true,
        }
    }

    /// Apply `steps` shifts (negative moves down) and clamp into range
    pub fn apply(&self, height: f32, steps: f32) -> f32 {
        (height + self.shift * steps).clamp(self.min, self.max)
    }
}

/// Orbit parameters of one entity
///
/// The radius is fixed at construction; only the angle and the target
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    radius: f32,
    pub angle: f32,
    pub angular_speed: f32,
    pub target: Vec3,
    pub convention: AxisConvention,
    pub vertical: Option<VerticalControl>,
}

impl OrbitState {
    pub fn new(radius: f32, angle: f32, angular_speed: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            angle,
            angular_speed,
            target: Vec3::ZERO,
            convention: AxisConvention::default(),
            vertical: None,
        }
    }

    /// Derive radius and angle from an entity's current position
    pub fn from_position(position: Vec3, angular_speed: f32, convention: AxisConvention) -> Self {
        let radius = Vec2::new(position.x, position.z).length();
        let angle = match convention {
            AxisConvention::CosSin => position.z.atan2(position.x),
            AxisConvention::SinCos => position.x.atan2(position.z),
        };
        Self {
            convention,
            ..Self::new(radius, angle, angular_speed)
        }
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_convention(mut self, convention: AxisConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_vertical(mut self, vertical: VerticalControl) -> Self {
        self.vertical = Some(vertical);
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Advance the angle by `steps` multiples of the angular speed
    pub fn step(&mut self, steps: f32) {
        self.angle += self.angular_speed * steps;
    }

    /// Horizontal coordinates for the current angle
    pub fn horizontal(&self) -> Vec2 {
        project(self.radius, self.angle, self.convention)
    }

    /// Full position at the given height
    pub fn position_at(&self, height: f32) -> Vec3 {
        let xz = self.horizontal();
        Vec3::new(xz.x, height, xz.y)
    }

    /// Rewrite `position` in place, keeping its height
    pub fn place(&self, position: &mut Vec3) {
        *position = self.position_at(position.y);
    }
}

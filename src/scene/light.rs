//! Light types for the scene

use glam::Vec3;

/// Linear RGB colour with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Pack back into `0xRRGGBB`
    pub fn to_hex(self) -> u32 {
        let channel = |v: f32| ((v.clamp(0.0, 1.0) * 255.0).round() as u32) & 0xff;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

/// Kind-specific light parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Omnidirectional light with distance falloff
    Point { intensity: f32, range: f32 },
    /// Parallel rays shining from `position` toward the origin
    Directional { intensity: f32 },
}

/// A light placed in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn point(position: Vec3, color: Color, intensity: f32, range: f32) -> Self {
        Self {
            kind: LightKind::Point { intensity, range },
            position,
            color,
        }
    }

    pub fn directional(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional { intensity },
            position,
            color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self.kind {
            LightKind::Point { intensity, .. } | LightKind::Directional { intensity } => intensity,
        }
    }

    /// Direction the light travels (directional lights aim at the origin)
    pub fn direction(&self) -> Option<Vec3> {
        match self.kind {
            LightKind::Directional { .. } => Some((-self.position).normalize_or_zero()),
            LightKind::Point { .. } => None,
        }
    }
}

/// Uniform light applied to every surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_channels() {
        let c = Color::from_hex(0x5c4033);
        assert_eq!(c.to_hex(), 0x5c4033);
        assert!((c.r - 92.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn directional_light_points_at_origin() {
        let light = Light::directional(Vec3::new(8.0, 10.0, -8.0), Color::WHITE, 1.0);
        let dir = light.direction().unwrap();
        assert!(dir.abs_diff_eq(Vec3::new(-8.0, -10.0, 8.0).normalize(), 1e-6));
        assert!(Light::point(Vec3::ONE, Color::WHITE, 1.0, 5.0).direction().is_none());
    }
}

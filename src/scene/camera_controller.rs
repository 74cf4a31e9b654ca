//! Camera controller system
//!
//! Provides keyboard-driven camera control with implementations for:
//! - SteppedOrbit: one orbit step per key press, applied immediately
//! - PolledOrbit: held keys tracked as flags, one step per frame
//! - FreeMove: world-axis translation and yaw rotation

use glam::Vec3;

use super::orbit::OrbitState;
use super::Camera;
use crate::input::{InputEvent, Key};

/// Held direction keys for polled camera controllers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrbitInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl OrbitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an arrow key press or release. Returns false for other events.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        let (key, pressed) = match *event {
            InputEvent::KeyDown { key, .. } => (key, true),
            InputEvent::KeyUp { key } => (key, false),
            _ => return false,
        };
        let flag = match key {
            Key::ArrowLeft => &mut self.left,
            Key::ArrowRight => &mut self.right,
            Key::ArrowUp => &mut self.up,
            Key::ArrowDown => &mut self.down,
            _ => return false,
        };
        *flag = pressed;
        true
    }

    /// Release every key
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Keyboard camera controller
pub trait CameraController {
    /// Apply one input event. Returns true when the camera moved.
    fn handle_event(&mut self, camera: &mut Camera, event: &InputEvent) -> bool;

    /// Per-frame update. Returns true when the camera moved.
    fn update(&mut self, camera: &mut Camera) -> bool;

    /// Get the controller name for debugging
    fn name(&self) -> &'static str;
}

/// Re-project the camera from its orbit and aim it at the orbit target
fn apply_orbit(orbit: &mut OrbitState, camera: &mut Camera) {
    if let Some(vertical) = orbit.vertical {
        if vertical.track_height {
            orbit.target.y = camera.position.y;
        }
    }
    orbit.place(&mut camera.position);
    camera.look_at(orbit.target);
}

/// Shift the camera height by one step. Returns false without vertical control.
fn shift_height(orbit: &OrbitState, camera: &mut Camera, steps: f32) -> bool {
    match orbit.vertical {
        Some(vertical) => {
            camera.position.y = vertical.apply(camera.position.y, steps);
            true
        }
        None => false,
    }
}

/// Discrete-step orbit controller
///
/// - Left/Right: orbit by one angular step
/// - Up/Down: shift height by one step (when vertical control is set)
///
/// Every accepted key-down, auto-repeats included, applies one step.
pub struct SteppedOrbitController {
    pub orbit: OrbitState,
    /// Apply OS auto-repeat presses as extra steps
    pub accept_repeat: bool,
}

impl SteppedOrbitController {
    pub fn new(orbit: OrbitState) -> Self {
        Self {
            orbit,
            accept_repeat: true,
        }
    }

    pub fn with_repeat(mut self, accept_repeat: bool) -> Self {
        self.accept_repeat = accept_repeat;
        self
    }
}

impl CameraController for SteppedOrbitController {
    fn handle_event(&mut self, camera: &mut Camera, event: &InputEvent) -> bool {
        let InputEvent::KeyDown { key, repeat } = *event else {
            return false;
        };
        if repeat && !self.accept_repeat {
            return false;
        }

        let changed = match key {
            Key::ArrowLeft => {
                self.orbit.step(1.0);
                true
            }
            Key::ArrowRight => {
                self.orbit.step(-1.0);
                true
            }
            Key::ArrowUp => shift_height(&self.orbit, camera, 1.0),
            Key::ArrowDown => shift_height(&self.orbit, camera, -1.0),
            _ => false,
        };

        if changed {
            apply_orbit(&mut self.orbit, camera);
        }
        changed
    }

    fn update(&mut self, _camera: &mut Camera) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "SteppedOrbit"
    }
}

/// Continuous-poll orbit controller
///
/// Key events only set or clear direction flags. Each frame applies one
/// step for the first held direction in the order left, right, up, down.
pub struct PolledOrbitController {
    pub orbit: OrbitState,
    pub input: OrbitInput,
}

impl PolledOrbitController {
    pub fn new(orbit: OrbitState) -> Self {
        Self {
            orbit,
            input: OrbitInput::new(),
        }
    }
}

impl CameraController for PolledOrbitController {
    fn handle_event(&mut self, _camera: &mut Camera, event: &InputEvent) -> bool {
        if *event == InputEvent::FocusLost {
            self.input.clear();
        } else {
            self.input.apply(event);
        }
        false
    }

    fn update(&mut self, camera: &mut Camera) -> bool {
        let input = self.input;
        let moved = if input.left {
            self.orbit.step(1.0);
            true
        } else if input.right {
            self.orbit.step(-1.0);
            true
        } else if input.up {
            shift_height(&self.orbit, camera, 1.0)
        } else if input.down {
            shift_height(&self.orbit, camera, -1.0)
        } else {
            false
        };

        if !moved {
            return false;
        }
        apply_orbit(&mut self.orbit, camera);
        true
    }

    fn name(&self) -> &'static str {
        "PolledOrbit"
    }
}

/// Free-move camera controller
///
/// - Arrows: translate along world X (left/right) and Z (up/down)
/// - `l` / `r`: yaw left / right
pub struct FreeMoveController {
    /// Current yaw in radians (0 looks down -Z)
    pub yaw: f32,
    pub move_speed: f32,
    pub yaw_speed: f32,
    pub accept_repeat: bool,
}

impl Default for FreeMoveController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            move_speed: 1.0,
            yaw_speed: 0.04,
            accept_repeat: true,
        }
    }
}

impl FreeMoveController {
    pub fn new(move_speed: f32, yaw_speed: f32) -> Self {
        Self {
            move_speed,
            yaw_speed,
            ..Default::default()
        }
    }

    /// Initialize yaw from the camera's current look direction
    pub fn sync_with_camera(&mut self, camera: &Camera) {
        let forward = camera.forward();
        self.yaw = (-forward.x).atan2(-forward.z);
    }

    /// Look direction for the current yaw
    pub fn forward_direction(&self) -> Vec3 {
        let (sin, cos) = self.yaw.sin_cos();
        Vec3::new(-sin, 0.0, -cos)
    }
}

impl CameraController for FreeMoveController {
    fn handle_event(&mut self, camera: &mut Camera, event: &InputEvent) -> bool {
        let InputEvent::KeyDown { key, repeat } = *event else {
            return false;
        };
        if repeat && !self.accept_repeat {
            return false;
        }

        match key {
            Key::ArrowLeft => camera.position.x -= self.move_speed,
            Key::ArrowRight => camera.position.x += self.move_speed,
            Key::ArrowUp => camera.position.z -= self.move_speed,
            Key::ArrowDown => camera.position.z += self.move_speed,
            Key::Character('l') => self.yaw += self.yaw_speed,
            Key::Character('r') => self.yaw -= self.yaw_speed,
            _ => return false,
        }

        camera.target = camera.position + self.forward_direction();
        true
    }

    fn update(&mut self, _camera: &mut Camera) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "FreeMove"
    }
}

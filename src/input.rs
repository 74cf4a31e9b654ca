//! Platform-agnostic input events.
//!
//! Scenes consume [`InputEvent`]s instead of windowing-crate types so that
//! they can be driven from winit on native, from the browser on the web, or
//! directly from tests.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

/// Logical key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Escape,
    /// Printable character as typed (case preserved)
    Character(char),
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Discrete input delivered to a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed; `repeat` is set for OS auto-repeat presses
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key },
    /// Primary button released over the canvas
    Click,
    /// Any mouse button pressed
    MouseDown(MouseButton),
    /// Viewport resized (logical pixels)
    Resize { width: u32, height: u32 },
    /// Window lost keyboard focus; held keys will never see their release
    FocusLost,
}

impl InputEvent {
    pub fn key_down(key: Key) -> Self {
        Self::KeyDown { key, repeat: false }
    }

    /// Translate a winit window event, if it carries scene input.
    ///
    /// `scale_factor` converts winit's physical resize into logical pixels.
    pub fn from_window_event(event: &WindowEvent, scale_factor: f64) -> Option<Self> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let key = convert_key(&event.logical_key)?;
                Some(match event.state {
                    ElementState::Pressed => Self::KeyDown {
                        key,
                        repeat: event.repeat,
                    },
                    ElementState::Released => Self::KeyUp { key },
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = convert_button(*button);
                match state {
                    ElementState::Pressed => Some(Self::MouseDown(button)),
                    ElementState::Released if button == MouseButton::Left => Some(Self::Click),
                    ElementState::Released => None,
                }
            }
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f64>(scale_factor);
                Some(Self::Resize {
                    width: logical.width.round() as u32,
                    height: logical.height.round() as u32,
                })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}

fn convert_key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::ArrowLeft) => Some(Key::ArrowLeft),
        WinitKey::Named(NamedKey::ArrowRight) => Some(Key::ArrowRight),
        WinitKey::Named(NamedKey::ArrowUp) => Some(Key::ArrowUp),
        WinitKey::Named(NamedKey::ArrowDown) => Some(Key::ArrowDown),
        WinitKey::Named(NamedKey::Space) => Some(Key::Space),
        WinitKey::Named(NamedKey::Escape) => Some(Key::Escape),
        WinitKey::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Character(c)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn convert_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as W;
    match button {
        W::Left => MouseButton::Left,
        W::Right => MouseButton::Right,
        W::Middle => MouseButton::Middle,
        W::Back => MouseButton::Other(3),
        W::Forward => MouseButton::Other(4),
        W::Other(id) => MouseButton::Other(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn named_keys_convert() {
        assert_eq!(
            convert_key(&WinitKey::Named(NamedKey::ArrowUp)),
            Some(Key::ArrowUp)
        );
        assert_eq!(convert_key(&WinitKey::Named(NamedKey::Tab)), None);
    }

    #[test]
    fn single_characters_convert() {
        assert_eq!(
            convert_key(&WinitKey::Character("l".into())),
            Some(Key::Character('l'))
        );
        assert_eq!(convert_key(&WinitKey::Character("ll".into())), None);
    }

    #[test]
    fn resize_and_focus_translate() {
        let event = WindowEvent::Resized(PhysicalSize::new(640, 480));
        assert_eq!(
            InputEvent::from_window_event(&event, 1.0),
            Some(InputEvent::Resize {
                width: 640,
                height: 480
            })
        );
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::Focused(false), 1.0),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(InputEvent::from_window_event(&WindowEvent::Focused(true), 1.0), None);
    }

    #[test]
    fn resize_is_reported_in_logical_pixels() {
        let event = WindowEvent::Resized(PhysicalSize::new(2560, 1440));
        assert_eq!(
            InputEvent::from_window_event(&event, 2.0),
            Some(InputEvent::Resize {
                width: 1280,
                height: 720
            })
        );
    }
}

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, ButtonState, InputEvent};

/// Adapter that bridges Winit events to camera input events
///
/// Unmapped keys and non-input window events are filtered out here, so
/// everything downstream only ever sees known buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdapter;

impl InputAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Translate a Winit WindowEvent, returns None for events the camera ignores
    pub fn translate(&self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let button = Self::keycode_to_button(keycode)?;
                Some(InputEvent::Button {
                    button,
                    state: Self::element_state(event.state),
                    repeat: event.repeat,
                })
            }
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            _ => None,
        }
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Space => Some(Button::ToggleCamera),
            KeyCode::KeyW => Some(Button::ZoomIn),
            KeyCode::KeyS => Some(Button::ZoomOut),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    fn element_state(state: ElementState) -> ButtonState {
        match state {
            ElementState::Pressed => ButtonState::Pressed,
            ElementState::Released => ButtonState::Released,
        }
    }
}

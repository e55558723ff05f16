/// Logical input button, already filtered from raw key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Toggles camera look/zoom capture
    ToggleCamera,
    ZoomIn,
    ZoomOut,
    /// Requests application close
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonState::Pressed)
    }
}

/// Discrete input event delivered to the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Button {
        button: Button,
        state: ButtonState,
        /// OS key-repeat while held
        repeat: bool,
    },
    /// Absolute pointer position in window coordinates
    CursorMoved { x: f32, y: f32 },
}

impl InputEvent {
    pub const fn press(button: Button) -> Self {
        InputEvent::Button {
            button,
            state: ButtonState::Pressed,
            repeat: false,
        }
    }

    pub const fn release(button: Button) -> Self {
        InputEvent::Button {
            button,
            state: ButtonState::Released,
            repeat: false,
        }
    }

    pub const fn cursor(x: f32, y: f32) -> Self {
        InputEvent::CursorMoved { x, y }
    }
}

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::core::{Button, ButtonState, InputEvent};
use crate::math::Vec3f;

/// Tunable orbit camera constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Radians of rotation per pixel of pointer travel
    pub mouse_sensitivity: f32,
    /// Zoom rate in world units per second
    pub zoom_speed: f32,
    pub initial_radius: f32,
    pub min_radius: f32,
    /// Upper zoom limit, unbounded when `None`
    pub max_radius: Option<f32>,
    /// Pitch limits in radians
    pub pitch_min: f32,
    pub pitch_max: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.01,
            zoom_speed: 5.0,
            initial_radius: 10.0,
            min_radius: 0.1,
            max_radius: None,
            pitch_min: -FRAC_PI_2,
            pitch_max: FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Cursor visible, look and zoom input ignored
    #[default]
    Inactive,
    /// Cursor hidden, look and zoom input accepted
    Active,
}

impl CameraMode {
    pub const fn is_active(self) -> bool {
        matches!(self, CameraMode::Active)
    }

    const fn toggled(self) -> Self {
        match self {
            CameraMode::Inactive => CameraMode::Active,
            CameraMode::Active => CameraMode::Inactive,
        }
    }
}

/// Zoom keys currently held
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    pub zoom_in: bool,
    pub zoom_out: bool,
}

/// What an input event did to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    Ignored,
    Consumed,
    ModeChanged(CameraMode),
    CloseRequested,
}

/// Orbit camera driven by keyboard and pointer events
#[derive(Debug, Clone)]
pub struct CameraState {
    config: CameraConfig,
    mode: CameraMode,
    zoom: ZoomState,
    yaw: f32,
    pitch: f32,
    radius: f32,
    last_cursor: (f32, f32),
    position_offset: Vec3f,
}

impl CameraState {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            mode: CameraMode::Inactive,
            zoom: ZoomState::default(),
            yaw: 0.0,
            pitch: 0.0,
            radius: config.initial_radius,
            last_cursor: (0.0, 0.0),
            position_offset: Vec3f::ZERO,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    /// Orbit angle about Y, radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Orbit angle about X, radians
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn last_cursor(&self) -> (f32, f32) {
        self.last_cursor
    }

    /// Free-fly offset. Not part of the orbit view transform.
    pub fn position_offset(&self) -> Vec3f {
        self.position_offset
    }

    /// Apply one discrete input event
    pub fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        match *event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor_moved(x, y);
                if self.is_active() {
                    InputResponse::Consumed
                } else {
                    InputResponse::Ignored
                }
            }
            InputEvent::Button {
                button,
                state,
                repeat,
            } => self.button(button, state, repeat),
        }
    }

    fn button(&mut self, button: Button, state: ButtonState, repeat: bool) -> InputResponse {
        let pressed = state.is_pressed();
        match button {
            Button::Escape if pressed && !repeat => InputResponse::CloseRequested,
            Button::ToggleCamera if pressed && !repeat => {
                self.mode = self.mode.toggled();
                log::debug!("camera mode -> {:?}", self.mode);
                InputResponse::ModeChanged(self.mode)
            }
            Button::ZoomIn if self.is_active() => {
                self.zoom.zoom_in = pressed;
                InputResponse::Consumed
            }
            Button::ZoomOut if self.is_active() => {
                self.zoom.zoom_out = pressed;
                InputResponse::Consumed
            }
            _ => InputResponse::Ignored,
        }
    }

    /// Pointer moved to `(x, y)`; rotates only while active
    ///
    /// The stored cursor is refreshed in every mode so that activation does
    /// not see a stale position.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if self.is_active() {
            let dx = x - self.last_cursor.0;
            let dy = y - self.last_cursor.1;

            self.yaw += dx * self.config.mouse_sensitivity;
            self.pitch += dy * self.config.mouse_sensitivity;
            self.pitch = self
                .pitch
                .max(self.config.pitch_min)
                .min(self.config.pitch_max);
        }

        self.last_cursor = (x, y);
    }

    /// Continuous per-frame update, independent of mode
    pub fn update(&mut self, delta_time: f32) {
        let step = self.config.zoom_speed * delta_time;

        if self.zoom.zoom_in {
            self.radius -= step;
        }
        if self.zoom.zoom_out {
            self.radius += step;
        }

        self.radius = self.radius.max(self.config.min_radius);
        if let Some(max_radius) = self.config.max_radius {
            self.radius = self.radius.min(max_radius);
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

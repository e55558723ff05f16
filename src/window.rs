use std::sync::Arc;

use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::core::{FramebufferSize, WindowContext};

/// Wrapper around winit Window exposing what the display needs
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }
}

impl WindowContext for Window {
    fn framebuffer_size(&self) -> FramebufferSize {
        self.inner.inner_size().into()
    }

    fn set_cursor_visible(&self, visible: bool) {
        self.inner.set_cursor_visible(visible);
        // Confining is best effort; some platforms only support locking or neither
        let mode = if visible {
            CursorGrabMode::None
        } else {
            CursorGrabMode::Confined
        };
        if let Err(e) = self.inner.set_cursor_grab(mode) {
            log::debug!("cursor grab {:?} unavailable: {}", mode, e);
        }
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

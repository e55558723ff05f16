/// Drawable surface size in physical pixels
///
/// May be (0, 0) while the window is minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FramebufferSize {
    pub width: u32,
    pub height: u32,
}

impl FramebufferSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to draw into
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for FramebufferSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Window surface the viewer drives
pub trait WindowContext {
    /// Current framebuffer size in physical pixels
    fn framebuffer_size(&self) -> FramebufferSize;

    /// Show or hide the cursor
    fn set_cursor_visible(&self, visible: bool);

    /// Request the window to redraw
    fn request_redraw(&self);
}

use crate::camera::{CameraState, InputResponse};
use crate::core::{FrameSink, FramebufferSize, InputEvent, WindowContext};
use crate::frame::{FrameAssembler, FrameInfo};
use crate::scene::Scene;

/// Outcome of one pass through [`Display::draw`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Framebuffer had zero area; camera and transforms untouched
    Paused,
    /// Number of transforms handed to the sink
    Drawn(usize),
}

/// Display combines camera, transform assembly and the frame sink
pub struct Display<S: FrameSink> {
    camera: CameraState,
    assembler: FrameAssembler,
    scene: Scene,
    sink: S,
}

impl<S: FrameSink> Display<S> {
    pub fn new(camera: CameraState, assembler: FrameAssembler, scene: Scene, sink: S) -> Self {
        Self {
            camera,
            assembler,
            scene,
            sink,
        }
    }

    /// Route one input event to the camera, syncing cursor visibility on mode changes
    pub fn handle_input(&mut self, event: &InputEvent, window: &dyn WindowContext) -> InputResponse {
        let response = self.camera.handle_input(event);
        if let InputResponse::ModeChanged(mode) = response {
            window.set_cursor_visible(!mode.is_active());
        }
        response
    }

    /// Full frame: continuous camera update, transform assembly, submission
    pub fn draw(&mut self, frame: &FrameInfo, size: FramebufferSize) -> FrameStatus {
        if size.is_empty() {
            log::trace!("frame {} skipped, framebuffer {}x{}", frame.number, size.width, size.height);
            return FrameStatus::Paused;
        }

        self.camera.update(frame.delta);

        let Some(transform) = self.assembler.begin(&self.camera, size) else {
            return FrameStatus::Paused;
        };

        self.sink.begin_frame(frame.number);
        for (index, drawable) in self.scene.drawables().iter().enumerate() {
            self.sink.submit(index, transform.model_view_projection(drawable.model));
        }

        FrameStatus::Drawn(self.scene.len())
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn assembler(&self) -> &FrameAssembler {
        &self.assembler
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

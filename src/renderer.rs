use crate::core::FrameSink;
use crate::math::Mat44f;

/// Frame sink that only logs what would be uploaded
///
/// Stands in for the GPU side: shader programs, vertex buffers and draw
/// calls live outside this crate.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frame_number: u64,
    submitted: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total transforms received since creation
    pub fn submitted(&self) -> u64 {
        self.submitted
    }
}

impl FrameSink for LogRenderer {
    fn begin_frame(&mut self, frame_number: u64) {
        self.frame_number = frame_number;
    }

    fn submit(&mut self, object: usize, transform: Mat44f) {
        self.submitted += 1;
        log::trace!(
            "frame {} object {} transform {:?}",
            self.frame_number,
            object,
            transform.as_array()
        );
    }
}

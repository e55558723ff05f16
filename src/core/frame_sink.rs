use crate::math::Mat44f;

/// Receiver of per-object transforms - the rendering side of the pipeline
pub trait FrameSink {
    /// Called once per frame before any transform is submitted
    fn begin_frame(&mut self, _frame_number: u64) {}

    /// Hand over the final projection * view * model matrix for one drawable
    fn submit(&mut self, object: usize, transform: Mat44f);
}

/// Sink that keeps the last frame's transforms, useful for inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frames_begun: u64,
    pub transforms: Vec<(usize, Mat44f)>,
}

impl FrameSink for RecordingSink {
    fn begin_frame(&mut self, _frame_number: u64) {
        self.frames_begun += 1;
        self.transforms.clear();
    }

    fn submit(&mut self, object: usize, transform: Mat44f) {
        self.transforms.push((object, transform));
    }
}

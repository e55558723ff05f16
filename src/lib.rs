pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod frame;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod window;

pub use camera::{CameraConfig, CameraMode, CameraState, InputResponse};
pub use display::{Display, FrameStatus};
pub use frame::{FrameAssembler, FrameInfo, FrameTransform, ProjectionConfig};
pub use math::{Mat44f, Vec3f, Vec4f};

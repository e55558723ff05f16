use serde::{Deserialize, Serialize};

use crate::camera::CameraState;
use crate::core::FramebufferSize;
use crate::math::{perspective_projection, rotation_x, rotation_y, translation, Mat44f, Vec3f};

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Perspective frustum parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionConfig {
    pub fn fov_y_radians(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// View matrix `rotation_x(pitch) * rotation_y(yaw) * translation((0, 0, -radius))`
///
/// The factor order is fixed. Reordering moves the pivot the camera turns about.
pub fn orbit_view(pitch: f32, yaw: f32, radius: f32) -> Mat44f {
    let rx = rotation_x(pitch);
    let ry = rotation_y(yaw);
    let t = translation(Vec3f::new(0.0, 0.0, -radius));
    rx * ry * t
}

/// Projection and view for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    pub projection: Mat44f,
    pub view: Mat44f,
}

impl FrameTransform {
    /// `projection * view * model`
    pub fn model_view_projection(&self, model: Mat44f) -> Mat44f {
        self.projection * self.view * model
    }
}

/// Builds the per-object clip-space transforms from camera state
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameAssembler {
    projection: ProjectionConfig,
}

impl FrameAssembler {
    pub fn new(projection: ProjectionConfig) -> Self {
        Self { projection }
    }

    pub fn projection_config(&self) -> &ProjectionConfig {
        &self.projection
    }

    pub fn projection(&self, size: FramebufferSize) -> Mat44f {
        perspective_projection(
            self.projection.fov_y_radians(),
            size.aspect_ratio(),
            self.projection.near,
            self.projection.far,
        )
    }

    /// Rebuild projection and view from scratch; `None` for a zero-area framebuffer
    pub fn begin(&self, camera: &CameraState, size: FramebufferSize) -> Option<FrameTransform> {
        if size.is_empty() {
            return None;
        }

        Some(FrameTransform {
            projection: self.projection(size),
            view: orbit_view(camera.pitch(), camera.yaw(), camera.radius()),
        })
    }

    /// Final transform for every model matrix, in order
    pub fn assemble(
        &self,
        camera: &CameraState,
        size: FramebufferSize,
        models: &[Mat44f],
    ) -> Option<Vec<Mat44f>> {
        let frame = self.begin(camera, size)?;
        Some(
            models
                .iter()
                .map(|model| frame.model_view_projection(*model))
                .collect(),
        )
    }
}

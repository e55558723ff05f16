//! Matrix factories for the orbit camera pipeline
//!
//! All functions are total: degenerate parameters give degenerate matrices
//! (zeros, infinities or NaN) instead of panicking.

use super::mat44::Mat44f;
use super::vec::Vec3f;

/// Right-handed rotation about the X axis
pub fn rotation_x(angle: f32) -> Mat44f {
    let (s, c) = angle.sin_cos();
    Mat44f::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation about the Y axis
pub fn rotation_y(angle: f32) -> Mat44f {
    let (s, c) = angle.sin_cos();
    Mat44f::from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn translation(offset: Vec3f) -> Mat44f {
    Mat44f::from_rows([
        [1.0, 0.0, 0.0, offset.x],
        [0.0, 1.0, 0.0, offset.y],
        [0.0, 0.0, 1.0, offset.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Perspective frustum mapping view space to OpenGL clip space (z in [-w, w])
///
/// Expects `0 < near < far`, `aspect > 0` and `0 < fov_y < PI`.
pub fn perspective_projection(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat44f {
    let s = 1.0 / (fov_y * 0.5).tan();
    let depth = far - near;

    Mat44f::from_rows([
        [s / aspect, 0.0, 0.0, 0.0],
        [0.0, s, 0.0, 0.0],
        [0.0, 0.0, -(far + near) / depth, -2.0 * far * near / depth],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

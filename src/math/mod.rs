mod mat44;
mod transform;
mod vec;

pub use mat44::Mat44f;
pub use transform::{perspective_projection, rotation_x, rotation_y, translation};
pub use vec::{Vec3f, Vec4f};

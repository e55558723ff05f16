use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// Three-component single-precision vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Four-component single-precision vector (homogeneous coordinates)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec3f {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Extend to a homogeneous vector with the given `w`
    pub const fn extend(self, w: f32) -> Vec4f {
        Vec4f::new(self.x, self.y, self.z, w)
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vec4f {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point (w = 1)
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Drop the `w` component
    pub const fn truncate(self) -> Vec3f {
        Vec3f::new(self.x, self.y, self.z)
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

macro_rules! impl_vec_ops {
    ($ty:ident { $($field:ident),+ }, $len:literal) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$ty> for f32 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl Index<usize> for $ty {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                &bytemuck::cast_ref::<Self, [f32; $len]>(self)[index]
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut bytemuck::cast_mut::<Self, [f32; $len]>(self)[index]
            }
        }
    };
}

impl_vec_ops!(Vec3f { x, y, z }, 3);
impl_vec_ops!(Vec4f { x, y, z, w }, 4);

impl From<[f32; 3]> for Vec3f {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 4]> for Vec4f {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<glam::Vec3> for Vec3f {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3f> for glam::Vec3 {
    fn from(v: Vec3f) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec4> for Vec4f {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4f> for glam::Vec4 {
    fn from(v: Vec4f) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

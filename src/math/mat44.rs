use std::ops::{Index, IndexMut, Mul};

use super::vec::Vec4f;

/// 4x4 single-precision matrix, stored row-major
///
/// `v[row * 4 + col]` holds element `(row, col)`. The flat array is what gets
/// uploaded, so a column-major graphics API has to be told to transpose it
/// (e.g. `transpose = GL_TRUE` for `glUniformMatrix4fv`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat44f {
    pub v: [f32; 16],
}

impl Mat44f {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const ZERO: Self = Self { v: [0.0; 16] };

    /// Build from a flat row-major array
    pub const fn from_row_major(v: [f32; 16]) -> Self {
        Self { v }
    }

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self {
            v: [
                r0[0], r0[1], r0[2], r0[3],
                r1[0], r1[1], r1[2], r1[3],
                r2[0], r2[1], r2[2], r2[3],
                r3[0], r3[1], r3[2], r3[3],
            ],
        }
    }

    /// Flat row-major view for upload
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.v
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn row(&self, row: usize) -> Vec4f {
        Vec4f::new(
            self[(row, 0)],
            self[(row, 1)],
            self[(row, 2)],
            self[(row, 3)],
        )
    }

    pub fn col(&self, col: usize) -> Vec4f {
        Vec4f::new(
            self[(0, col)],
            self[(1, col)],
            self[(2, col)],
            self[(3, col)],
        )
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out[(col, row)] = self[(row, col)];
            }
        }
        out
    }

    /// Column-major flat array for APIs that cannot transpose on upload
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.transpose().v
    }

    /// Element-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Mat44f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Mat44f {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) out of range");
        &self.v[row * 4 + col]
    }
}

impl IndexMut<(usize, usize)> for Mat44f {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) out of range");
        &mut self.v[row * 4 + col]
    }
}

impl Mul for Mat44f {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self[(row, k)] * rhs[(k, col)];
                }
                out[(row, col)] = sum;
            }
        }
        out
    }
}

impl Mul<Vec4f> for Mat44f {
    type Output = Vec4f;

    fn mul(self, rhs: Vec4f) -> Vec4f {
        Vec4f::new(
            self.row(0).dot(rhs),
            self.row(1).dot(rhs),
            self.row(2).dot(rhs),
            self.row(3).dot(rhs),
        )
    }
}

impl From<glam::Mat4> for Mat44f {
    fn from(m: glam::Mat4) -> Self {
        // glam is column-major; its row-major array is the transpose
        Self::from_row_major(m.transpose().to_cols_array())
    }
}

impl From<Mat44f> for glam::Mat4 {
    fn from(m: Mat44f) -> Self {
        glam::Mat4::from_cols_array(&m.to_cols_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_a() -> Mat44f {
        Mat44f::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    fn sample_b() -> Mat44f {
        Mat44f::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 2.0, 0.0, 4.0],
            [3.0, 1.0, 2.0, 5.0],
            [0.0, 4.0, 3.0, 1.0],
        ])
    }

    #[test]
    fn test_row_col_indexing() {
        let m = sample_a();
        assert_eq!(m[(0, 3)], 4.0);
        assert_eq!(m[(3, 0)], 13.0);
        assert_eq!(m.as_array()[7], 8.0);
    }

    #[test]
    fn test_matrix_vector_product() {
        let r = sample_a() * Vec4f::new(2.0, 1.0, 3.0, 4.0);
        assert_eq!(r, Vec4f::new(29.0, 69.0, 109.0, 149.0));
    }

    #[test]
    fn test_matrix_matrix_product() {
        let r = sample_a() * sample_b();
        let expected = Mat44f::from_rows([
            [13.0, 23.0, 19.0, 30.0],
            [37.0, 51.0, 43.0, 82.0],
            [61.0, 79.0, 67.0, 134.0],
            [85.0, 107.0, 91.0, 186.0],
        ]);
        assert_eq!(r, expected);
    }

    #[test]
    fn test_multiplication_not_commutative() {
        assert_ne!(sample_a() * sample_b(), sample_b() * sample_a());
    }

    #[test]
    fn test_identity_is_neutral() {
        assert_eq!(Mat44f::IDENTITY * sample_a(), sample_a());
        assert_eq!(sample_a() * Mat44f::IDENTITY, sample_a());
    }

    #[test]
    fn test_transpose() {
        let t = sample_a().transpose();
        assert_eq!(t[(0, 1)], 5.0);
        assert_eq!(t.transpose(), sample_a());
    }

    #[test]
    fn test_as_bytes_len() {
        assert_eq!(sample_a().as_bytes().len(), 64);
    }

    #[test]
    fn test_glam_roundtrip_keeps_layout() {
        let g: glam::Mat4 = sample_a().into();
        // glam's column 3 row 0 is our (0, 3)
        assert_eq!(g.w_axis.x, 4.0);
        assert_eq!(Mat44f::from(g), sample_a());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let _value = Mat44f::IDENTITY[(4, 0)];
    }

    #[test]
    fn test_nan_propagates() {
        let mut m = Mat44f::IDENTITY;
        m[(0, 0)] = f32::NAN;
        let r = m * Vec4f::point(1.0, 0.0, 0.0);
        assert!(r.x.is_nan());
    }
}

use orbit_view::math::{
    perspective_projection, rotation_x, rotation_y, translation, Mat44f, Vec3f, Vec4f,
};

const EPS: f32 = 1e-5;

fn assert_mat_close(a: &Mat44f, b: &Mat44f, eps: f32) {
    assert!(a.approx_eq(b, eps), "matrices differ:\n{:?}\n{:?}", a, b);
}

/// Deterministic matrices with mixed signs and magnitudes
fn sample_matrices() -> Vec<Mat44f> {
    (0..6)
        .map(|seed| {
            let mut v = [0.0f32; 16];
            for (i, slot) in v.iter_mut().enumerate() {
                let x = (seed * 16 + i) as f32;
                *slot = (x * 0.731).sin() * 3.0;
            }
            Mat44f::from_row_major(v)
        })
        .collect()
}

#[cfg(test)]
mod transform_tests {
    use super::*;

    #[test]
    fn test_multiplication_is_associative() {
        let mats = sample_matrices();
        for a in &mats {
            for b in &mats {
                for c in &mats {
                    let left = (*a * *b) * *c;
                    let right = *a * (*b * *c);
                    assert_mat_close(&left, &right, 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_translation_inverse_is_identity() {
        let offsets = [
            Vec3f::new(1.0, 2.0, 3.0),
            Vec3f::new(-4.5, 0.0, 100.0),
            Vec3f::new(0.001, -0.002, 0.003),
            Vec3f::ZERO,
        ];
        for v in offsets {
            let m = translation(v) * translation(-v);
            assert_mat_close(&m, &Mat44f::IDENTITY, EPS);
        }
    }

    #[test]
    fn test_rotation_inverse_is_identity() {
        let angles = [0.0, 0.1, -0.7, 1.5, std::f32::consts::PI, 10.0, -123.4];
        for theta in angles {
            assert_mat_close(
                &(rotation_x(theta) * rotation_x(-theta)),
                &Mat44f::IDENTITY,
                EPS,
            );
            assert_mat_close(
                &(rotation_y(theta) * rotation_y(-theta)),
                &Mat44f::IDENTITY,
                EPS,
            );
        }
    }

    #[test]
    fn test_rotations_match_glam() {
        for theta in [0.3f32, -1.2, 2.9] {
            let expected_x = Mat44f::from(glam::Mat4::from_rotation_x(theta));
            let expected_y = Mat44f::from(glam::Mat4::from_rotation_y(theta));
            assert_mat_close(&rotation_x(theta), &expected_x, EPS);
            assert_mat_close(&rotation_y(theta), &expected_y, EPS);
        }
    }

    #[test]
    fn test_translation_matches_glam() {
        let v = Vec3f::new(1.0, -2.0, 3.5);
        let expected = Mat44f::from(glam::Mat4::from_translation(v.into()));
        assert_eq!(translation(v), expected);
    }

    #[test]
    fn test_projection_matches_glam_gl_convention() {
        let fov = 60f32.to_radians();
        let ours = perspective_projection(fov, 1280.0 / 720.0, 0.1, 100.0);
        let expected = Mat44f::from(glam::Mat4::perspective_rh_gl(fov, 1280.0 / 720.0, 0.1, 100.0));
        assert_mat_close(&ours, &expected, 1e-4);
    }

    #[test]
    fn test_translated_point() {
        let p = translation(Vec3f::new(1.0, 2.0, 3.0)) * Vec4f::point(1.0, 1.0, 1.0);
        assert_eq!(p, Vec4f::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn test_rotation_composition_order_matters() {
        let a = rotation_x(0.5) * rotation_y(0.5);
        let b = rotation_y(0.5) * rotation_x(0.5);
        assert!(!a.approx_eq(&b, 1e-3));
    }

    #[test]
    fn test_flat_layout_is_row_major() {
        let m = translation(Vec3f::new(7.0, 8.0, 9.0));
        let flat = m.as_array();
        assert_eq!(flat[3], 7.0);
        assert_eq!(flat[7], 8.0);
        assert_eq!(flat[11], 9.0);

        let cols = m.to_cols_array();
        assert_eq!(&cols[12..15], &[7.0, 8.0, 9.0]);
    }
}

use super::euler::{EulerAngles, EulerConvention};
use crate::core::models::frame::OrthonormalFrame;
use nalgebra::Matrix3;

/// Rotation taking `frame_a` onto `frame_b`, expressed in `frame_a`'s own axes.
///
/// Computes `R = Aᵀ·B`: column `j` of `R` is axis `j` of `frame_b` written in the
/// coordinates of `frame_a`. Neither input is checked for orthonormality; if both are
/// orthonormal, `R` is orthogonal up to rounding.
pub fn rotation_between(frame_a: &OrthonormalFrame, frame_b: &OrthonormalFrame) -> Matrix3<f64> {
    frame_a.matrix().transpose() * frame_b.matrix()
}

/// The same relative rotation expressed in laboratory axes: `R = B·Aᵀ`, the rotation that
/// carries each axis of `frame_a` onto the matching axis of `frame_b`.
///
/// This is `A·rotation_between(A, B)·Aᵀ`, i.e. the body-frame rotation conjugated into
/// the lab frame. Its Euler angles generally differ from those of [`rotation_between`].
pub fn lab_rotation_between(
    frame_a: &OrthonormalFrame,
    frame_b: &OrthonormalFrame,
) -> Matrix3<f64> {
    frame_b.matrix() * frame_a.matrix().transpose()
}

pub fn rotation_matrix_from_zyz(alpha: f64, beta: f64, gamma: f64) -> Matrix3<f64> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let (sg, cg) = gamma.sin_cos();

    Matrix3::new(
        ca * cb * cg - sa * sg,
        sa * cb * cg + ca * sg,
        -sb * cg,
        -sa * cg - ca * cb * sg,
        -sa * cb * sg + ca * cg,
        sb * sg,
        ca * sb,
        sa * sb,
        cb,
    )
}

pub fn rotation_matrix_from_zxz(alpha: f64, beta: f64, gamma: f64) -> Matrix3<f64> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let (sg, cg) = gamma.sin_cos();

    Matrix3::new(
        -sa * sg * cb + ca * cg,
        sa * cg + sg * ca * cb,
        sb * sg,
        -sa * cb * cg - sg * ca,
        -sa * sg + ca * cb * cg,
        sb * cg,
        sa * sb,
        -sb * ca,
        cb,
    )
}

pub fn rotation_matrix_from_euler(angles: &EulerAngles, convention: EulerConvention) -> Matrix3<f64> {
    match convention {
        EulerConvention::Zyz => rotation_matrix_from_zyz(angles.alpha, angles.beta, angles.gamma),
        EulerConvention::Zxz => rotation_matrix_from_zxz(angles.alpha, angles.beta, angles.gamma),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const TOLERANCE: f64 = 1e-9;

    fn assert_matrix_close(actual: &Matrix3<f64>, expected: &Matrix3<f64>, tolerance: f64) {
        let diff = actual - expected;
        assert!(
            diff.iter().all(|v| v.abs() < tolerance),
            "expected {expected}, got {actual}"
        );
    }

    fn frames() -> [OrthonormalFrame; 4] {
        [
            OrthonormalFrame::identity(),
            OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.3, 1.2, -2.0)),
            OrthonormalFrame::from_matrix(rotation_matrix_from_zxz(2.1, 0.4, 5.0)),
            OrthonormalFrame::from_columns(Vector3::y(), Vector3::x(), Vector3::z()),
        ]
    }

    #[test]
    fn rotation_between_identical_frames_is_identity() {
        for frame in frames() {
            assert_matrix_close(&rotation_between(&frame, &frame), &Matrix3::identity(), TOLERANCE);
        }
    }

    #[test]
    fn rotation_between_orthonormal_frames_is_orthogonal() {
        let all = frames();
        for a in &all {
            for b in &all {
                let r = rotation_between(a, b);
                assert_matrix_close(&(r * r.transpose()), &Matrix3::identity(), TOLERANCE);
                assert!((r.determinant().abs() - 1.0).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn rotation_between_expresses_second_frame_in_first() {
        let a = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.7, 0.9, 0.1));
        let b = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(-1.0, 0.2, 2.4));
        let r = rotation_between(&a, &b);
        assert_matrix_close(&(a.matrix() * r), b.matrix(), TOLERANCE);
    }

    #[test]
    fn lab_rotation_carries_first_frame_onto_second() {
        let a = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.7, 0.9, 0.1));
        let b = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(-1.0, 0.2, 2.4));
        let r = lab_rotation_between(&a, &b);
        assert_matrix_close(&(r * a.matrix()), b.matrix(), TOLERANCE);
        assert_matrix_close(
            &r,
            &(a.matrix() * rotation_between(&a, &b) * a.matrix().transpose()),
            TOLERANCE,
        );
    }

    #[test]
    fn zero_angles_give_identity() {
        assert_matrix_close(&rotation_matrix_from_zyz(0.0, 0.0, 0.0), &Matrix3::identity(), 1e-15);
        assert_matrix_close(&rotation_matrix_from_zxz(0.0, 0.0, 0.0), &Matrix3::identity(), 1e-15);
    }

    #[test]
    fn zyz_matrix_is_proper_rotation() {
        let r = rotation_matrix_from_zyz(0.3, 0.9, -0.4);
        assert_matrix_close(&(r * r.transpose()), &Matrix3::identity(), TOLERANCE);
        assert!((r.determinant() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zxz_matrix_is_proper_rotation() {
        let r = rotation_matrix_from_zxz(1.3, 2.2, 4.0);
        assert_matrix_close(&(r * r.transpose()), &Matrix3::identity(), TOLERANCE);
        assert!((r.determinant() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zyz_with_only_beta_tilts_z_towards_minus_x() {
        let r = rotation_matrix_from_zyz(0.0, std::f64::consts::FRAC_PI_2, 0.0);
        assert!((r[(0, 2)] + 1.0).abs() < 1e-15);
        assert!((r[(2, 0)] - 1.0).abs() < 1e-15);
        assert!((r[(1, 1)] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn euler_dispatch_matches_direct_constructors() {
        let angles = EulerAngles::new(0.2, 0.5, 1.7);
        assert_eq!(
            rotation_matrix_from_euler(&angles, EulerConvention::Zyz),
            rotation_matrix_from_zyz(0.2, 0.5, 1.7)
        );
        assert_eq!(
            rotation_matrix_from_euler(&angles, EulerConvention::Zxz),
            rotation_matrix_from_zxz(0.2, 0.5, 1.7)
        );
    }
}

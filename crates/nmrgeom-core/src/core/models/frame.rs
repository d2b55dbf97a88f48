use nalgebra::{Matrix3, Vector3};

/// A reference frame given by three mutually orthogonal unit axes.
///
/// The axes are stored as the columns of a 3×3 matrix expressed in the laboratory
/// (crystal Cartesian) coordinate system. Frames are produced by the host, usually from
/// the eigenvectors of a symmetric interaction tensor, and are never mutated by the
/// engine. Orthonormality is a caller-side invariant: constructors do not enforce it, and
/// [`OrthonormalFrame::is_orthonormal`] is available for callers that want to check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalFrame(Matrix3<f64>);

impl OrthonormalFrame {
    /// Default tolerance used when checking orthonormality.
    pub const DEFAULT_TOLERANCE: f64 = 1e-10;

    /// Wraps a matrix whose columns are the frame axes.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }

    /// Builds a frame from its three axes, in order.
    pub fn from_columns(x: Vector3<f64>, y: Vector3<f64>, z: Vector3<f64>) -> Self {
        Self(Matrix3::from_columns(&[x, y, z]))
    }

    /// Builds a frame from a row-major 3×3 literal.
    ///
    /// This is how tabulated frames are usually written down: `rows[i][j]` is the `i`-th
    /// Cartesian component of axis `j`.
    pub fn from_row_slices(rows: [[f64; 3]; 3]) -> Self {
        Self(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2], //
            rows[1][0], rows[1][1], rows[1][2], //
            rows[2][0], rows[2][1], rows[2][2],
        ))
    }

    /// The laboratory frame itself.
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Returns axis `index` (0, 1 or 2).
    ///
    /// # Panics
    ///
    /// Panics if `index` is larger than 2.
    pub fn axis(&self, index: usize) -> Vector3<f64> {
        self.0.column(index).into_owned()
    }

    /// Checks that every axis has unit norm and that all pairs are orthogonal.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Maximum absolute deviation allowed for any element of `FᵀF - I`.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let gram = self.0.transpose() * self.0 - Matrix3::identity();
        gram.iter().all(|v| v.abs() <= tolerance)
    }

    /// Whether the axes form a right-handed basis (positive determinant).
    pub fn is_right_handed(&self) -> bool {
        self.0.determinant() > 0.0
    }

    /// Returns a copy of this frame with axes `i` and `j` reversed.
    ///
    /// Reversing exactly two axes is a 180° rotation about the third, so orthonormality
    /// and handedness are both preserved.
    pub fn with_flipped_axes(&self, i: usize, j: usize) -> Self {
        let mut matrix = self.0;
        for index in [i, j] {
            let negated = -matrix.column(index).into_owned();
            matrix.set_column(index, &negated);
        }
        Self(matrix)
    }

    /// The four handedness-preserving sign choices of this frame's axes.
    ///
    /// The principal axes of a second-rank tensor are only defined up to sign, so each of
    /// these frames describes the same tensor. The order is: unchanged, axes 1&2 flipped,
    /// axes 1&3 flipped, axes 2&3 flipped.
    pub fn sign_variants(&self) -> [Self; 4] {
        [
            *self,
            self.with_flipped_axes(0, 1),
            self.with_flipped_axes(0, 2),
            self.with_flipped_axes(1, 2),
        ]
    }
}

impl Default for OrthonormalFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix3<f64>> for OrthonormalFrame {
    fn from(matrix: Matrix3<f64>) -> Self {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn tilted_frame() -> OrthonormalFrame {
        OrthonormalFrame::from_row_slices([
            [0.93869474, 0.33129348, -0.09537721],
            [0.33771007, -0.93925902, 0.06119153],
            [-0.06931155, -0.08965002, -0.99355865],
        ])
    }

    #[test]
    fn from_row_slices_places_axes_in_columns() {
        let frame = OrthonormalFrame::from_row_slices([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(frame.axis(0), Vector3::new(1.0, 4.0, 7.0));
        assert_eq!(frame.axis(2), Vector3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn from_columns_matches_row_literal() {
        let frame = OrthonormalFrame::from_columns(Vector3::y(), Vector3::z(), Vector3::x());
        let literal =
            OrthonormalFrame::from_row_slices([[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(frame, literal);
    }

    #[test]
    fn identity_is_orthonormal_and_right_handed() {
        let frame = OrthonormalFrame::identity();
        assert!(frame.is_orthonormal(TOLERANCE));
        assert!(frame.is_right_handed());
        assert_eq!(OrthonormalFrame::default(), frame);
    }

    #[test]
    fn tabulated_eigenvector_frame_is_orthonormal_to_input_precision() {
        assert!(tilted_frame().is_orthonormal(1e-7));
    }

    #[test]
    fn scaled_axes_are_not_orthonormal() {
        let frame = OrthonormalFrame::from_matrix(Matrix3::identity() * 2.0);
        assert!(!frame.is_orthonormal(OrthonormalFrame::DEFAULT_TOLERANCE));
    }

    #[test]
    fn left_handed_frame_is_detected() {
        let frame = OrthonormalFrame::from_columns(Vector3::x(), Vector3::y(), -Vector3::z());
        assert!(frame.is_orthonormal(TOLERANCE));
        assert!(!frame.is_right_handed());
    }

    #[test]
    fn flipping_two_axes_negates_only_those_columns() {
        let frame = tilted_frame();
        let flipped = frame.with_flipped_axes(0, 2);
        assert_eq!(flipped.axis(0), -frame.axis(0));
        assert_eq!(flipped.axis(1), frame.axis(1));
        assert_eq!(flipped.axis(2), -frame.axis(2));
    }

    #[test]
    fn sign_variants_are_distinct_and_keep_handedness() {
        let frame = tilted_frame();
        let variants = frame.sign_variants();

        assert_eq!(variants[0], frame);
        for (i, a) in variants.iter().enumerate() {
            assert!(a.is_orthonormal(1e-7));
            assert_eq!(a.is_right_handed(), frame.is_right_handed());
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

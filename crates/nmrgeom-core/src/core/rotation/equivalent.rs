use super::compose::rotation_between;
use super::euler::{EulerAngles, EulerConvention, RotationSense, euler_from_rotation};
use crate::core::models::frame::OrthonormalFrame;

/// Number of sign variants per frame.
pub const SIGN_VARIANTS: usize = 4;

/// Total number of equivalent Euler angle sets between two tensors.
pub const EQUIVALENT_SET_COUNT: usize = SIGN_VARIANTS * SIGN_VARIANTS;

/// Selects one of the sixteen equivalent sets: sign variant `a` of the first frame paired
/// with sign variant `b` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EquivalentIndex {
    pub a: usize,
    pub b: usize,
}

impl EquivalentIndex {
    /// Returns `None` if either component is not below [`SIGN_VARIANTS`].
    pub fn new(a: usize, b: usize) -> Option<Self> {
        (a < SIGN_VARIANTS && b < SIGN_VARIANTS).then_some(Self { a, b })
    }

    /// Inverse of [`EquivalentIndex::flat`].
    pub fn from_flat(index: usize) -> Option<Self> {
        Self::new(index / SIGN_VARIANTS, index % SIGN_VARIANTS)
    }

    /// The next index, advancing `b` first and carrying into `a`; wraps after (3, 3).
    pub fn cycle(self) -> Self {
        if self.b + 1 < SIGN_VARIANTS {
            Self {
                a: self.a,
                b: self.b + 1,
            }
        } else {
            Self {
                a: (self.a + 1) % SIGN_VARIANTS,
                b: 0,
            }
        }
    }

    pub fn flat(self) -> usize {
        self.a * SIGN_VARIANTS + self.b
    }
}

/// The sixteen equivalent Euler angle sets relating two tensors' principal frames.
///
/// Each frame is only defined up to reversing two of its axes, giving four variants per
/// tensor. Every pairing is decomposed independently with
/// [`rotation_between`] and [`euler_from_rotation`]; entry `[i][j]` pairs variant `i` of
/// `frame_a` with variant `j` of `frame_b` (see [`OrthonormalFrame::sign_variants`]).
pub fn equivalent_euler_sets(
    frame_a: &OrthonormalFrame,
    frame_b: &OrthonormalFrame,
    convention: EulerConvention,
    sense: RotationSense,
) -> [[EulerAngles; SIGN_VARIANTS]; SIGN_VARIANTS] {
    let variants_a = frame_a.sign_variants();
    let variants_b = frame_b.sign_variants();

    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            euler_from_rotation(
                &rotation_between(&variants_a[i], &variants_b[j]),
                convention,
                sense,
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rotation::compose::rotation_matrix_from_zyz;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn index_rejects_out_of_range_components() {
        assert!(EquivalentIndex::new(3, 3).is_some());
        assert!(EquivalentIndex::new(4, 0).is_none());
        assert!(EquivalentIndex::new(0, 4).is_none());
    }

    #[test]
    fn cycle_advances_second_component_first() {
        let start = EquivalentIndex::default();
        assert_eq!(start.cycle(), EquivalentIndex { a: 0, b: 1 });
        assert_eq!(
            EquivalentIndex { a: 0, b: 3 }.cycle(),
            EquivalentIndex { a: 1, b: 0 }
        );
        assert_eq!(EquivalentIndex { a: 3, b: 3 }.cycle(), start);
    }

    #[test]
    fn cycling_visits_every_set_once() {
        let mut index = EquivalentIndex::default();
        let mut seen = Vec::new();
        for _ in 0..EQUIVALENT_SET_COUNT {
            seen.push(index.flat());
            index = index.cycle();
        }
        assert_eq!(seen, (0..EQUIVALENT_SET_COUNT).collect::<Vec<_>>());
        assert_eq!(index, EquivalentIndex::default());
    }

    #[test]
    fn flat_and_from_flat_agree() {
        for flat in 0..EQUIVALENT_SET_COUNT {
            assert_eq!(EquivalentIndex::from_flat(flat).unwrap().flat(), flat);
        }
        assert!(EquivalentIndex::from_flat(EQUIVALENT_SET_COUNT).is_none());
    }

    #[test]
    fn first_set_matches_direct_decomposition() {
        let a = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.2, 0.9, 1.4));
        let b = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(2.5, 0.3, 0.8));

        let sets = equivalent_euler_sets(&a, &b, EulerConvention::Zyz, RotationSense::Active);
        let direct = euler_from_rotation(
            &rotation_between(&a, &b),
            EulerConvention::Zyz,
            RotationSense::Active,
        );
        assert_eq!(sets[0][0], direct);
    }

    #[test]
    fn every_equivalent_set_is_in_canonical_range() {
        let a = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.2, 0.9, 1.4));
        let b = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(2.5, 0.3, 0.8));

        for sense in [RotationSense::Active, RotationSense::Passive] {
            for convention in [EulerConvention::Zyz, EulerConvention::Zxz] {
                let sets = equivalent_euler_sets(&a, &b, convention, sense);
                for angles in sets.iter().flatten() {
                    assert!(angles.beta >= 0.0 && angles.beta <= FRAC_PI_2 + 1e-12);
                }
            }
        }
    }

    #[test]
    fn sign_variants_share_beta_up_to_supplement() {
        let a = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.2, 0.9, 1.4));
        let b = OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(2.5, 0.3, 0.8));
        let sets = equivalent_euler_sets(&a, &b, EulerConvention::Zyz, RotationSense::Active);

        // Flipping axis signs maps cos β to ±cos β, and folding then maps both to one β.
        let beta = sets[0][0].beta;
        for angles in sets.iter().flatten() {
            assert!((angles.beta - beta).abs() < 1e-9);
        }
    }
}

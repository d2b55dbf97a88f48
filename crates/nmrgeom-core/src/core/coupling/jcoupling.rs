use crate::core::models::atom::AtomSite;
use nalgebra::Matrix3;
use std::f64::consts::PI;

/// Reduced Planck constant in J·s.
pub const HBAR: f64 = 1.054571817e-34;

/// Converts a raw ISC tensor from magres atomic units (10¹⁹ T²·J⁻¹) to Hz.
pub fn isc_atomic_to_hz(isc: &Matrix3<f64>, gamma_a: f64, gamma_b: f64) -> Matrix3<f64> {
    isc * (HBAR * gamma_a * gamma_b / (2.0 * PI) * 1e19)
}

/// Isotropic part of a second-rank tensor: the mean of its eigenvalues, i.e. trace / 3.
pub fn isotropy(tensor: &Matrix3<f64>) -> f64 {
    tensor.trace() / 3.0
}

/// Isotropic J-coupling in Hz between `a` and `b`.
///
/// The raw tensor is looked up on `a` under `b.index`, the index assigned by
/// [`SpinSystem::add_site`](crate::core::models::system::SpinSystem::add_site). Sites built
/// with [`AtomSite::new`] carry index 0 until then, so a free-standing `b` must be given its
/// index with [`AtomSite::with_index`] or it resolves to partner 0's tensor. `None` means no
/// coupling data was supplied for this ordered pair, which is a normal condition rather than
/// an error.
pub fn j_coupling(a: &AtomSite, b: &AtomSite) -> Option<f64> {
    a.isc_with(b.index)
        .map(|raw| isotropy(&isc_atomic_to_hz(raw, a.gamma(), b.gamma())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Isotope;
    use nalgebra::{Point3, Vector3};

    fn proton(label: &str, index: usize) -> AtomSite {
        AtomSite::new(label, Point3::origin(), Isotope::new("1H", Some(267522128.0)))
            .with_index(index)
    }

    #[test]
    fn unit_conversion_factor_for_proton_pair() {
        let hz = isc_atomic_to_hz(&Matrix3::identity(), 267522128.0, 267522128.0);
        assert!((hz[(0, 0)] - 12.012010777033503).abs() < 1e-9);
        assert_eq!(hz[(0, 1)], 0.0);
    }

    #[test]
    fn unit_conversion_factor_for_proton_oxygen_pair() {
        let hz = isc_atomic_to_hz(&Matrix3::identity(), 267522128.0, -36280800.0);
        assert!((hz[(2, 2)] + 1.6290441611596225).abs() < 1e-9);
    }

    #[test]
    fn isotropy_is_mean_of_diagonal() {
        let t = Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 6.0));
        assert!((isotropy(&t) - 3.0).abs() < 1e-15);
    }

    #[test]
    fn j_coupling_converts_stored_tensor() {
        let mut a = proton("H1", 0);
        let b = proton("H2", 1);
        a.isc.insert(1, Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, 1.0)) * 0.5);

        let j = j_coupling(&a, &b).unwrap();
        assert!((j - 0.5 * 12.012010777033503).abs() < 1e-9);
    }

    #[test]
    fn missing_tensor_gives_none_not_zero() {
        let a = proton("H1", 0);
        let b = proton("H2", 1);
        assert_eq!(j_coupling(&a, &b), None);
    }

    #[test]
    fn lookup_uses_direction_of_storage() {
        let mut a = proton("H1", 0);
        let b = proton("H2", 1);
        a.isc.insert(1, Matrix3::identity());

        assert!(j_coupling(&a, &b).is_some());
        assert!(j_coupling(&b, &a).is_none());
    }

    #[test]
    fn partner_is_resolved_by_its_assigned_index() {
        let mut a = proton("H1", 0);
        a.isc.insert(0, Matrix3::identity());
        a.isc.insert(3, Matrix3::identity() * 2.0);

        let unindexed = AtomSite::new("H4", Point3::origin(), Isotope::new("1H", Some(267522128.0)));
        let j = j_coupling(&a, &unindexed).unwrap();
        assert!((j - 12.012010777033503).abs() < 1e-9);

        let j = j_coupling(&a, &unindexed.with_index(3)).unwrap();
        assert!((j - 2.0 * 12.012010777033503).abs() < 1e-9);
    }
}

use super::CouplingError;
use crate::core::models::atom::AtomSite;
use nalgebra::{Matrix3, Vector3};
use std::f64::consts::PI;

/// μ0·ℏ scaled by 10³⁰, so that distances in Ångström give couplings in Hz.
pub const MU0_HBAR_E30: f64 = 1.3252140307214143e-10;

/// Scalar dipolar coupling between two sites and the direction it acts along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipolarCoupling {
    /// Coupling constant in Hz.
    pub coupling_hz: f64,
    /// Unit vector pointing from the first site to the second.
    pub unit_vector: Vector3<f64>,
}

impl DipolarCoupling {
    /// The traceless dipolar tensor `d·(3·r̂r̂ᵀ − I)`.
    pub fn tensor(&self) -> Matrix3<f64> {
        let r = self.unit_vector;
        (r * r.transpose() * 3.0 - Matrix3::identity()) * self.coupling_hz
    }
}

/// Dipolar coupling constant `d = −μ0ℏ·γa·γb / (8π²R³)` between two sites.
///
/// A site without a gyromagnetic ratio contributes zero, giving `d = 0`.
///
/// # Errors
///
/// Returns [`CouplingError::CoincidentSites`] if the two positions coincide, which
/// includes comparing a site with itself.
pub fn dipolar_coupling(a: &AtomSite, b: &AtomSite) -> Result<DipolarCoupling, CouplingError> {
    let r: Vector3<f64> = b.position - a.position;
    let distance = r.norm();
    if distance <= 0.0 {
        return Err(CouplingError::CoincidentSites {
            a: a.label.clone(),
            b: b.label.clone(),
        });
    }

    let coupling_hz = -MU0_HBAR_E30 * a.gamma() * b.gamma() / (8.0 * PI * PI * distance.powi(3));
    Ok(DipolarCoupling {
        coupling_hz,
        unit_vector: r / distance,
    })
}

/// Full dipolar coupling tensor in Hz. Symmetric and traceless up to rounding.
///
/// # Errors
///
/// As for [`dipolar_coupling`].
pub fn dipolar_tensor(a: &AtomSite, b: &AtomSite) -> Result<Matrix3<f64>, CouplingError> {
    dipolar_coupling(a, b).map(|d| d.tensor())
}

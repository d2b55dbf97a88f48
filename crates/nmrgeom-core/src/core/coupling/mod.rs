//! Spin-spin coupling physics between pairs of nuclear sites.
//!
//! Dipolar couplings depend only on the geometry and the two gyromagnetic ratios. J-couplings
//! come from raw ISC tensors supplied with the site data and are simply converted to Hz.

pub mod dipolar;
pub mod isotopes;
pub mod jcoupling;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CouplingError {
    #[error("Sites '{a}' and '{b}' occupy the same position; the dipolar coupling is undefined")]
    CoincidentSites { a: String, b: String },
}

use super::error::ModelError;
use super::tensor::TensorFrames;
use crate::core::coupling::isotopes;
use nalgebra::{Matrix3, Point3};
use std::collections::HashMap;

/// A nuclear isotope as far as coupling calculations are concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotope {
    /// Mass number followed by element symbol (e.g., "1H", "17O").
    pub name: String,
    /// Gyromagnetic ratio in rad·s⁻¹·T⁻¹, or `None` for a nucleus without spin data.
    pub gamma: Option<f64>,
}

impl Isotope {
    /// Creates an isotope with an explicit gyromagnetic ratio.
    pub fn new(name: &str, gamma: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            gamma,
        }
    }

    /// Looks up an isotope in the built-in gyromagnetic ratio table.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownIsotope`] if the name is not tabulated.
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        isotopes::gyromagnetic_ratio(name)
            .map(|gamma| Self::new(name, Some(gamma)))
            .ok_or_else(|| ModelError::UnknownIsotope(name.to_string()))
    }

    /// The gyromagnetic ratio, with a missing value treated as zero.
    ///
    /// A zero ratio makes every coupling involving this nucleus vanish, which is the
    /// physically meaningful reading of "no magnetic moment".
    pub fn gamma_or_zero(&self) -> f64 {
        self.gamma.unwrap_or(0.0)
    }

    /// The element symbol, i.e. the name without its leading mass number ("17O" -> "O").
    pub fn element(&self) -> &str {
        self.name.trim_start_matches(|c: char| c.is_ascii_digit())
    }
}

/// A nuclear site: a position in space, its isotope and the interaction tensors attached
/// to it.
///
/// Sites are read-only snapshots from the engine's point of view. The `index` is assigned
/// by [`SpinSystem`](super::system::SpinSystem) when the site is added and is the key used
/// by other sites' `isc` tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSite {
    /// Position of this site within its spin system.
    pub index: usize,
    /// Crystallographic label (e.g., "H1", "O2").
    pub label: String,
    /// Cartesian position in Ångström.
    pub position: Point3<f64>,
    /// The isotope occupying the site.
    pub isotope: Isotope,
    /// Principal frames of the magnetic shielding tensor, if available.
    pub ms: Option<TensorFrames>,
    /// Principal frames of the electric field gradient tensor, if available.
    pub efg: Option<TensorFrames>,
    /// Raw indirect spin-spin coupling tensors keyed by the partner site's index, in
    /// the atomic units of magres files (10¹⁹ T²·J⁻¹).
    pub isc: HashMap<usize, Matrix3<f64>>,
}

impl AtomSite {
    /// Creates a site with no tensor data attached.
    ///
    /// The `index` is set to zero until the site is added to a spin system. Zero is also a
    /// valid partner key in `isc` tables, so a site used outside a
    /// [`SpinSystem`](super::system::SpinSystem) should be given its index with
    /// [`with_index`](Self::with_index).
    pub fn new(label: &str, position: Point3<f64>, isotope: Isotope) -> Self {
        Self {
            index: 0,
            label: label.to_string(),
            position,
            isotope,
            ms: None,
            efg: None,
            isc: HashMap::new(),
        }
    }

    /// Sets the index other sites use to key ISC tensors for this one.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn gamma(&self) -> f64 {
        self.isotope.gamma_or_zero()
    }

    /// The raw ISC tensor stored for the pair (`self`, `partner`), if any.
    pub fn isc_with(&self, partner: usize) -> Option<&Matrix3<f64>> {
        self.isc.get(&partner)
    }
}

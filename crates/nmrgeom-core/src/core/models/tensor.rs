use super::error::ModelError;
use super::frame::OrthonormalFrame;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Named conventions for ordering the eigenvalues (and so the principal axes) of a
/// symmetric second-rank NMR tensor.
///
/// The ordering itself is computed by the host; the engine only uses the name to ask a
/// [`PrincipalAxes`] implementation for the matching frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EigenOrder {
    /// Haeberlen convention: |λzz − iso| ≥ |λxx − iso| ≥ |λyy − iso|.
    #[default]
    Haeberlen,
    /// NQR convention: |λzz| ≥ |λyy| ≥ |λxx|.
    Nqr,
    /// Eigenvalues in ascending order.
    Increasing,
    /// Eigenvalues in descending order.
    Decreasing,
}

impl EigenOrder {
    pub const ALL: [EigenOrder; 4] = [
        EigenOrder::Haeberlen,
        EigenOrder::Nqr,
        EigenOrder::Increasing,
        EigenOrder::Decreasing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EigenOrder::Haeberlen => "haeberlen",
            EigenOrder::Nqr => "nqr",
            EigenOrder::Increasing => "increasing",
            EigenOrder::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for EigenOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EigenOrder {
    type Err = ModelError;

    /// Parses an ordering name, case-insensitively.
    ///
    /// `"ascending"` and `"descending"` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "haeberlen" => Ok(EigenOrder::Haeberlen),
            "nqr" => Ok(EigenOrder::Nqr),
            "increasing" | "ascending" => Ok(EigenOrder::Increasing),
            "decreasing" | "descending" => Ok(EigenOrder::Decreasing),
            _ => Err(ModelError::UnknownEigenOrder(s.to_string())),
        }
    }
}

/// Capability supplied by the host for a symmetric interaction tensor: given an ordering
/// convention, return the tensor's principal axis system.
///
/// Implementations return `None` when they cannot provide a frame for the requested
/// ordering (for example because the host never computed it).
pub trait PrincipalAxes {
    fn principal_frame(&self, order: EigenOrder) -> Option<OrthonormalFrame>;

    /// Eigenvalues sorted under `order`, matching the axes of [`Self::principal_frame`].
    fn eigenvalues(&self, _order: EigenOrder) -> Option<[f64; 3]> {
        None
    }
}

/// A fixed frame is its own principal axis system under every ordering.
///
/// This is how the crystal (laboratory) frame takes part in orientation calculations.
impl PrincipalAxes for OrthonormalFrame {
    fn principal_frame(&self, _order: EigenOrder) -> Option<OrthonormalFrame> {
        Some(*self)
    }
}

/// Host-filled table of principal frames for one tensor, keyed by ordering convention.
///
/// This is the concrete [`PrincipalAxes`] implementation used for per-site magnetic
/// shielding and electric field gradient tensors. The eigendecomposition that produces
/// the frames happens outside this crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TensorFrames {
    frames: BTreeMap<EigenOrder, OrthonormalFrame>,
    eigenvalues: BTreeMap<EigenOrder, [f64; 3]>,
}

impl TensorFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a frame for `order`.
    pub fn with_frame(mut self, order: EigenOrder, frame: OrthonormalFrame) -> Self {
        self.frames.insert(order, frame);
        self
    }

    /// Builder-style insertion of the eigenvalues sorted under `order`.
    pub fn with_eigenvalues(mut self, order: EigenOrder, values: [f64; 3]) -> Self {
        self.eigenvalues.insert(order, values);
        self
    }

    /// Stores a frame (and optionally its eigenvalues), replacing any previous entry.
    pub fn insert(&mut self, order: EigenOrder, frame: OrthonormalFrame, values: Option<[f64; 3]>) {
        self.frames.insert(order, frame);
        match values {
            Some(v) => {
                self.eigenvalues.insert(order, v);
            }
            None => {
                self.eigenvalues.remove(&order);
            }
        }
    }

    /// Orderings for which a frame is available.
    pub fn orders(&self) -> impl Iterator<Item = EigenOrder> + '_ {
        self.frames.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl PrincipalAxes for TensorFrames {
    fn principal_frame(&self, order: EigenOrder) -> Option<OrthonormalFrame> {
        self.frames.get(&order).copied()
    }

    fn eigenvalues(&self, order: EigenOrder) -> Option<[f64; 3]> {
        self.eigenvalues.get(&order).copied()
    }
}

use super::config::SurveyConfig;
use super::error::WorkflowError;
use crate::core::coupling::CouplingError;
use crate::core::coupling::dipolar::{DipolarCoupling, dipolar_coupling};
use crate::core::coupling::jcoupling::j_coupling;
use crate::core::models::atom::AtomSite;
use crate::core::models::system::SpinSystem;
use nalgebra::Matrix3;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// All couplings between an ordered pair of sites.
#[derive(Debug, Clone, PartialEq)]
pub struct PairCoupling {
    pub index_a: usize,
    pub index_b: usize,
    pub label_a: String,
    pub label_b: String,
    /// Internuclear distance in Ångström.
    pub distance: f64,
    pub dipolar: DipolarCoupling,
    /// Isotropic J-coupling in Hz; `None` when no ISC data is stored for the pair.
    pub j_hz: Option<f64>,
}

impl PairCoupling {
    pub fn dipolar_tensor(&self) -> Matrix3<f64> {
        self.dipolar.tensor()
    }
}

fn couple_sites(a: &AtomSite, b: &AtomSite) -> Result<PairCoupling, CouplingError> {
    let dipolar = dipolar_coupling(a, b)?;
    Ok(PairCoupling {
        index_a: a.index,
        index_b: b.index,
        label_a: a.label.clone(),
        label_b: b.label.clone(),
        distance: (b.position - a.position).norm(),
        dipolar,
        j_hz: j_coupling(a, b),
    })
}

fn site_by_label<'a>(system: &'a SpinSystem, label: &str) -> Result<&'a AtomSite, WorkflowError> {
    system
        .site_by_label(label)
        .ok_or_else(|| WorkflowError::SiteNotFound {
            label: label.to_string(),
        })
}

/// Dipolar and J-couplings between two labelled sites.
pub fn pair(
    system: &SpinSystem,
    label_a: &str,
    label_b: &str,
) -> Result<PairCoupling, WorkflowError> {
    let a = site_by_label(system, label_a)?;
    let b = site_by_label(system, label_b)?;
    Ok(couple_sites(a, b)?)
}

/// The full dipolar tensor (Hz) between two labelled sites.
pub fn dipolar_tensor_between(
    system: &SpinSystem,
    label_a: &str,
    label_b: &str,
) -> Result<Matrix3<f64>, WorkflowError> {
    pair(system, label_a, label_b).map(|p| p.dipolar_tensor())
}

/// Isotropic J-coupling (Hz) between two labelled sites, or `Ok(None)` when no ISC tensor
/// is stored for the pair. Unlike [`pair`], coincident sites are not an error here.
pub fn j_coupling_between(
    system: &SpinSystem,
    label_a: &str,
    label_b: &str,
) -> Result<Option<f64>, WorkflowError> {
    let a = site_by_label(system, label_a)?;
    let b = site_by_label(system, label_b)?;
    Ok(j_coupling(a, b))
}

/// Couplings from a central site to every neighbour within the configured radius.
///
/// The central site itself is skipped, and with `homonuclear` set so is every neighbour of a
/// different element. A neighbour whose coupling cannot be computed
/// (for example because it sits on top of the centre) is logged and left out; it does not
/// abort the survey. Results are ordered by distance, then by site index.
#[instrument(skip_all, name = "coupling_survey")]
pub fn survey(
    system: &SpinSystem,
    center_label: &str,
    config: &SurveyConfig,
) -> Result<Vec<PairCoupling>, WorkflowError> {
    let center = site_by_label(system, center_label)?;
    info!(
        center = %center.label,
        radius = config.radius,
        homonuclear = config.homonuclear,
        "Surveying couplings around central site."
    );

    let neighbours: Vec<&AtomSite> = system
        .sites_iter()
        .filter(|site| site.index != center.index)
        .filter(|site| {
            config
                .isotope
                .as_deref()
                .is_none_or(|isotope| site.isotope.name == isotope)
        })
        .filter(|site| !config.homonuclear || site.isotope.element() == center.isotope.element())
        .filter(|site| (site.position - center.position).norm() <= config.radius)
        .collect();
    debug!(count = neighbours.len(), "Neighbours within radius.");

    #[cfg(not(feature = "parallel"))]
    let iterator = neighbours.iter();

    #[cfg(feature = "parallel")]
    let iterator = neighbours.par_iter();

    let results: Vec<Result<PairCoupling, CouplingError>> =
        iterator.map(|site| couple_sites(center, site)).collect();

    let mut couplings: Vec<PairCoupling> = results
        .into_iter()
        .filter_map(|result| match result {
            Ok(coupling) => Some(coupling),
            Err(e) => {
                warn!(error = %e, "Skipping pair in coupling survey.");
                None
            }
        })
        .collect();

    couplings.sort_by(|x, y| {
        x.distance
            .total_cmp(&y.distance)
            .then(x.index_b.cmp(&y.index_b))
    });

    info!(pairs = couplings.len(), "Coupling survey complete.");
    Ok(couplings)
}

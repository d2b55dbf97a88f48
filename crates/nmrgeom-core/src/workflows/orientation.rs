use super::config::OrientationConfig;
use super::error::WorkflowError;
use crate::core::models::frame::OrthonormalFrame;
use crate::core::models::system::SpinSystem;
use crate::core::models::tensor::{EigenOrder, PrincipalAxes, TensorFrames};
use crate::core::rotation::equivalent::{SIGN_VARIANTS, equivalent_euler_sets};
use crate::core::rotation::euler::{EulerAngles, EulerConvention, RotationSense};
use crate::core::rotation::orientation::{euler_between_tensors_with_sense, principal_frames};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// The interaction a tensor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Magnetic shielding.
    Ms,
    /// Electric field gradient.
    Efg,
    /// The crystal (laboratory) frame, whose axes are the identity.
    Crystal,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Ms => "ms",
            InteractionKind::Efg => "efg",
            InteractionKind::Crystal => "crystal",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ms" => Ok(InteractionKind::Ms),
            "efg" => Ok(InteractionKind::Efg),
            "crystal" => Ok(InteractionKind::Crystal),
            _ => Err(WorkflowError::UnknownInteraction(s.to_string())),
        }
    }
}

/// One side of an orientation request: a site's tensor, or the crystal frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorSelection {
    pub kind: InteractionKind,
    /// Site label; ignored for [`InteractionKind::Crystal`].
    pub label: Option<String>,
}

impl TensorSelection {
    pub fn site(label: &str, kind: InteractionKind) -> Self {
        Self {
            kind,
            label: Some(label.to_string()),
        }
    }

    pub fn crystal() -> Self {
        Self {
            kind: InteractionKind::Crystal,
            label: None,
        }
    }

    fn describe(&self) -> String {
        match (&self.label, self.kind) {
            (_, InteractionKind::Crystal) => "crystal".to_string(),
            (Some(label), kind) => format!("{label}:{kind}"),
            (None, kind) => kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientationRequest {
    pub a: TensorSelection,
    pub b: TensorSelection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrientationReport {
    pub a: TensorSelection,
    pub b: TensorSelection,
    pub convention: EulerConvention,
    pub sense: RotationSense,
    pub angles: EulerAngles,
    /// Present when equivalent sets were requested; indexed by
    /// [`EquivalentIndex`](crate::core::rotation::equivalent::EquivalentIndex) components.
    pub equivalent: Option<[[EulerAngles; SIGN_VARIANTS]; SIGN_VARIANTS]>,
}

/// A tensor resolved against the spin system.
enum ResolvedTensor<'a> {
    Frames(&'a TensorFrames),
    Fixed(OrthonormalFrame),
}

impl PrincipalAxes for ResolvedTensor<'_> {
    fn principal_frame(&self, order: EigenOrder) -> Option<OrthonormalFrame> {
        match self {
            ResolvedTensor::Frames(frames) => frames.principal_frame(order),
            ResolvedTensor::Fixed(frame) => frame.principal_frame(order),
        }
    }

    fn eigenvalues(&self, order: EigenOrder) -> Option<[f64; 3]> {
        match self {
            ResolvedTensor::Frames(frames) => frames.eigenvalues(order),
            ResolvedTensor::Fixed(_) => None,
        }
    }
}

fn resolve<'a>(
    system: &'a SpinSystem,
    selection: &TensorSelection,
) -> Result<ResolvedTensor<'a>, WorkflowError> {
    if selection.kind == InteractionKind::Crystal {
        return Ok(ResolvedTensor::Fixed(OrthonormalFrame::identity()));
    }

    let label = selection
        .label
        .as_deref()
        .ok_or(WorkflowError::MissingLabel {
            kind: selection.kind,
        })?;
    let site = system
        .site_by_label(label)
        .ok_or_else(|| WorkflowError::SiteNotFound {
            label: label.to_string(),
        })?;

    let frames = match selection.kind {
        InteractionKind::Ms => site.ms.as_ref(),
        InteractionKind::Efg => site.efg.as_ref(),
        InteractionKind::Crystal => None,
    };
    frames
        .map(ResolvedTensor::Frames)
        .ok_or_else(|| WorkflowError::MissingTensor {
            label: label.to_string(),
            kind: selection.kind,
        })
}

/// Computes the Euler angles of tensor B relative to tensor A.
///
/// Both sides may name the same site (e.g. its ms and efg tensors) and either side may be
/// the crystal frame.
#[instrument(skip_all, name = "orientation_workflow")]
pub fn run(
    system: &SpinSystem,
    request: &OrientationRequest,
    config: &OrientationConfig,
) -> Result<OrientationReport, WorkflowError> {
    let tensor_a = resolve(system, &request.a)?;
    let tensor_b = resolve(system, &request.b)?;
    debug!(
        a = %request.a.describe(),
        b = %request.b.describe(),
        convention = %config.convention,
        "Resolved tensors for orientation."
    );

    let angles = euler_between_tensors_with_sense(
        &tensor_a,
        &tensor_b,
        config.convention,
        config.sense,
        config.order_a,
        config.order_b,
    )?;

    let equivalent = if config.include_equivalent {
        let (frame_a, frame_b) =
            principal_frames(&tensor_a, &tensor_b, config.order_a, config.order_b)?;
        Some(equivalent_euler_sets(
            &frame_a,
            &frame_b,
            config.convention,
            config.sense,
        ))
    } else {
        None
    };

    info!(
        a = %request.a.describe(),
        b = %request.b.describe(),
        alpha = angles.alpha,
        beta = angles.beta,
        gamma = angles.gamma,
        "Orientation computed."
    );

    Ok(OrientationReport {
        a: request.a.clone(),
        b: request.b.clone(),
        convention: config.convention,
        sense: config.sense,
        angles,
        equivalent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::{AtomSite, Isotope};
    use crate::core::rotation::compose::rotation_matrix_from_zyz;
    use crate::core::rotation::orientation::{OrientationError, TensorSide};
    use crate::workflows::config::OrientationConfigBuilder;
    use nalgebra::Point3;

    const TOLERANCE: f64 = 1e-6;

    fn config(include_equivalent: bool) -> OrientationConfig {
        OrientationConfigBuilder::new()
            .convention(EulerConvention::Zyz)
            .sense(RotationSense::Active)
            .order_a(EigenOrder::Haeberlen)
            .order_b(EigenOrder::Haeberlen)
            .include_equivalent(include_equivalent)
            .build()
            .unwrap()
    }

    fn system() -> SpinSystem {
        let mut site = AtomSite::new("O1", Point3::origin(), Isotope::new("17O", Some(-36280800.0)));
        site.ms = Some(TensorFrames::new().with_frame(
            EigenOrder::Haeberlen,
            OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.4, 0.8, 1.2)),
        ));
        site.efg = Some(TensorFrames::new().with_frame(
            EigenOrder::Haeberlen,
            OrthonormalFrame::from_matrix(rotation_matrix_from_zyz(0.4, 0.8, 1.2)),
        ));
        let bare = AtomSite::new("H1", Point3::new(1.0, 0.0, 0.0), Isotope::new("1H", None));

        let mut system = SpinSystem::new();
        system.add_site(site).unwrap();
        system.add_site(bare).unwrap();
        system
    }

    #[test]
    fn interaction_kind_parses_case_insensitively() {
        assert_eq!(InteractionKind::from_str("MS"), Ok(InteractionKind::Ms));
        assert_eq!(InteractionKind::from_str("efg"), Ok(InteractionKind::Efg));
        assert_eq!(
            InteractionKind::from_str("Crystal"),
            Ok(InteractionKind::Crystal)
        );
        assert_eq!(
            InteractionKind::from_str("isc"),
            Err(WorkflowError::UnknownInteraction("isc".to_string()))
        );
    }

    #[test]
    fn tensor_relative_to_crystal_recovers_construction_angles() {
        let request = OrientationRequest {
            a: TensorSelection::crystal(),
            b: TensorSelection::site("O1", InteractionKind::Ms),
        };
        let report = run(&system(), &request, &config(false)).unwrap();

        assert!((report.angles.alpha - 0.4).abs() < TOLERANCE);
        assert!((report.angles.beta - 0.8).abs() < TOLERANCE);
        assert!((report.angles.gamma - 1.2).abs() < TOLERANCE);
        assert!(report.equivalent.is_none());
    }

    #[test]
    fn same_site_ms_and_efg_are_allowed() {
        let request = OrientationRequest {
            a: TensorSelection::site("O1", InteractionKind::Ms),
            b: TensorSelection::site("O1", InteractionKind::Efg),
        };
        let report = run(&system(), &request, &config(false)).unwrap();
        assert!(report.angles.beta.abs() < TOLERANCE);
    }

    #[test]
    fn equivalent_sets_are_included_on_request() {
        let request = OrientationRequest {
            a: TensorSelection::crystal(),
            b: TensorSelection::site("O1", InteractionKind::Efg),
        };
        let report = run(&system(), &request, &config(true)).unwrap();
        let sets = report.equivalent.unwrap();
        assert_eq!(sets[0][0], report.angles);
    }

    #[test]
    fn unknown_label_is_reported() {
        let request = OrientationRequest {
            a: TensorSelection::site("C9", InteractionKind::Ms),
            b: TensorSelection::crystal(),
        };
        assert_eq!(
            run(&system(), &request, &config(false)),
            Err(WorkflowError::SiteNotFound {
                label: "C9".to_string()
            })
        );
    }

    #[test]
    fn site_without_tensor_is_reported() {
        let request = OrientationRequest {
            a: TensorSelection::crystal(),
            b: TensorSelection::site("H1", InteractionKind::Efg),
        };
        assert_eq!(
            run(&system(), &request, &config(false)),
            Err(WorkflowError::MissingTensor {
                label: "H1".to_string(),
                kind: InteractionKind::Efg
            })
        );
    }

    #[test]
    fn site_tensor_without_label_is_rejected() {
        let request = OrientationRequest {
            a: TensorSelection {
                kind: InteractionKind::Ms,
                label: None,
            },
            b: TensorSelection::crystal(),
        };
        assert_eq!(
            run(&system(), &request, &config(false)),
            Err(WorkflowError::MissingLabel {
                kind: InteractionKind::Ms
            })
        );
    }

    #[test]
    fn missing_ordering_surfaces_as_orientation_error() {
        let request = OrientationRequest {
            a: TensorSelection::site("O1", InteractionKind::Ms),
            b: TensorSelection::crystal(),
        };
        let config = OrientationConfigBuilder::new()
            .convention(EulerConvention::Zyz)
            .sense(RotationSense::Active)
            .order_a(EigenOrder::Nqr)
            .order_b(EigenOrder::Haeberlen)
            .build()
            .unwrap();

        assert_eq!(
            run(&system(), &request, &config),
            Err(WorkflowError::Orientation {
                source: OrientationError::MissingFrame {
                    side: TensorSide::A,
                    order: EigenOrder::Nqr
                }
            })
        );
    }
}

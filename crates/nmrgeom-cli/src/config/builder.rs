use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{EulerAppConfig, SurveyAppConfig};
use crate::cli::{EulerArgs, SenseFlags, SurveyArgs};
use crate::error::{CliError, Result};
use nmrgeom::core::rotation::euler::RotationSense;
use nmrgeom::workflows::config::{OrientationConfigBuilder, SurveyConfigBuilder};
use nmrgeom::workflows::orientation::{InteractionKind, OrientationRequest, TensorSelection};
use std::path::Path;

pub fn build_euler_config(args: &EulerArgs, config_path: Option<&Path>) -> Result<EulerAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = FileConfig::load_optional(config_path)?;
    let euler_file = file_config.euler.take().unwrap_or_default();

    let convention = args
        .convention
        .or(euler_file.convention)
        .unwrap_or(defaults.convention);
    let sense = merge_sense(args.sense, euler_file.sense, defaults.sense);
    let order_a = args
        .order_a
        .or(euler_file.order_a)
        .unwrap_or(defaults.order_a);
    let order_b = args
        .order_b
        .or(euler_file.order_b)
        .unwrap_or(defaults.order_b);
    let include_equivalent = args.equivalent
        || euler_file
            .equivalent
            .unwrap_or(defaults.include_equivalent);
    let radians = args.radians || euler_file.radians.unwrap_or(defaults.radians);

    let core_config = OrientationConfigBuilder::new()
        .convention(convention)
        .sense(sense)
        .order_a(order_a)
        .order_b(order_b)
        .include_equivalent(include_equivalent)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let request = OrientationRequest {
        a: selection(args.atom_a.as_deref(), args.tensor_a, "--atom-a")?,
        b: selection(args.atom_b.as_deref(), args.tensor_b, "--atom-b")?,
    };

    Ok(EulerAppConfig {
        system_path: args.system.clone(),
        request,
        core_config,
        radians,
    })
}

/// Config file section a survey reads its settings from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveySection {
    Dipolar,
    Jcoupling,
}

pub fn build_survey_config(
    system_path: &Path,
    args: &SurveyArgs,
    section: SurveySection,
    config_path: Option<&Path>,
) -> Result<SurveyAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = FileConfig::load_optional(config_path)?;
    let survey_file = match section {
        SurveySection::Dipolar => file_config.dipolar.take(),
        SurveySection::Jcoupling => file_config.jcoupling.take(),
    }
    .unwrap_or_default();

    let center = args
        .center
        .clone()
        .ok_or_else(|| CliError::Argument("A survey requires --center".to_string()))?;

    let radius = args
        .radius
        .or(survey_file.radius)
        .unwrap_or(defaults.survey_radius);
    let homonuclear = args.homonuclear
        || survey_file
            .homonuclear
            .unwrap_or(defaults.survey_homonuclear);

    let mut builder = SurveyConfigBuilder::new()
        .radius(radius)
        .homonuclear(homonuclear);
    if let Some(isotope) = args.isotope.clone().or(survey_file.isotope) {
        builder = builder.isotope(isotope);
    }
    let core_config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(SurveyAppConfig {
        system_path: system_path.to_path_buf(),
        center,
        core_config,
    })
}

fn merge_sense(cli_flags: SenseFlags, file_val: Option<RotationSense>, default: RotationSense) -> RotationSense {
    if cli_flags.passive {
        RotationSense::Passive
    } else if cli_flags.active {
        RotationSense::Active
    } else {
        file_val.unwrap_or(default)
    }
}

fn selection(label: Option<&str>, kind: InteractionKind, flag: &str) -> Result<TensorSelection> {
    match (kind, label) {
        (InteractionKind::Crystal, _) => Ok(TensorSelection::crystal()),
        (kind, Some(label)) => Ok(TensorSelection::site(label, kind)),
        (kind, None) => Err(CliError::Argument(format!(
            "{flag} is required for a {kind} tensor"
        ))),
    }
}

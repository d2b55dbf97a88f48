use super::dipolar::format_j;
use crate::cli::JcouplingArgs;
use crate::config::builder::{SurveySection, build_survey_config};
use crate::error::{CliError, Result};
use crate::input::load_system;
use nmrgeom::workflows;
use nmrgeom::workflows::couplings::PairCoupling;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: JcouplingArgs, config_path: Option<&Path>) -> Result<()> {
    if args.survey.center.is_some() {
        return run_survey(&args, config_path);
    }

    let (Some(label_a), Some(label_b)) = (args.atom_a.as_deref(), args.atom_b.as_deref()) else {
        return Err(CliError::Argument(
            "Either --atom-a and --atom-b, or --center, must be given".to_string(),
        ));
    };

    let system = load_system(&args.system)?;
    let j_hz = workflows::couplings::j_coupling_between(&system, label_a, label_b)?;
    if j_hz.is_none() {
        info!(a = %label_a, b = %label_b, "No ISC tensor stored for this pair.");
    }

    println!("{}", render(label_a, label_b, j_hz));
    Ok(())
}

fn run_survey(args: &JcouplingArgs, config_path: Option<&Path>) -> Result<()> {
    let app = build_survey_config(
        &args.system,
        &args.survey,
        SurveySection::Jcoupling,
        config_path,
    )?;
    let system = load_system(&app.system_path)?;

    info!("Invoking the coupling survey workflow...");
    let couplings = workflows::couplings::survey(&system, &app.center, &app.core_config)?;

    if couplings.is_empty() {
        warn!("No neighbours found within the survey radius.");
        println!(
            "No sites within {:.3} Å of {}.",
            app.core_config.radius, app.center
        );
        return Ok(());
    }

    print!("{}", render_survey(&couplings));
    Ok(())
}

fn render(label_a: &str, label_b: &str, j_hz: Option<f64>) -> String {
    match j_hz {
        Some(j) => format!("J coupling {label_a} - {label_b}: {j:.4} Hz"),
        None => format!("J coupling {label_a} - {label_b}: N/A"),
    }
}

fn render_survey(couplings: &[PairCoupling]) -> String {
    let mut out = format!(
        "{:<8} {:<8} {:>10} {:>12}\n",
        "Site A", "Site B", "r (Å)", "J (Hz)"
    );
    for coupling in couplings {
        out.push_str(&format!(
            "{:<8} {:<8} {:>10.4} {:>12}\n",
            coupling.label_a,
            coupling.label_b,
            coupling.distance,
            format_j(coupling.j_hz)
        ));
    }
    out
}

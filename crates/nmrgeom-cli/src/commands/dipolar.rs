use crate::cli::DipolarArgs;
use crate::config::builder::{SurveySection, build_survey_config};
use crate::error::{CliError, Result};
use crate::input::load_system;
use nalgebra::Matrix3;
use nmrgeom::workflows;
use nmrgeom::workflows::couplings::PairCoupling;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: DipolarArgs, config_path: Option<&Path>) -> Result<()> {
    if args.survey.center.is_some() {
        return run_survey(&args, config_path);
    }

    let (Some(label_a), Some(label_b)) = (args.atom_a.as_deref(), args.atom_b.as_deref()) else {
        return Err(CliError::Argument(
            "Either --atom-a and --atom-b, or --center, must be given".to_string(),
        ));
    };

    let system = load_system(&args.system)?;
    let coupling = workflows::couplings::pair(&system, label_a, label_b)?;

    print!("{}", render_pair(&coupling));
    if args.tensor {
        print!("{}", render_tensor(&coupling.dipolar_tensor()));
    }
    Ok(())
}

fn run_survey(args: &DipolarArgs, config_path: Option<&Path>) -> Result<()> {
    let app = build_survey_config(
        &args.system,
        &args.survey,
        SurveySection::Dipolar,
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

/// J in Hz, or `N/A` when no ISC tensor is stored for the pair.
pub(crate) fn format_j(j_hz: Option<f64>) -> String {
    match j_hz {
        Some(j) => format!("{j:.4}"),
        None => "N/A".to_string(),
    }
}

fn render_pair(coupling: &PairCoupling) -> String {
    let r = coupling.dipolar.unit_vector;
    let j_unit = if coupling.j_hz.is_some() { " Hz" } else { "" };
    format!(
        "Dipolar coupling {} - {}:\n  d = {:.4} Hz\n  r = {:.6} Å\n  r̂ = ({:.6}, {:.6}, {:.6})\n  J = {}{j_unit}\n",
        coupling.label_a,
        coupling.label_b,
        coupling.dipolar.coupling_hz,
        coupling.distance,
        r.x,
        r.y,
        r.z,
        format_j(coupling.j_hz),
    )
}

fn render_tensor(tensor: &Matrix3<f64>) -> String {
    let mut out = String::from("Dipolar tensor (Hz):\n");
    for row in tensor.row_iter() {
        out.push_str(&format!(
            "  {:>14.4} {:>14.4} {:>14.4}\n",
            row[0], row[1], row[2]
        ));
    }
    out
}

fn render_survey(couplings: &[PairCoupling]) -> String {
    let mut out = format!(
        "{:<8} {:<8} {:>10} {:>16} {:>12}\n",
        "Site A", "Site B", "r (Å)", "d (Hz)", "J (Hz)"
    );
    for coupling in couplings {
        out.push_str(&format!(
            "{:<8} {:<8} {:>10.4} {:>16.4} {:>12}\n",
            coupling.label_a,
            coupling.label_b,
            coupling.distance,
            coupling.dipolar.coupling_hz,
            format_j(coupling.j_hz)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use nmrgeom::core::coupling::dipolar::DipolarCoupling;

    fn coupling() -> PairCoupling {
        PairCoupling {
            index_a: 1,
            index_b: 2,
            label_a: "H1".to_string(),
            label_b: "H2".to_string(),
            distance: 1.526478,
            dipolar: DipolarCoupling {
                coupling_hz: -33771.0112225885,
                unit_vector: Vector3::new(0.0, -1.0, 0.0),
            },
            j_hz: None,
        }
    }

    #[test]
    fn pair_output_lists_coupling_and_direction() {
        let text = render_pair(&coupling());
        assert!(text.contains("H1 - H2"));
        assert!(text.contains("d = -33771.0112 Hz"));
        assert!(text.contains("r = 1.526478 Å"));
        assert!(text.contains("(0.000000, -1.000000, 0.000000)"));
        assert!(text.contains("J = N/A\n"));

        let mut with_j = coupling();
        with_j.j_hz = Some(12.012010777);
        assert!(render_pair(&with_j).contains("J = 12.0120 Hz"));
    }

    #[test]
    fn tensor_output_has_three_rows() {
        let text = render_tensor(&coupling().dipolar_tensor());
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("-67542.0224"));
    }

    #[test]
    fn survey_output_has_one_row_per_pair() {
        let mut with_j = coupling();
        with_j.j_hz = Some(-1.629044);
        let text = render_survey(&[with_j, coupling()]);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("J (Hz)"));
        assert!(lines[1].starts_with("H1       H2"));
        assert!(lines[1].ends_with("-1.6290"));
        assert!(lines[2].ends_with("N/A"));
    }
}

use crate::cli::EulerArgs;
use crate::config::builder::build_euler_config;
use crate::error::Result;
use crate::input::load_system;
use nmrgeom::core::rotation::equivalent::EquivalentIndex;
use nmrgeom::core::rotation::euler::{EulerAngles, RotationSense};
use nmrgeom::workflows;
use nmrgeom::workflows::orientation::{InteractionKind, OrientationReport, TensorSelection};
use std::path::Path;
use tracing::info;

pub fn run(args: EulerArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_euler_config(&args, config_path)?;

    let system = load_system(&app.system_path)?;
    let report = workflows::orientation::run(&system, &app.request, &app.core_config)?;

    print!("{}", render_report(&report, app.radians));
    Ok(())
}

fn describe(selection: &TensorSelection) -> String {
    let kind = selection.kind.as_str().to_uppercase();
    match (&selection.label, selection.kind) {
        (_, InteractionKind::Crystal) => "crystal frame".to_string(),
        (Some(label), _) => format!("{label} {kind}"),
        (None, _) => kind,
    }
}

fn format_angles(angles: &EulerAngles, radians: bool) -> String {
    let ([a, b, c], unit) = if radians {
        (angles.as_array(), " rad")
    } else {
        (angles.to_degrees(), "°")
    };
    format!("alpha = {a:>10.4}{unit}  beta = {b:>10.4}{unit}  gamma = {c:>10.4}{unit}")
}

fn render_report(report: &OrientationReport, radians: bool) -> String {
    let sense = match report.sense {
        RotationSense::Active => "active",
        RotationSense::Passive => "passive",
    };
    let mut out = format!(
        "Euler angles ({}, {sense}) of {} relative to {}:\n  {}\n",
        report.convention.as_str().to_uppercase(),
        describe(&report.b),
        describe(&report.a),
        format_angles(&report.angles, radians),
    );

    if let Some(sets) = &report.equivalent {
        out.push_str("Equivalent sets:\n");
        let mut index = EquivalentIndex::default();
        loop {
            let angles = &sets[index.a][index.b];
            out.push_str(&format!(
                "  [{:>2}] ({}, {})  {}\n",
                index.flat() + 1,
                index.a,
                index.b,
                format_angles(angles, radians)
            ));
            index = index.cycle();
            if index == EquivalentIndex::default() {
                break;
            }
        }
    }
    out
}

//! Loading a [`SpinSystem`] from a TOML site description.
//!
//! ```toml
//! [[sites]]
//! label = "O1"
//! isotope = "17O"
//! position = [0.0, 0.0, 0.119262]
//!
//! [sites.efg.haeberlen]
//! frame = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
//! eigenvalues = [-0.5, -0.3, 0.8]
//!
//! [[isc]]
//! a = "H1"
//! b = "H2"
//! tensor = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
//! ```
//!
//! Frames are written row by row; the principal axes are the columns.

use crate::error::{CliError, Result};
use anyhow::{Context, anyhow};
use nalgebra::{Matrix3, Point3};
use nmrgeom::core::models::atom::{AtomSite, Isotope};
use nmrgeom::core::models::frame::OrthonormalFrame;
use nmrgeom::core::models::system::SpinSystem;
use nmrgeom::core::models::tensor::{EigenOrder, TensorFrames};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Frames read from files carry limited precision; anything looser than this is reported.
const FILE_FRAME_TOLERANCE: f64 = 1e-6;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FilePrincipalAxes {
    frame: [[f64; 3]; 3],
    eigenvalues: Option<[f64; 3]>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileSite {
    label: String,
    isotope: String,
    gamma: Option<f64>,
    position: [f64; 3],
    #[serde(default)]
    ms: BTreeMap<String, FilePrincipalAxes>,
    #[serde(default)]
    efg: BTreeMap<String, FilePrincipalAxes>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileIsc {
    a: String,
    b: String,
    tensor: [[f64; 3]; 3],
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileSystem {
    #[serde(default)]
    sites: Vec<FileSite>,
    #[serde(default)]
    isc: Vec<FileIsc>,
}

pub fn load_system(path: &Path) -> Result<SpinSystem> {
    debug!("Loading spin system from file: {:?}", path);
    let content = std::fs::read_to_string(path)?;
    let system = parse_system(&content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(sites = system.len(), "Loaded spin system.");
    Ok(system)
}

fn parse_system(content: &str) -> anyhow::Result<SpinSystem> {
    let file: FileSystem = toml::from_str(content)?;

    let mut system = SpinSystem::new();
    for site in file.sites {
        let label = site.label.clone();
        let atom = build_site(site).with_context(|| format!("Invalid site '{label}'"))?;
        system.add_site(atom)?;
    }

    for entry in file.isc {
        let a = index_of(&system, &entry.a)?;
        let b = index_of(&system, &entry.b)?;
        system.set_isc(a, b, Matrix3::from_fn(|i, j| entry.tensor[i][j]))?;
    }

    Ok(system)
}

fn build_site(site: FileSite) -> anyhow::Result<AtomSite> {
    let isotope = match site.gamma {
        Some(gamma) => Isotope::new(&site.isotope, Some(gamma)),
        None => Isotope::from_name(&site.isotope)?,
    };
    let [x, y, z] = site.position;
    let mut atom = AtomSite::new(&site.label, Point3::new(x, y, z), isotope);
    atom.ms = build_frames(&site.label, "ms", site.ms)?;
    atom.efg = build_frames(&site.label, "efg", site.efg)?;
    Ok(atom)
}

fn build_frames(
    label: &str,
    kind: &str,
    entries: BTreeMap<String, FilePrincipalAxes>,
) -> anyhow::Result<Option<TensorFrames>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut frames = TensorFrames::new();
    for (name, axes) in entries {
        let order = EigenOrder::from_str(&name)?;
        let frame = OrthonormalFrame::from_row_slices(axes.frame);
        if !frame.is_orthonormal(FILE_FRAME_TOLERANCE) {
            warn!(
                site = label,
                tensor = kind,
                order = %order,
                "Principal frame is not orthonormal; results may be unreliable."
            );
        }
        frames.insert(order, frame, axes.eigenvalues);
    }
    Ok(Some(frames))
}

fn index_of(system: &SpinSystem, label: &str) -> anyhow::Result<usize> {
    system
        .site_by_label(label)
        .map(|site| site.index)
        .ok_or_else(|| anyhow!("ISC entry refers to unknown site '{label}'"))
}

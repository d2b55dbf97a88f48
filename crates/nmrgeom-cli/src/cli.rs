use clap::{Args, Parser, Subcommand};
use nmrgeom::core::models::tensor::EigenOrder;
use nmrgeom::core::rotation::euler::EulerConvention;
use nmrgeom::workflows::orientation::InteractionKind;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The nmrgeom developers",
    version,
    about = "nmrgeom CLI - Relative orientations of NMR interaction tensors and dipolar / J couplings between nuclear sites.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Euler angles of one interaction tensor relative to another.
    Euler(EulerArgs),
    /// Dipolar coupling for a pair of sites, or for all neighbours of a central site.
    Dipolar(DipolarArgs),
    /// Isotropic J-coupling for a pair of sites, or for all neighbours of a central site.
    Jcoupling(JcouplingArgs),
}

/// Arguments for the `euler` subcommand.
#[derive(Args, Debug)]
pub struct EulerArgs {
    /// Path to the spin system description (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub system: PathBuf,

    /// Label of the first site. Not needed when --tensor-a is 'crystal'.
    #[arg(long, value_name = "LABEL")]
    pub atom_a: Option<String>,

    /// Tensor of the first site: ms, efg or crystal.
    #[arg(long, value_name = "KIND", default_value = "ms")]
    pub tensor_a: InteractionKind,

    /// Label of the second site. Not needed when --tensor-b is 'crystal'.
    #[arg(long, value_name = "LABEL")]
    pub atom_b: Option<String>,

    /// Tensor of the second site: ms, efg or crystal.
    #[arg(long, value_name = "KIND", default_value = "efg")]
    pub tensor_b: InteractionKind,

    // --- Overrides ---
    /// Eigenvector ordering for the first tensor (haeberlen, nqr, increasing, decreasing).
    #[arg(long, value_name = "ORDER")]
    pub order_a: Option<EigenOrder>,

    /// Eigenvector ordering for the second tensor.
    #[arg(long, value_name = "ORDER")]
    pub order_b: Option<EigenOrder>,

    /// Euler angle convention (zyz or zxz).
    #[arg(long, value_name = "CONVENTION")]
    pub convention: Option<EulerConvention>,

    /// Rotation sense, overriding the config file.
    #[command(flatten)]
    pub sense: SenseFlags,

    /// Also print the sixteen equivalent angle sets.
    #[arg(long)]
    pub equivalent: bool,

    /// Print angles in radians instead of degrees.
    #[arg(long)]
    pub radians: bool,
}

/// Mutually exclusive flags selecting the rotation sense.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct SenseFlags {
    /// Report the active rotation (default).
    #[arg(long)]
    pub active: bool,
    /// Report the passive rotation.
    #[arg(long)]
    pub passive: bool,
}

/// Neighbour survey around a central site, shared by `dipolar` and `jcoupling`.
#[derive(Args, Debug, Clone, Default)]
pub struct SurveyArgs {
    /// Survey all neighbours of this site instead of a single pair.
    #[arg(long, value_name = "LABEL")]
    pub center: Option<String>,

    /// Survey radius in Ångström, overriding the config file.
    #[arg(long, value_name = "FLOAT", requires = "center")]
    pub radius: Option<f64>,

    /// Restrict the survey to one isotope (e.g. 1H).
    #[arg(long, value_name = "ISOTOPE", requires = "center")]
    pub isotope: Option<String>,

    /// Restrict the survey to neighbours of the same element as the central site.
    #[arg(long, requires = "center")]
    pub homonuclear: bool,
}

/// Arguments for the `dipolar` subcommand.
#[derive(Args, Debug)]
pub struct DipolarArgs {
    /// Path to the spin system description (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub system: PathBuf,

    /// Label of the first site of the pair.
    #[arg(long, value_name = "LABEL", conflicts_with = "center", requires = "atom_b")]
    pub atom_a: Option<String>,

    /// Label of the second site of the pair.
    #[arg(long, value_name = "LABEL", conflicts_with = "center", requires = "atom_a")]
    pub atom_b: Option<String>,

    #[command(flatten)]
    pub survey: SurveyArgs,

    /// Print the full dipolar tensor for a pair.
    #[arg(long, conflicts_with = "center")]
    pub tensor: bool,
}

/// Arguments for the `jcoupling` subcommand.
#[derive(Args, Debug)]
pub struct JcouplingArgs {
    /// Path to the spin system description (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub system: PathBuf,

    /// Label of the site holding the ISC tensor.
    #[arg(long, value_name = "LABEL", conflicts_with = "center", requires = "atom_b")]
    pub atom_a: Option<String>,

    /// Label of the partner site.
    #[arg(long, value_name = "LABEL", conflicts_with = "center", requires = "atom_a")]
    pub atom_b: Option<String>,

    #[command(flatten)]
    pub survey: SurveyArgs,
}

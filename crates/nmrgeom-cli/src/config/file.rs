use crate::error::{CliError, Result};
use nmrgeom::core::models::tensor::EigenOrder;
use nmrgeom::core::rotation::euler::{EulerConvention, RotationSense};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileEulerConfig {
    pub convention: Option<EulerConvention>,
    pub sense: Option<RotationSense>,
    pub order_a: Option<EigenOrder>,
    pub order_b: Option<EigenOrder>,
    pub equivalent: Option<bool>,
    pub radians: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSurveyConfig {
    pub radius: Option<f64>,
    pub isotope: Option<String>,
    pub homonuclear: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub euler: Option<FileEulerConfig>,
    pub dipolar: Option<FileSurveyConfig>,
    pub jcoupling: Option<FileSurveyConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads the file at `path` if one was given, otherwise returns an empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

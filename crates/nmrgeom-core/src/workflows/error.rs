use thiserror::Error;

use super::config::ConfigError;
use super::orientation::InteractionKind;
use crate::core::coupling::CouplingError;
use crate::core::models::error::ModelError;
use crate::core::rotation::orientation::OrientationError;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum WorkflowError {
    #[error("Site not found in spin system: '{label}'")]
    SiteNotFound { label: String },

    #[error("Site '{label}' has no {kind} tensor")]
    MissingTensor { label: String, kind: InteractionKind },

    #[error("A site label is required for a {kind} tensor")]
    MissingLabel { kind: InteractionKind },

    #[error("Unrecognised interaction kind '{0}'. Expected 'ms', 'efg' or 'crystal'.")]
    UnknownInteraction(String),

    #[error("Orientation failed: {source}")]
    Orientation {
        #[from]
        source: OrientationError,
    },

    #[error("Coupling failed: {source}")]
    Coupling {
        #[from]
        source: CouplingError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

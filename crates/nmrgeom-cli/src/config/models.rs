use nmrgeom::workflows::config::{OrientationConfig, SurveyConfig};
use nmrgeom::workflows::orientation::OrientationRequest;
use std::path::PathBuf;

pub struct EulerAppConfig {
    pub system_path: PathBuf,
    pub request: OrientationRequest,
    pub core_config: OrientationConfig,
    pub radians: bool,
}

pub struct SurveyAppConfig {
    pub system_path: PathBuf,
    pub center: String,
    pub core_config: SurveyConfig,
}

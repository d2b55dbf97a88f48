use crate::core::models::tensor::EigenOrder;
use crate::core::rotation::euler::{EulerConvention, RotationSense};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationConfig {
    pub convention: EulerConvention,
    pub sense: RotationSense,
    /// Eigenvector ordering used for the first tensor.
    pub order_a: EigenOrder,
    /// Eigenvector ordering used for the second tensor.
    pub order_b: EigenOrder,
    /// Also compute the sixteen equivalent angle sets.
    pub include_equivalent: bool,
}

#[derive(Default)]
pub struct OrientationConfigBuilder {
    convention: Option<EulerConvention>,
    sense: Option<RotationSense>,
    order_a: Option<EigenOrder>,
    order_b: Option<EigenOrder>,
    include_equivalent: bool,
}

impl OrientationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convention(mut self, convention: EulerConvention) -> Self {
        self.convention = Some(convention);
        self
    }
    pub fn sense(mut self, sense: RotationSense) -> Self {
        self.sense = Some(sense);
        self
    }
    pub fn order_a(mut self, order: EigenOrder) -> Self {
        self.order_a = Some(order);
        self
    }
    pub fn order_b(mut self, order: EigenOrder) -> Self {
        self.order_b = Some(order);
        self
    }
    pub fn include_equivalent(mut self, include: bool) -> Self {
        self.include_equivalent = include;
        self
    }

    pub fn build(self) -> Result<OrientationConfig, ConfigError> {
        Ok(OrientationConfig {
            convention: self
                .convention
                .ok_or(ConfigError::MissingParameter("convention"))?,
            sense: self.sense.ok_or(ConfigError::MissingParameter("sense"))?,
            order_a: self.order_a.ok_or(ConfigError::MissingParameter("order_a"))?,
            order_b: self.order_b.ok_or(ConfigError::MissingParameter("order_b"))?,
            include_equivalent: self.include_equivalent,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyConfig {
    /// Neighbours farther than this from the central site (Å) are skipped.
    pub radius: f64,
    /// Restrict neighbours to one isotope (e.g. "1H").
    pub isotope: Option<String>,
    /// Keep only neighbours of the same element as the central site.
    pub homonuclear: bool,
}

#[derive(Default)]
pub struct SurveyConfigBuilder {
    radius: Option<f64>,
    isotope: Option<String>,
    homonuclear: bool,
}

impl SurveyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn isotope(mut self, isotope: impl Into<String>) -> Self {
        self.isotope = Some(isotope.into());
        self
    }
    pub fn homonuclear(mut self, homonuclear: bool) -> Self {
        self.homonuclear = homonuclear;
        self
    }

    pub fn build(self) -> Result<SurveyConfig, ConfigError> {
        let radius = self.radius.ok_or(ConfigError::MissingParameter("radius"))?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "radius",
                reason: format!("must be a positive distance in Ångström, got {radius}"),
            });
        }
        Ok(SurveyConfig {
            radius,
            isotope: self.isotope,
            homonuclear: self.homonuclear,
        })
    }
}

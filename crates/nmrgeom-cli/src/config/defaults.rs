use nmrgeom::core::models::tensor::EigenOrder;
use nmrgeom::core::rotation::euler::{EulerConvention, RotationSense};

pub struct DefaultsConfig {
    pub convention: EulerConvention,
    pub sense: RotationSense,
    pub order_a: EigenOrder,
    pub order_b: EigenOrder,
    pub include_equivalent: bool,
    pub radians: bool,
    pub survey_radius: f64,
    pub survey_homonuclear: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            convention: EulerConvention::Zyz,
            sense: RotationSense::Active,
            order_a: EigenOrder::Haeberlen,
            order_b: EigenOrder::Haeberlen,
            include_equivalent: false,
            radians: false,
            survey_radius: 3.0,
            survey_homonuclear: false,
        }
    }
}

use nalgebra::Matrix3;
use serde::Deserialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `|cos β|` within this distance of 1 is treated as gimbal lock.
const GIMBAL_LOCK_TOLERANCE: f64 = 4.0 * f64::EPSILON;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RotationError {
    #[error("Unrecognised Euler angles convention '{0}'. Expected 'zyz' or 'zxz'.")]
    UnknownConvention(String),
}

/// Axis sequence of the three elementary rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EulerConvention {
    #[default]
    Zyz,
    Zxz,
}

impl EulerConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            EulerConvention::Zyz => "zyz",
            EulerConvention::Zxz => "zxz",
        }
    }
}

impl fmt::Display for EulerConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EulerConvention {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zyz" => Ok(EulerConvention::Zyz),
            "zxz" => Ok(EulerConvention::Zxz),
            _ => Err(RotationError::UnknownConvention(s.to_string())),
        }
    }
}

/// Whether angles describe a rotation of the object (active) or of the coordinate
/// frame (passive). The two are inverses of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationSense {
    #[default]
    Active,
    Passive,
}

/// An (α, β, γ) Euler angle triple in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl EulerAngles {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// The same triple in degrees, for display.
    pub fn to_degrees(&self) -> [f64; 3] {
        [
            self.alpha.to_degrees(),
            self.beta.to_degrees(),
            self.gamma.to_degrees(),
        ]
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}

/// Outcome of reading α and γ off a rotation matrix.
///
/// When β is 0 or π the first and last rotations share an axis and only their sum (or
/// difference) is determined. That case is its own arm with its own formula rather than
/// a fallthrough of the general one.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Extraction {
    Degenerate { alpha: f64 },
    General { alpha: f64, gamma: f64 },
}

impl Extraction {
    fn angles(self, beta: f64) -> EulerAngles {
        match self {
            Extraction::Degenerate { alpha } => EulerAngles::new(alpha, beta, 0.0),
            Extraction::General { alpha, gamma } => EulerAngles::new(alpha, beta, gamma),
        }
    }
}

fn extract(r: &Matrix3<f64>, convention: EulerConvention) -> (f64, Extraction) {
    // Clamp absorbs rounding that pushes a unit cosine slightly past ±1.
    let cos_beta = r[(2, 2)].clamp(-1.0, 1.0);
    let beta = cos_beta.acos();

    if (cos_beta.abs() - 1.0).abs() <= GIMBAL_LOCK_TOLERANCE {
        let alpha = r[(0, 1)].atan2(r[(0, 0)]);
        return (beta, Extraction::Degenerate { alpha });
    }

    let extraction = match convention {
        EulerConvention::Zyz => Extraction::General {
            alpha: r[(2, 1)].atan2(r[(2, 0)]),
            gamma: r[(1, 2)].atan2(-r[(0, 2)]),
        },
        EulerConvention::Zxz => Extraction::General {
            alpha: r[(2, 0)].atan2(-r[(2, 1)]),
            gamma: r[(0, 2)].atan2(r[(1, 2)]),
        },
    };
    (beta, extraction)
}

/// Folds an angle into [0, 2π).
fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU, and returns -0.0 for -0.0.
    if wrapped >= TAU || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Raw Euler angles of `r`, before any sense remapping or range folding.
///
/// α and γ come straight from `atan2` and lie in (−π, π]; β lies in [0, π]. Useful for
/// comparing against tabulated values and for diagnosing the folding step.
pub fn unfolded_euler_from_rotation(r: &Matrix3<f64>, convention: EulerConvention) -> EulerAngles {
    let (beta, extraction) = extract(r, convention);
    extraction.angles(beta)
}

/// Decomposes a rotation matrix into canonical Euler angles.
///
/// The result always has β ∈ [0, π/2], with α and γ folded into [0, 2π). The folding
/// picks one representative among the orientations that are equivalent for a
/// second-rank tensor, so the returned triple is not in general the exact inverse of
/// [`rotation_matrix_from_zyz`](super::compose::rotation_matrix_from_zyz) when β > π/2.
///
/// # Arguments
///
/// * `r` - Rotation matrix, typically from [`rotation_between`](super::compose::rotation_between).
/// * `convention` - Axis sequence used to read the angles.
/// * `sense` - Whether the angles describe an active or a passive rotation.
pub fn euler_from_rotation(
    r: &Matrix3<f64>,
    convention: EulerConvention,
    sense: RotationSense,
) -> EulerAngles {
    let raw = unfolded_euler_from_rotation(r, convention);
    match sense {
        RotationSense::Active => fold_active(raw),
        RotationSense::Passive => fold_passive(to_passive(raw)),
    }
}

/// Remaps active angles to the passive rotation (its inverse): the order of the
/// elementary rotations reverses and every angle changes sign.
fn to_passive(active: EulerAngles) -> EulerAngles {
    EulerAngles::new(
        wrap_two_pi(-active.gamma),
        wrap_two_pi(-active.beta),
        wrap_two_pi(-active.alpha),
    )
}

/// Range folding for active angles. The π corrections land on α and γ in that order.
fn fold_active(angles: EulerAngles) -> EulerAngles {
    let mut a = wrap_two_pi(angles.alpha);
    let mut b = wrap_two_pi(angles.beta);
    let mut c = wrap_two_pi(angles.gamma);

    if b > PI {
        a = wrap_two_pi(a - PI);
        b = TAU - b;
    }

    if b >= FRAC_PI_2 {
        a = wrap_two_pi(a + PI);
        b = wrap_two_pi(PI - b);
        c = wrap_two_pi(PI - c);
    }

    if c >= PI {
        c -= PI;
    }

    EulerAngles::new(a, b, c)
}

/// Range folding for passive angles, which arrive already remapped and wrapped.
///
/// Mirrors [`fold_active`] with the roles of α and γ exchanged, since passive
/// decomposition reverses the first and last rotations.
fn fold_passive(angles: EulerAngles) -> EulerAngles {
    let EulerAngles {
        alpha: mut a,
        beta: mut b,
        gamma: mut c,
    } = angles;

    if b > PI {
        c = wrap_two_pi(c - PI);
        b = TAU - b;
    }

    if b >= FRAC_PI_2 {
        a = wrap_two_pi(PI - a);
        b = wrap_two_pi(PI - b);
        c = wrap_two_pi(PI + c);
    }

    if a >= PI {
        a -= PI;
    }

    EulerAngles::new(a, b, c)
}

//! Placeholder body-measurement estimator
//!
//! No model runs here. Every output derives from a single "base waist" that is
//! scaled from the weight/height ratio, until a real estimator replaces it.

mod number;

pub use number::{parse_leading_float, round_half_up};

use schemars::JsonSchema;
use serde::{Serialize, Serializer};

/// Unit every measurement is reported in
pub const UNIT: &str = "cm";

/// Fixed confidence reported with placeholder values
pub const CONFIDENCE: f64 = 0.6;

/// Disclaimer returned with every estimate
pub const NOTES: &str =
    "Demo values only. Replace with a real AI body-measurement model or API when you're ready.";

/// Base waist used when height or weight is not a number
pub const DEFAULT_BASE_WAIST: f64 = 90.0;

/// Height substituted for a height of zero
pub const FALLBACK_HEIGHT_CM: f64 = 170.0;

/// Estimated body measurements, in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Measurements {
    /// Chest circumference
    #[serde(serialize_with = "serialize_number")]
    pub chest: f64,
    /// Waist circumference
    #[serde(serialize_with = "serialize_number")]
    pub waist: f64,
    /// Hip circumference
    #[serde(serialize_with = "serialize_number")]
    pub hips: f64,
    /// Thigh circumference
    #[serde(serialize_with = "serialize_number")]
    pub thigh: f64,
    /// Upper arm circumference
    #[serde(serialize_with = "serialize_number")]
    pub arm: f64,
}

impl Measurements {
    /// Derives every measurement from the base waist
    #[must_use]
    pub fn from_base_waist(base_waist: f64) -> Self {
        Self {
            chest: base_waist + 10.0,
            waist: base_waist,
            hips: base_waist + 5.0,
            thigh: round_half_up(base_waist * 0.6),
            arm: round_half_up(base_waist * 0.4),
        }
    }
}

/// Computes the base waist from optional height (cm) and weight (kg).
///
/// Both values must be numbers for them to count. A height of zero is read
/// as [`FALLBACK_HEIGHT_CM`].
#[must_use]
pub fn base_waist(height: Option<f64>, weight: Option<f64>) -> f64 {
    match (height, weight) {
        (Some(height), Some(weight)) => {
            #[allow(clippy::float_cmp)]
            let height = if height == 0.0 {
                FALLBACK_HEIGHT_CM
            } else {
                height
            };
            round_half_up((weight / height) * 90.0)
        }
        _ => DEFAULT_BASE_WAIST,
    }
}

/// Estimates measurements from optional height (cm) and weight (kg)
#[must_use]
pub fn estimate(height: Option<f64>, weight: Option<f64>) -> Measurements {
    Measurements::from_base_waist(base_waist(height, weight))
}

/// Writes integral values as JSON integers and non-finite values as `null`
#[allow(clippy::trivially_copy_pass_by_ref, clippy::float_cmp)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

//! Documented bounds for every numeric observation field.
//!
//! The input form, the validator and the CLI template all read from this
//! table, so a bound is changed in exactly one place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Defines the valid range for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl FieldRange {
    const fn whole(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    const fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

pub const GCS_EYE: FieldRange = FieldRange::whole(1.0, 4.0);
pub const GCS_VERBAL: FieldRange = FieldRange::whole(1.0, 5.0);
pub const GCS_MOTOR: FieldRange = FieldRange::whole(1.0, 6.0);

/// Sensory perception, moisture, activity, mobility and nutrition.
pub const BRADEN_FACTOR: FieldRange = FieldRange::whole(1.0, 4.0);
pub const BRADEN_FRICTION_SHEAR: FieldRange = FieldRange::whole(1.0, 3.0);

/// Seconds.
pub const CAPILLARY_REFILL: FieldRange = FieldRange::continuous(0.0, 10.0);

/// Breaths per minute.
pub const RESPIRATORY_RATE: FieldRange = FieldRange::whole(5.0, 60.0);
/// mmHg.
pub const SYSTOLIC_BP: FieldRange = FieldRange::whole(50.0, 220.0);
/// Degrees Celsius.
pub const TEMPERATURE: FieldRange = FieldRange::continuous(30.0, 43.0);
/// Beats per minute.
pub const HEART_RATE: FieldRange = FieldRange::whole(30.0, 200.0);
/// Percent.
pub const SPO2: FieldRange = FieldRange::whole(50.0, 100.0);

pub const VIP: FieldRange = FieldRange::whole(0.0, 5.0);
pub const RASS: FieldRange = FieldRange::whole(-5.0, 4.0);

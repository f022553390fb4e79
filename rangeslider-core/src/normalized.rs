//! Fractional position along the track, clamped to `[0, 1]`.

use serde::{Deserialize, Serialize};

/// A position along the track expressed as a fraction of its width.
///
/// The value is clamped when it is constructed, never when it is read, so a
/// `NormalizedValue` in hand is always inside `[0, 1]`. There is no setter:
/// "assigning" means replacing the value with a new one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct NormalizedValue(f64);

impl NormalizedValue {
    pub const MIN: NormalizedValue = NormalizedValue(0.0);
    pub const MAX: NormalizedValue = NormalizedValue(1.0);

    /// Clamp `value` into `[0, 1]`. NaN maps to the track start.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for NormalizedValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<NormalizedValue> for f64 {
    fn from(value: NormalizedValue) -> Self {
        value.0
    }
}

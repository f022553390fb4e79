//! The real-world value interval a track maps onto.

use serde::Serialize;

use crate::error::ConfigError;
use crate::geometry::finite;
use crate::normalized::NormalizedValue;

/// A non-empty value interval `[start, end]`.
///
/// Construction rejects `end <= start`, so `span()` is always positive and the
/// real-to-normalized conversion never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    start: f64,
    end: f64,
}

impl ValueRange {
    pub fn new(start: f64, end: f64) -> Result<Self, ConfigError> {
        finite("value_start", start)?;
        finite("value_end", end)?;
        if end <= start {
            return Err(ConfigError::EmptyValueRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// `end - start`.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Map a fraction of the track onto the interval.
    pub fn real_value(&self, normalized: NormalizedValue) -> f64 {
        self.start + normalized.get() * self.span()
    }

    /// Map a real value onto the track; values outside the interval clamp to
    /// its ends.
    pub fn normalize(&self, real: f64) -> NormalizedValue {
        NormalizedValue::new((real - self.start) / self.span())
    }
}

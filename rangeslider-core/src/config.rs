//! Serializable slider configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{finite, TrackGeometry};
use crate::range::ValueRange;

/// Everything needed to build a [`RangeSlider`](crate::RangeSlider).
///
/// Every key is optional in TOML; missing keys take the reference widget's
/// values (a 0..100 range on a 300 px track, handles at both ends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    pub value_start: f64,
    pub value_end: f64,
    /// Initial fraction of the low handle; clamped into `[0, 1]`.
    pub low_initial: f64,
    /// Initial fraction of the high handle; clamped into `[0, 1]`.
    pub high_initial: f64,
    pub geometry: TrackGeometry,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value_start: 0.0,
            value_end: 100.0,
            low_initial: 0.0,
            high_initial: 1.0,
            geometry: TrackGeometry::default(),
        }
    }
}

impl SliderConfig {
    /// A default configuration over `[start, end]`.
    pub fn with_range(start: f64, end: f64) -> Self {
        Self {
            value_start: start,
            value_end: end,
            ..Self::default()
        }
    }

    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.value_range()?;
        finite("low_initial", self.low_initial)?;
        finite("high_initial", self.high_initial)?;
        Ok(())
    }

    pub fn value_range(&self) -> Result<ValueRange, ConfigError> {
        ValueRange::new(self.value_start, self.value_end)
    }
}

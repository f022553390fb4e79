//! Track geometry and pixel coordinates.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A pixel coordinate in track space. `x` runs along the track from `0` to
/// `track_width`; `y` runs across it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed size of the track and its handles, shared by both handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackGeometry {
    /// Length of the track in pixels.
    pub track_width: f64,
    /// Stroke thickness of the track; handles sit on its centre line.
    pub track_thickness: f64,
    /// Diameter of a handle glyph, also its grab area.
    pub handle_diameter: f64,
}

impl TrackGeometry {
    pub const DEFAULT_TRACK_WIDTH: f64 = 300.0;
    pub const DEFAULT_TRACK_THICKNESS: f64 = 4.0;
    pub const DEFAULT_HANDLE_DIAMETER: f64 = 19.0;

    pub fn new(
        track_width: f64,
        track_thickness: f64,
        handle_diameter: f64,
    ) -> Result<Self, ConfigError> {
        let geometry = Self {
            track_width,
            track_thickness,
            handle_diameter,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("track_width", self.track_width)?;
        positive("track_thickness", self.track_thickness)?;
        finite("handle_diameter", self.handle_diameter)?;
        if self.handle_diameter < 0.0 {
            return Err(ConfigError::Negative {
                field: "handle_diameter",
                value: self.handle_diameter,
            });
        }
        Ok(())
    }

    /// The y coordinate every handle is locked to.
    pub fn center_y(&self) -> f64 {
        self.track_thickness / 2.0
    }

    /// Whether `x` lies on the track, ends included.
    pub fn contains_x(&self, x: f64) -> bool {
        (0.0..=self.track_width).contains(&x)
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self {
            track_width: Self::DEFAULT_TRACK_WIDTH,
            track_thickness: Self::DEFAULT_TRACK_THICKNESS,
            handle_diameter: Self::DEFAULT_HANDLE_DIAMETER,
        }
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

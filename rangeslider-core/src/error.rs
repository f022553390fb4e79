//! Error types for slider construction and the text input boundary.
//!
//! Drag and value updates never fail: out-of-track samples are ignored and
//! out-of-range values are clamped. Only construction (bad geometry or an
//! empty value range) and text commits can produce an error.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected slider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("value range is empty: start {start} must be below end {end}")]
    EmptyValueRange { start: f64, end: f64 },

    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Rejected text commit from a numeric input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("not a number: {0:?}")]
    NotNumeric(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = ConfigError::NotPositive {
            field: "track_width",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "track_width must be positive (got 0)");

        let err = ConfigError::EmptyValueRange {
            start: 5.0,
            end: 5.0,
        };
        assert!(err.to_string().contains("start 5 must be below end 5"));
    }

    #[test]
    fn input_error_quotes_the_text() {
        let err = InputError::NotNumeric("abc".into());
        assert_eq!(err.to_string(), "not a number: \"abc\"");
    }
}

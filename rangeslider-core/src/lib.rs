//! Range slider core: the model behind a dual-handle range selection slider.
//!
//! This crate holds everything with real logic and no drawing:
//! - Normalized track position, clamped on construction
//! - Track geometry and the real-world value range it maps onto
//! - Handle: drag bounding, axis lock, value-driven relocation, drag lifecycle
//! - RangeSlider: two handles on one track, gap readouts, event re-broadcast
//! - Integer text formatter for the numeric input boundary
//! - TOML configuration with fail-fast validation
//!
//! Rendering lives in `rangeslider-tui`.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod geometry;
pub mod handle;
pub mod normalized;
pub mod notify;
pub mod range;

pub use config::SliderConfig;
pub use controller::{HandleId, HandleSnapshot, RangeSlider, SliderEvent, SliderSnapshot};
pub use error::{ConfigError, InputError};
pub use format::{format_gap, IntegerFormatter};
pub use geometry::{Point, TrackGeometry};
pub use handle::{DragOutcome, DragState, Handle, HandleEvent, ValueOutcome};
pub use normalized::NormalizedValue;
pub use notify::{Notifier, SubscriptionId};
pub use range::ValueRange;

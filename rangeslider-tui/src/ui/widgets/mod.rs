pub mod slider;

pub use slider::{RangeSliderWidget, TrackMapping};

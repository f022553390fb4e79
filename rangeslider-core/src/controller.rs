//! Dual-handle controller: a low and a high handle on one shared track.
//!
//! The controller owns both handles, routes inbound gesture and value events
//! to the right one, derives the gap readouts, and re-broadcasts every
//! handle notification on its own [`Notifier`] tagged with the handle's id.
//!
//! Handles are allowed to cross. Nothing keeps `low <= high`, and the gap
//! readouts go negative when they do.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SliderConfig;
use crate::error::{ConfigError, InputError};
use crate::format::{format_gap, IntegerFormatter};
use crate::geometry::{Point, TrackGeometry};
use crate::handle::{DragOutcome, Handle, HandleEvent, ValueOutcome};
use crate::normalized::NormalizedValue;
use crate::notify::{Notifier, SubscriptionId};
use crate::range::ValueRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleId {
    Low,
    High,
}

impl HandleId {
    pub fn label(self) -> &'static str {
        match self {
            HandleId::Low => "Lower",
            HandleId::High => "Upper",
        }
    }

    pub fn other(self) -> HandleId {
        match self {
            HandleId::Low => HandleId::High,
            HandleId::High => HandleId::Low,
        }
    }
}

/// A handle notification as re-broadcast by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderEvent {
    pub handle: HandleId,
    pub change: HandleEvent,
}

/// Point-in-time readout of one handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleSnapshot {
    pub real_value: f64,
    pub normalized: NormalizedValue,
    pub dragging: bool,
}

/// Point-in-time readout of the whole slider, for hosts that poll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSnapshot {
    pub low: HandleSnapshot,
    pub high: HandleSnapshot,
    pub percentage_gap: f64,
    pub value_gap: f64,
}

#[derive(Debug)]
pub struct RangeSlider {
    geometry: TrackGeometry,
    range: ValueRange,
    low: Handle,
    high: Handle,
    formatter: IntegerFormatter,
    notifier: Notifier<SliderEvent>,
}

impl RangeSlider {
    /// Build a slider, rejecting empty value ranges and degenerate tracks.
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let geometry = config.geometry;
        let range = config.value_range()?;

        let low = Handle::new(geometry, range, NormalizedValue::new(config.low_initial));
        let high = Handle::new(geometry, range, NormalizedValue::new(config.high_initial));

        let notifier = Notifier::new();
        forward(&low, HandleId::Low, &notifier);
        forward(&high, HandleId::High, &notifier);

        Ok(Self {
            geometry,
            range,
            low,
            high,
            formatter: IntegerFormatter::default(),
            notifier,
        })
    }

    /// Reference widget over `[start, end]`: 300 px track, handles at both
    /// ends.
    pub fn with_range(start: f64, end: f64) -> Result<Self, ConfigError> {
        Self::new(&SliderConfig::with_range(start, end))
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn formatter(&self) -> &IntegerFormatter {
        &self.formatter
    }

    pub fn low(&self) -> &Handle {
        &self.low
    }

    pub fn high(&self) -> &Handle {
        &self.high
    }

    pub fn handle(&self, id: HandleId) -> &Handle {
        match id {
            HandleId::Low => &self.low,
            HandleId::High => &self.high,
        }
    }

    pub fn handle_mut(&mut self, id: HandleId) -> &mut Handle {
        match id {
            HandleId::Low => &mut self.low,
            HandleId::High => &mut self.high,
        }
    }

    /// The handle currently being dragged, if any.
    pub fn dragging(&self) -> Option<HandleId> {
        [HandleId::Low, HandleId::High]
            .into_iter()
            .find(|id| self.handle(*id).is_dragging())
    }

    pub fn subscribe(&self, callback: impl FnMut(&SliderEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // ── Readouts ───────────────────────────────────────────────────────

    /// `high.normalized - low.normalized`; negative when the handles cross.
    pub fn percentage_gap(&self) -> f64 {
        self.high.normalized().get() - self.low.normalized().get()
    }

    /// `high.real_value - low.real_value`; negative when the handles cross.
    pub fn value_gap(&self) -> f64 {
        self.high.real_value() - self.low.real_value()
    }

    /// Fractional gap with two decimals, e.g. `"1.00"` for a full selection.
    pub fn percentages_between(&self) -> String {
        format_gap(self.percentage_gap())
    }

    /// Value gap with two decimals, e.g. `"100.00"`.
    pub fn value_between(&self) -> String {
        format_gap(self.value_gap())
    }

    /// Endpoints of the highlighted segment, low handle first.
    pub fn segment(&self) -> (Point, Point) {
        (self.low.location(), self.high.location())
    }

    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            low: snapshot_of(&self.low),
            high: snapshot_of(&self.high),
            percentage_gap: self.percentage_gap(),
            value_gap: self.value_gap(),
        }
    }

    // ── Inbound events ─────────────────────────────────────────────────

    pub fn drag_begin(&mut self, id: HandleId, point: Point) -> DragOutcome {
        self.handle_mut(id).on_drag_begin(point)
    }

    pub fn drag_move(&mut self, id: HandleId, point: Point) -> DragOutcome {
        self.handle_mut(id).on_drag_change(point)
    }

    pub fn drag_end(&mut self, id: HandleId) {
        self.handle_mut(id).on_drag_end();
    }

    pub fn commit_value(&mut self, id: HandleId, value: f64) -> ValueOutcome {
        self.handle_mut(id).update_from_value(value)
    }

    /// Parse field text and commit it. Text that is not a number is
    /// rejected here and never reaches the handle.
    pub fn commit_text(&mut self, id: HandleId, text: &str) -> Result<ValueOutcome, InputError> {
        match self.formatter.parse(text) {
            Ok(value) => Ok(self.commit_value(id, value)),
            Err(err) => {
                debug!(handle = ?id, %err, "text commit rejected");
                Err(err)
            }
        }
    }

    /// Which handle a pointer press at `point` grabs.
    ///
    /// A handle's grab area spans its diameter along the track. When both
    /// areas contain the press the closer handle wins; on a tie (stacked
    /// handles) the high handle is taken unless the press is left of the low
    /// handle or the high handle already sits at the track end.
    pub fn hit_test(&self, point: Point) -> Option<HandleId> {
        if !point.x.is_finite() {
            return None;
        }
        let radius = self.geometry.handle_diameter / 2.0;
        let low_x = self.low.location().x;
        let high_x = self.high.location().x;
        let low_dist = (point.x - low_x).abs();
        let high_dist = (point.x - high_x).abs();

        match (low_dist <= radius, high_dist <= radius) {
            (false, false) => None,
            (true, false) => Some(HandleId::Low),
            (false, true) => Some(HandleId::High),
            (true, true) => match low_dist.total_cmp(&high_dist) {
                Ordering::Less => Some(HandleId::Low),
                Ordering::Greater => Some(HandleId::High),
                Ordering::Equal => {
                    if point.x < low_x || high_x >= self.geometry.track_width {
                        Some(HandleId::Low)
                    } else {
                        Some(HandleId::High)
                    }
                }
            },
        }
    }
}

fn forward(handle: &Handle, id: HandleId, notifier: &Notifier<SliderEvent>) {
    let notifier = notifier.clone();
    handle.subscribe(move |change| {
        notifier.emit(&SliderEvent {
            handle: id,
            change: *change,
        })
    });
}

fn snapshot_of(handle: &Handle) -> HandleSnapshot {
    HandleSnapshot {
        real_value: handle.real_value(),
        normalized: handle.normalized(),
        dragging: handle.is_dragging(),
    }
}

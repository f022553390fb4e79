//! One slider thumb: drag bounding, value relocation, change events.
//!
//! A handle keeps two views of its position in step: the pixel `location`
//! on the track and the `normalized` fraction of the track width. Drag
//! samples move the location and recompute the fraction; value commits set
//! the fraction and recompute the location. Either way the real value is
//! derived from the fraction and the handle's [`ValueRange`].
//!
//! Drag lifecycle:
//!
//! ```text
//! Idle --on_drag_begin--> Dragging --on_drag_change--> Dragging
//!   ^                                                      |
//!   +------------------------on_drag_end-------------------+
//! ```
//!
//! Value commits are dropped while `Dragging` so a text field cannot fight
//! the pointer.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geometry::{Point, TrackGeometry};
use crate::normalized::NormalizedValue;
use crate::notify::{Notifier, SubscriptionId};
use crate::range::ValueRange;

/// Whether a drag gesture is currently active on a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Change notification emitted by a [`Handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleEvent {
    DragStarted,
    Moved {
        normalized: NormalizedValue,
        location: Point,
    },
    DragEnded,
}

/// Result of feeding a drag sample to a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Moved,
    /// The sample's x was off the track (or not a number); nothing changed.
    OutOfTrack,
}

/// Result of pushing a real value into a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOutcome {
    Applied,
    /// A drag is in progress; the value was dropped, not queued.
    DragInProgress,
    NotFinite,
}

#[derive(Debug)]
pub struct Handle {
    geometry: TrackGeometry,
    range: ValueRange,
    normalized: NormalizedValue,
    location: Point,
    drag: DragState,
    notifier: Notifier<HandleEvent>,
}

impl Handle {
    pub fn new(geometry: TrackGeometry, range: ValueRange, initial: NormalizedValue) -> Self {
        Self {
            geometry,
            range,
            normalized: initial,
            location: location_for(&geometry, initial),
            drag: DragState::Idle,
            notifier: Notifier::new(),
        }
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn normalized(&self) -> NormalizedValue {
        self.normalized
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// `start + normalized * span`.
    pub fn real_value(&self) -> f64 {
        self.range.real_value(self.normalized)
    }

    pub fn subscribe(&self, callback: impl FnMut(&HandleEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Apply one pointer sample.
    ///
    /// A sample whose x is outside `[0, track_width]` is ignored entirely.
    /// Otherwise the handle enters `Dragging`, moves to `(x, thickness / 2)`
    /// and recomputes its fraction from the new x.
    pub fn update_from_drag(&mut self, point: Point) -> DragOutcome {
        if !self.geometry.contains_x(point.x) {
            debug!(x = point.x, width = self.geometry.track_width, "drag sample off track");
            return DragOutcome::OutOfTrack;
        }

        self.set_drag(DragState::Dragging);
        self.location = Point::new(point.x, self.geometry.center_y());
        self.normalized = NormalizedValue::new(self.location.x / self.geometry.track_width);
        trace!(x = self.location.x, value = self.real_value(), "handle dragged");
        self.emit_moved();
        DragOutcome::Moved
    }

    /// Move the handle to represent `real`, clamped to the value range.
    ///
    /// Ignored while a drag is in progress.
    pub fn update_from_value(&mut self, real: f64) -> ValueOutcome {
        if self.is_dragging() {
            debug!(value = real, "value commit dropped during drag");
            return ValueOutcome::DragInProgress;
        }
        if !real.is_finite() {
            debug!(value = real, "non-finite value commit ignored");
            return ValueOutcome::NotFinite;
        }

        self.normalized = self.range.normalize(real);
        self.location = location_for(&self.geometry, self.normalized);
        trace!(x = self.location.x, value = self.real_value(), "handle set from value");
        self.emit_moved();
        ValueOutcome::Applied
    }

    /// Start a gesture. The gesture is active even if this first sample is
    /// off the track.
    pub fn on_drag_begin(&mut self, point: Point) -> DragOutcome {
        self.set_drag(DragState::Dragging);
        self.update_from_drag(point)
    }

    pub fn on_drag_change(&mut self, point: Point) -> DragOutcome {
        self.update_from_drag(point)
    }

    /// End the gesture. The position is left where the last sample put it.
    pub fn on_drag_end(&mut self) {
        self.set_drag(DragState::Idle);
    }

    fn set_drag(&mut self, state: DragState) {
        if self.drag == state {
            return;
        }
        self.drag = state;
        let event = match state {
            DragState::Dragging => HandleEvent::DragStarted,
            DragState::Idle => HandleEvent::DragEnded,
        };
        self.notifier.emit(&event);
    }

    fn emit_moved(&self) {
        self.notifier.emit(&HandleEvent::Moved {
            normalized: self.normalized,
            location: self.location,
        });
    }
}

fn location_for(geometry: &TrackGeometry, normalized: NormalizedValue) -> Point {
    Point::new(normalized.get() * geometry.track_width, geometry.center_y())
}

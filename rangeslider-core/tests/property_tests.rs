//! Property tests for handle and controller invariants.
//!
//! Uses proptest to verify:
//! 1. On-track drags map x linearly onto the fraction and lock y
//! 2. Off-track drags leave the handle untouched
//! 3. Value commits round-trip through the real value
//! 4. Drag samples are idempotent
//! 5. Value commits are inert while dragging
//! 6. Normalized values are always inside [0, 1]

use proptest::prelude::*;
use rangeslider_core::{
    Handle, HandleId, NormalizedValue, Point, RangeSlider, SliderConfig, TrackGeometry,
    ValueRange,
};

const WIDTH: f64 = 300.0;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_on_track_x() -> impl Strategy<Value = f64> {
    0.0..=WIDTH
}

fn arb_off_track_x() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6..-1.0e-6_f64, (WIDTH + 1.0e-6)..1.0e6_f64]
}

fn arb_y() -> impl Strategy<Value = f64> {
    -50.0..50.0_f64
}

fn arb_fraction() -> impl Strategy<Value = f64> {
    0.0..=1.0_f64
}

/// A non-empty value range.
fn arb_range() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e4..1.0e4_f64, 1.0e-3..1.0e4_f64).prop_map(|(start, span)| (start, start + span))
}

fn handle_with(initial: f64, start: f64, end: f64) -> Handle {
    Handle::new(
        TrackGeometry::default(),
        ValueRange::new(start, end).unwrap(),
        NormalizedValue::new(initial),
    )
}

// ── 1–2. Drag bounding ───────────────────────────────────────────────

proptest! {
    #[test]
    fn on_track_drag_maps_x(initial in arb_fraction(), x in arb_on_track_x(), y in arb_y()) {
        let mut h = handle_with(initial, 0.0, 100.0);
        h.update_from_drag(Point::new(x, y));

        prop_assert_eq!(h.normalized().get(), x / WIDTH);
        prop_assert_eq!(h.location(), Point::new(x, 2.0));
    }

    #[test]
    fn off_track_drag_is_a_no_op(initial in arb_fraction(), x in arb_off_track_x(), y in arb_y()) {
        let mut h = handle_with(initial, 0.0, 100.0);
        let before = (h.normalized(), h.location(), h.drag_state());

        h.update_from_drag(Point::new(x, y));

        prop_assert_eq!((h.normalized(), h.location(), h.drag_state()), before);
    }
}

// ── 3. Round trip ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn value_round_trips((start, end) in arb_range(), t in arb_fraction()) {
        let v = start + t * (end - start);
        let mut h = handle_with(0.0, start, end);
        h.update_from_value(v);

        let tolerance = 1e-9 * (end - start).max(start.abs()).max(1.0);
        prop_assert!((h.real_value() - v).abs() <= tolerance,
            "wrote {v}, read {}", h.real_value());
    }

    #[test]
    fn values_outside_range_clamp_to_bounds((start, end) in arb_range(), overshoot in 1.0..1.0e6_f64) {
        let mut h = handle_with(0.5, start, end);

        h.update_from_value(end + overshoot);
        prop_assert_eq!(h.normalized(), NormalizedValue::MAX);
        prop_assert_eq!(h.location().x, WIDTH);

        h.update_from_value(start - overshoot);
        prop_assert_eq!(h.normalized(), NormalizedValue::MIN);
        prop_assert_eq!(h.location().x, 0.0);
    }
}

// ── 4–5. Idempotence and drag suppression ────────────────────────────

proptest! {
    #[test]
    fn repeated_drag_sample_is_idempotent(x in -100.0..400.0_f64, y in arb_y()) {
        let mut once = handle_with(0.0, 0.0, 100.0);
        let mut twice = handle_with(0.0, 0.0, 100.0);

        once.update_from_drag(Point::new(x, y));
        twice.update_from_drag(Point::new(x, y));
        twice.update_from_drag(Point::new(x, y));

        prop_assert_eq!(once.normalized(), twice.normalized());
        prop_assert_eq!(once.location(), twice.location());
        prop_assert_eq!(once.drag_state(), twice.drag_state());
    }

    #[test]
    fn commits_are_inert_while_dragging(x in arb_on_track_x(), v in -500.0..500.0_f64) {
        let mut h = handle_with(0.0, 0.0, 100.0);
        h.on_drag_begin(Point::new(x, 2.0));
        let before = (h.normalized(), h.location());

        h.update_from_value(v);

        prop_assert_eq!((h.normalized(), h.location()), before);
    }
}

// ── 6. Clamp on write ────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalized_value_is_always_in_unit_interval(v in proptest::num::f64::ANY) {
        let n = NormalizedValue::new(v).get();
        prop_assert!((0.0..=1.0).contains(&n));
    }

    #[test]
    fn controller_gaps_match_handle_readouts(
        low in -50.0..150.0_f64,
        high in -50.0..150.0_f64,
    ) {
        let mut s = RangeSlider::new(&SliderConfig::default()).unwrap();
        s.commit_value(HandleId::Low, low);
        s.commit_value(HandleId::High, high);

        let expected = s.high().real_value() - s.low().real_value();
        prop_assert_eq!(s.value_gap(), expected);
        prop_assert_eq!(s.value_between(), format!("{expected:.2}"));
        prop_assert!((-1.0..=1.0).contains(&s.percentage_gap()));
    }
}

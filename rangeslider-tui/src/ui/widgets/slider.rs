//! Dual-handle range slider widget.
//!
//! Draws the track, the highlighted segment between the two handles, and
//! the two handle glyphs on a single terminal row, with the range bounds
//! printed underneath when there is room. [`TrackMapping`] converts between
//! terminal columns and track pixels so mouse input and rendering agree on
//! where a handle sits.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use rangeslider_core::{HandleId, NormalizedValue, Point, RangeSlider, TrackGeometry};

use crate::theme;

const TRACK: &str = "─";
const SEGMENT: &str = "━";
const HANDLE: &str = "●";
const HANDLE_DRAGGING: &str = "◉";

/// Column ↔ pixel mapping for one rendered track row.
///
/// The first column of `area` is track x = 0 and the last column is
/// x = `track_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMapping {
    pub area: Rect,
}

impl TrackMapping {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// The row the track is drawn on.
    pub fn row(&self) -> u16 {
        self.area.y
    }

    /// Column a handle at `normalized` is drawn in.
    pub fn column_of(&self, normalized: NormalizedValue) -> u16 {
        let steps = self.area.width.saturating_sub(1);
        self.area.x + (normalized.get() * f64::from(steps)).round() as u16
    }

    /// Track-space point under a terminal cell. Columns left or right of the
    /// track map to x outside `[0, track_width]`.
    pub fn point_at(&self, column: u16, row: u16, geometry: &TrackGeometry) -> Option<Point> {
        if self.area.width < 2 {
            return None;
        }
        let steps = f64::from(self.area.width - 1);
        let dx = f64::from(column) - f64::from(self.area.x);
        let dy = f64::from(row) - f64::from(self.area.y);
        Some(Point::new(
            dx * geometry.track_width / steps,
            geometry.center_y() + dy * geometry.track_width / steps,
        ))
    }
}

pub struct RangeSliderWidget<'a> {
    slider: &'a RangeSlider,
}

impl<'a> RangeSliderWidget<'a> {
    pub fn new(slider: &'a RangeSlider) -> Self {
        Self { slider }
    }

    /// Where the track row will sit inside `area`.
    pub fn mapping(area: Rect) -> TrackMapping {
        TrackMapping::new(Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1) / 2,
            width: area.width,
            height: 1,
        })
    }
}

impl Widget for RangeSliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let mapping = Self::mapping(area);
        let row = mapping.row();

        for x in area.left()..area.right() {
            put(buf, x, row, TRACK, theme::muted());
        }

        // Highlighted segment, drawn the same way whether or not the handles
        // have crossed.
        let low_col = mapping.column_of(self.slider.low().normalized());
        let high_col = mapping.column_of(self.slider.high().normalized());
        for x in low_col.min(high_col)..=low_col.max(high_col) {
            put(buf, x, row, SEGMENT, theme::accent());
        }

        for id in [HandleId::Low, HandleId::High] {
            let handle = self.slider.handle(id);
            let symbol = if handle.is_dragging() {
                HANDLE_DRAGGING
            } else {
                HANDLE
            };
            let col = mapping.column_of(handle.normalized());
            put(buf, col, row, symbol, theme::handle(handle.is_dragging()));
        }

        if row + 1 < area.bottom() {
            self.render_scale(area, row + 1, buf);
        }
    }
}

impl RangeSliderWidget<'_> {
    fn render_scale(&self, area: Rect, row: u16, buf: &mut Buffer) {
        let formatter = self.slider.formatter();
        let start = formatter.format(self.slider.range().start());
        let end = formatter.format(self.slider.range().end());
        let style = theme::muted();

        buf.set_stringn(area.x, row, &start, usize::from(area.width), style);
        let end_width = end.chars().count() as u16;
        if end_width + start.chars().count() as u16 + 1 <= area.width {
            buf.set_string(area.right() - end_width, row, &end, style);
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

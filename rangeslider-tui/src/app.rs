//! Application state for the slider TUI.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{info, warn};

use rangeslider_core::{HandleEvent, HandleId, RangeSlider, ValueOutcome};

use crate::ui::widgets::slider::TrackMapping;

/// Status message severity for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One numeric text input bound to a handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueField {
    pub text: String,
    /// Set while the user is typing; the field then stops following the
    /// handle until the edit is committed or cancelled.
    pub editing: bool,
}

impl ValueField {
    pub fn push(&mut self, c: char) {
        if !self.editing {
            self.text.clear();
            self.editing = true;
        }
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.editing = true;
        self.text.pop();
    }
}

pub struct AppState {
    pub slider: RangeSlider,
    pub low_field: ValueField,
    pub high_field: ValueField,
    pub focus: HandleId,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
    /// Where the track was last drawn. Written during render, read by mouse
    /// input.
    pub track: Cell<Option<TrackMapping>>,
    changed: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new(slider: RangeSlider) -> Self {
        let changed = Rc::new(Cell::new(true));
        let flag = changed.clone();
        slider.subscribe(move |event| {
            flag.set(true);
            if event.change == HandleEvent::DragEnded {
                info!(handle = ?event.handle, "drag ended");
            }
        });

        let mut app = Self {
            slider,
            low_field: ValueField::default(),
            high_field: ValueField::default(),
            focus: HandleId::Low,
            running: true,
            status_message: None,
            track: Cell::new(None),
            changed,
        };
        app.sync_fields();
        app
    }

    pub fn field(&self, id: HandleId) -> &ValueField {
        match id {
            HandleId::Low => &self.low_field,
            HandleId::High => &self.high_field,
        }
    }

    pub fn field_mut(&mut self, id: HandleId) -> &mut ValueField {
        match id {
            HandleId::Low => &mut self.low_field,
            HandleId::High => &mut self.high_field,
        }
    }

    /// True while any field holds uncommitted text.
    pub fn is_editing(&self) -> bool {
        self.low_field.editing || self.high_field.editing
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Refresh field text from the handles if the slider changed since the
    /// last call. Fields being edited are left alone.
    pub fn sync_fields(&mut self) {
        if !self.changed.replace(false) {
            return;
        }
        for id in [HandleId::Low, HandleId::High] {
            let text = self
                .slider
                .formatter()
                .format(self.slider.handle(id).real_value());
            let field = self.field_mut(id);
            if !field.editing {
                field.text = text;
            }
        }
    }

    /// Drop the focused field's pending edit and show the handle value again.
    pub fn cancel_edit(&mut self) {
        let id = self.focus;
        self.field_mut(id).editing = false;
        self.changed.set(true);
    }

    pub fn focus_next(&mut self) {
        self.cancel_edit();
        self.focus = self.focus.other();
    }

    /// Commit the focused field's text to its handle.
    pub fn commit_focused(&mut self) {
        let id = self.focus;
        let text = self.field(id).text.clone();
        match self.slider.commit_text(id, &text) {
            Ok(ValueOutcome::Applied) => {
                let shown = self
                    .slider
                    .formatter()
                    .format(self.slider.handle(id).real_value());
                self.set_status(format!("{} set to {shown}", id.label()));
                self.cancel_edit();
            }
            Ok(ValueOutcome::DragInProgress) => {
                self.set_warning(format!("{} is being dragged; value ignored", id.label()));
                self.cancel_edit();
            }
            Ok(ValueOutcome::NotFinite) => {
                self.set_warning(format!("{}: value out of range", id.label()));
                self.cancel_edit();
            }
            Err(err) => {
                warn!(handle = ?id, %err, "rejected field text");
                self.set_error(format!("{}: {err}", id.label()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(RangeSlider::with_range(0.0, 2000.0).unwrap())
    }

    #[test]
    fn fields_start_at_handle_values() {
        let app = app();
        assert_eq!(app.low_field.text, "0");
        assert_eq!(app.high_field.text, "2,000");
        assert!(!app.is_editing());
    }

    #[test]
    fn typing_replaces_then_appends() {
        let mut field = ValueField {
            text: "2,000".into(),
            editing: false,
        };
        field.push('1');
        field.push('5');
        assert_eq!(field.text, "15");
        assert!(field.editing);
    }

    #[test]
    fn commit_applies_and_resyncs_rounded_value() {
        let mut app = app();
        app.focus = HandleId::High;
        app.high_field.text = "1499.6".into();
        app.high_field.editing = true;

        app.commit_focused();
        app.sync_fields();

        assert_eq!(app.slider.high().real_value(), 1500.0);
        assert_eq!(app.high_field.text, "1,500");
        assert!(!app.high_field.editing);
        assert_eq!(
            app.status_message,
            Some(("Upper set to 1,500".to_string(), StatusLevel::Info))
        );
    }

    #[test]
    fn bad_text_keeps_edit_open() {
        let mut app = app();
        app.low_field.text = "-".into();
        app.low_field.editing = true;

        app.commit_focused();
        app.sync_fields();

        assert_eq!(app.low_field.text, "-");
        assert!(app.low_field.editing);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
        assert_eq!(app.slider.low().real_value(), 0.0);
    }

    #[test]
    fn editing_field_ignores_slider_changes() {
        let mut app = app();
        app.high_field.push('7');
        app.slider.commit_value(HandleId::High, 500.0);
        app.slider.commit_value(HandleId::Low, 250.0);
        app.sync_fields();

        assert_eq!(app.high_field.text, "7");
        assert_eq!(app.low_field.text, "250");
    }

    #[test]
    fn switching_focus_cancels_edit() {
        let mut app = app();
        app.low_field.push('9');
        app.focus_next();
        app.sync_fields();

        assert_eq!(app.focus, HandleId::High);
        assert_eq!(app.low_field.text, "0");
        assert!(!app.is_editing());
    }
}

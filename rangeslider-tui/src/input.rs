//! Input dispatch: keys drive the text fields, the mouse drives the handles.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use crate::app::AppState;

/// Rows above or below the track that still grab a handle.
const GRAB_ROWS: u16 = 1;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char(c) if accepts(c) => {
            let id = app.focus;
            app.field_mut(id).push(c);
        }
        KeyCode::Backspace => {
            let id = app.focus;
            app.field_mut(id).backspace();
        }
        KeyCode::Enter => app.commit_focused(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.focus_next(),
        KeyCode::Esc if app.is_editing() => app.cancel_edit(),
        KeyCode::Esc | KeyCode::Char('q') if !app.is_editing() => {
            app.running = false;
        }
        _ => {}
    }
}

/// Characters a numeric field takes: digits, sign, grouping and decimal
/// separators.
fn accepts(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | ',' | '.')
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let Some(mapping) = app.track.get() else {
        return;
    };

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row.abs_diff(mapping.row()) > GRAB_ROWS {
                return;
            }
            let Some(point) = mapping.point_at(mouse.column, mouse.row, app.slider.geometry())
            else {
                return;
            };
            match app.slider.hit_test(point) {
                Some(id) => {
                    app.cancel_edit();
                    app.focus = id;
                    app.slider.drag_begin(id, point);
                }
                None => debug!(x = point.x, "press missed both handles"),
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(id) = app.slider.dragging() else {
                return;
            };
            if let Some(point) = mapping.point_at(mouse.column, mouse.row, app.slider.geometry()) {
                app.slider.drag_move(id, point);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(id) = app.slider.dragging() {
                app.slider.drag_end(id);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use rangeslider_core::{HandleId, RangeSlider};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> AppState {
        AppState::new(RangeSlider::with_range(0.0, 100.0).unwrap())
    }

    #[test]
    fn typed_value_commits_on_enter() {
        let mut app = app();
        for c in "42".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.slider.low().real_value(), 42.0);
        assert!(!app.is_editing());
    }

    #[test]
    fn letters_are_not_typed() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(!app.is_editing());
        assert_eq!(app.low_field.text, "0");
    }

    #[test]
    fn q_types_nothing_and_quits_only_when_idle() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('5')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.running);

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.running);
        assert!(!app.is_editing());

        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn tab_moves_focus() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, HandleId::High);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focus, HandleId::Low);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('7'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.is_editing());
    }

    #[test]
    fn mouse_before_first_draw_is_ignored() {
        let mut app = app();
        handle_mouse(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app.slider.dragging(), None);
    }
}

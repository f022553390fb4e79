//! Top-level UI layout: value fields, slider, gap readout, status bar.

pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use rangeslider_core::HandleId;

use crate::app::AppState;
use crate::theme;
use widgets::RangeSliderWidget;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_fields(f, chunks[0], app);
    draw_slider(f, chunks[1], app);
    draw_readout(f, chunks[2], app);
    status_bar::render(f, chunks[4], app);
}

fn draw_fields(f: &mut Frame, area: Rect, app: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (id, rect) in [(HandleId::Low, halves[0]), (HandleId::High, halves[1])] {
        let active = app.focus == id;
        let field = app.field(id);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(active))
            .title(format!(" {} ", id.label()))
            .title_style(theme::panel_title(active));

        let mut spans = vec![Span::styled(field.text.as_str(), theme::text())];
        if active && field.editing {
            spans.push(Span::styled("_", theme::accent_bold()));
        }
        f.render_widget(Paragraph::new(Line::from(spans)).block(block), rect);
    }
}

fn draw_slider(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(app.slider.dragging().is_some()))
        .title(" Range ")
        .title_style(theme::panel_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // One column of padding so end-of-track handles clear the border.
    let track_area = inner.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    app.track.set(if track_area.width >= 2 {
        Some(RangeSliderWidget::mapping(track_area))
    } else {
        None
    });
    f.render_widget(RangeSliderWidget::new(&app.slider), track_area);
}

fn draw_readout(f: &mut Frame, area: Rect, app: &AppState) {
    let gap_style = theme::gap(app.slider.value_gap());
    let line = Line::from(vec![
        Span::styled(" Gap: ", theme::muted()),
        Span::styled(app.slider.percentages_between(), gap_style),
        Span::styled(" | ", theme::muted()),
        Span::styled(app.slider.value_between(), gap_style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rangeslider_core::RangeSlider;

    fn render(app: &AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(65, 14)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    fn line(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width)
            .map(|x| buf.cell((x, row)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn draw_records_track_mapping() {
        let app = AppState::new(RangeSlider::with_range(0.0, 100.0).unwrap());
        render(&app);
        let mapping = app.track.get().unwrap();
        assert_eq!(mapping.area, Rect::new(2, 5, 61, 1));
    }

    #[test]
    fn readout_shows_both_gaps() {
        let app = AppState::new(RangeSlider::with_range(0.0, 100.0).unwrap());
        let terminal = render(&app);
        assert!(line(&terminal, 8).starts_with(" Gap: 1.00 | 100.00"));
    }

    #[test]
    fn fields_show_labels_and_values() {
        let app = AppState::new(RangeSlider::with_range(0.0, 100.0).unwrap());
        let terminal = render(&app);
        assert!(line(&terminal, 0).contains("Lower"));
        assert!(line(&terminal, 0).contains("Upper"));
        let values = line(&terminal, 1);
        assert!(values.contains("│0"));
        assert!(values.contains("│100"));
    }

    #[test]
    fn tiny_terminal_clears_mapping() {
        let app = AppState::new(RangeSlider::with_range(0.0, 100.0).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(4, 14)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        assert!(app.track.get().is_none());
    }
}

//! Screen layout and status bar

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the centered form column
const FORM_WIDTH: u16 = 60;

/// Split the screen into the form column and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Max(FORM_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    (columns[1], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let errors = app.state.form.errors();

    let mut spans = vec![if errors.is_empty() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!(" ● {} error(s) ", errors.active().len()),
            Style::default().fg(Color::Red),
        )
    }];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::styled(
        " | ^C:quit ",
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

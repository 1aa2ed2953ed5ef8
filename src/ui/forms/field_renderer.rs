//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Character shown in place of each character of a secret value
const MASK_CHAR: char = '•';

/// Text shown inside an input
pub fn display_value(value: &str, is_secret: bool) -> String {
    if is_secret {
        value.chars().map(|_| MASK_CHAR).collect()
    } else {
        value.to_string()
    }
}

/// Draw a single-line input with its error message underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    error: &str,
    is_active: bool,
    is_secret: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let has_error = !error.is_empty();
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let shown = display_value(value, is_secret);
    let cursor = if is_active { "▌" } else { "" };

    let content = if shown.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(shown, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    let error_line = Paragraph::new(Span::styled(
        format!(" {error}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(error_line, chunks[1]);
}

//! Signup form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FocusRow;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::validation::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the submit button
const BUTTON_WIDTH: u16 = 12;

/// Draw the signup form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Please sign up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let form = &app.state.form;
    let config = form.config();
    for field in FieldId::ALL {
        let label = match field {
            FieldId::Password => {
                format!("{} ({}-{} chars)", field.label(), config.min, config.max)
            }
            _ => field.label().to_string(),
        };
        draw_field(
            frame,
            chunks[field.index()],
            &label,
            form.value(field),
            form.error(field),
            app.state.focus == FocusRow::Field(field),
            field.is_secret(),
        );
    }

    let submit_row = FieldId::ALL.len();
    let button_area = Rect {
        width: BUTTON_WIDTH.min(chunks[submit_row].width),
        ..chunks[submit_row]
    };
    let submit_selected = app.state.focus == FocusRow::SubmitButton;
    render_button(frame, button_area, "Submit", submit_selected);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": clear"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[submit_row + 1]);
}

//! Field rendering utilities for forms

use crate::state::Outcome;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus a message line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a single-line text field with its validation message underneath.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    outcome: Outcome,
    is_active: bool,
    is_secret: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let error = outcome.error();
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if outcome.is_valid() && !is_active {
        Style::default().fg(Color::Green)
    } else {
        style
    };

    let display_value = if is_secret {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    frame.render_widget(input.block(block), input_area);

    if area.height > 3 {
        let message_area = Rect {
            y: area.y + 3,
            height: 1,
            ..area
        };
        let message = match error {
            Some(error) => Span::styled(format!(" {error}"), Style::default().fg(Color::Red)),
            None if outcome.is_valid() => Span::styled(" ✓", Style::default().fg(Color::Green)),
            None => Span::raw(""),
        };
        frame.render_widget(Paragraph::new(Line::from(message)), message_area);
    }
}

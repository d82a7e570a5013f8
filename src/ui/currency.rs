//! Currency converter view

use crate::app::App;
use crate::state::{ConverterFocus, Currency};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_currency_picker(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    currency: Currency,
    is_active: bool,
) {
    let text = Line::from(vec![
        Span::styled(
            format!("{} ({})", currency.code(), currency.symbol()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", currency.name()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Draw the amount input, both currency pickers, and the converted result
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Amount
            Constraint::Length(3), // From
            Constraint::Length(3), // To
            Constraint::Length(3), // Result
            Constraint::Min(0),
        ])
        .split(area);

    let request = app.converter.request();
    let focus = app.state.converter_focus;

    let amount_active = focus == ConverterFocus::Amount;
    let cursor = if amount_active { "▌" } else { "" };
    let amount = Paragraph::new(Line::from(vec![
        Span::raw(request.amount.clone()),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(" Amount ")
            .borders(Borders::ALL)
            .border_style(focus_style(amount_active)),
    );
    frame.render_widget(amount, chunks[0]);

    draw_currency_picker(
        frame,
        chunks[1],
        "From",
        request.source,
        focus == ConverterFocus::Source,
    );
    draw_currency_picker(
        frame,
        chunks[2],
        "To",
        request.target,
        focus == ConverterFocus::Target,
    );

    let converted = app.converter.converted();
    let result = Paragraph::new(Span::styled(
        converted,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().title(" Result ").borders(Borders::ALL));
    frame.render_widget(result, chunks[3]);
}

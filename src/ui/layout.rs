//! Layout components (tab bar, status bar)

use crate::app::App;
use crate::state::{ConverterFocus, RegisterFocus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Split the screen into tab bar, main content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the feature tabs
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| Line::from(format!("F{} {}", idx + 1, view.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.state.current_view.index())
        .block(Block::default().borders(Borders::ALL).title(" formwatch "))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Form validity indicator on the registration view
    if app.state.current_view == View::Register {
        let indicator = if app.is_form_valid() {
            Span::styled(" ● ", Style::default().fg(Color::Green))
        } else {
            Span::styled(" ○ ", Style::default().fg(Color::Red))
        };
        spans.push(indicator);
    } else {
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Currency => match app.state.converter_focus {
            ConverterFocus::Amount => "Tab:next  type:amount  ^S:swap".to_string(),
            _ => "Tab:next  Enter:change currency  ^S:swap".to_string(),
        },
        View::Cart => "a:add sample  d:remove  j/k:nav".to_string(),
        View::Register => match app.state.register_focus {
            RegisterFocus::Submit => "Tab:next  Enter:sign up".to_string(),
            RegisterFocus::Field(_) => "Tab:next  Shift+Tab:prev  type to edit".to_string(),
        },
    }
}

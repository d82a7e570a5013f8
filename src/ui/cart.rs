//! Shopping cart view

use super::widgets::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the cart items and the running total
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Items
            Constraint::Length(3), // Total
        ])
        .split(area);

    let items = app.cart.items();
    let block = Block::default()
        .title(format!(" Cart ({}) ", items.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if items.is_empty() {
        let empty = Paragraph::new("Cart is empty. Press 'a' to add a sample item.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, chunks[0]);
    } else {
        let name_width = items.iter().map(|i| i.name.len()).max().unwrap_or(0);
        let rows: Vec<ListItem> = items
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<name_width$}  ", item.name)),
                    Span::styled(item.formatted_price(), Style::default().fg(Color::Yellow)),
                ]))
            })
            .collect();
        let list = List::new(rows)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");
        render_scrollable_list(frame, chunks[0], list, app.state.selected_index);
    }

    let total = Paragraph::new(Line::from(vec![
        Span::raw(" Total: "),
        Span::styled(
            app.cart.formatted_total(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(total, chunks[1]);
}

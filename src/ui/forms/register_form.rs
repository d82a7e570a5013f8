//! User registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Field, RegisterFocus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form: four validated fields and a submit button
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Username
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Password
            Constraint::Length(FIELD_HEIGHT), // Confirm password
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let focus = app.state.register_focus;
    for (idx, field) in Field::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field.label(),
            &app.form.value(*field),
            app.form.outcome(*field),
            focus == RegisterFocus::Field(*field),
            field.is_secret(),
        );
    }

    // Keep the button narrow, left-aligned under the fields
    let button_area = Rect {
        width: chunks[4].width.min(20),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        "Sign up",
        focus == RegisterFocus::Submit,
        app.is_form_valid(),
    );
}

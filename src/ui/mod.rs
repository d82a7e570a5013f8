//! UI module for rendering the TUI

mod cart;
mod components;
mod currency;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (tabs_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app);

    match app.state.current_view {
        View::Currency => currency::draw(frame, main_area, app),
        View::Cart => cart::draw(frame, main_area, app),
        View::Register => forms::draw_register(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

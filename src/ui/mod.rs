//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, action_area) = layout::create_layout(frame.area());

    forms::draw_application_form(frame, form_area, app);
    layout::draw_action_panel(frame, action_area, app);
    layout::draw_status_bar(frame, app);

    // Notices sit on top of everything
    if let Some(notice) = &app.state.notice {
        components::render_notice_dialog(frame, notice);
    }
}

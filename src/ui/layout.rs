//! Layout components (action panel, status bar)

use super::components::{render_action_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{ADD_ENTRY_SHORTCUT, REMOVE_ENTRY_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use cattle_loan::state::FieldLocation;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ACTION_PANEL_WIDTH: u16 = 26;

/// Split the screen into form (left) and action panel (right),
/// reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                    // Form
            Constraint::Length(ACTION_PANEL_WIDTH), // Actions
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the action panel. Buttons reflect what the shortcuts would do now.
pub fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let editable = state.is_editable();
    let on_entry = matches!(state.active_location(), Some(FieldLocation::Cattle { .. }));
    let can_remove = editable && on_entry && state.form.cattle_count() > 1;

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Add Cattle
            Constraint::Length(BUTTON_HEIGHT), // Remove Cattle
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),
        ])
        .split(inner);

    let submit_label = if editable {
        "Submit Application"
    } else {
        "Submitting..."
    };
    render_action_button(
        frame,
        buttons[0],
        submit_label,
        SUBMIT_SHORTCUT,
        true,
        editable,
        Color::Green,
    );
    render_action_button(
        frame,
        buttons[1],
        "Add Cattle",
        ADD_ENTRY_SHORTCUT,
        false,
        editable,
        Color::Blue,
    );
    render_action_button(
        frame,
        buttons[2],
        "Remove Cattle",
        REMOVE_ENTRY_SHORTCUT,
        can_remove,
        can_remove,
        Color::Red,
    );
    render_action_button(
        frame,
        buttons[3],
        "Reset",
        RESET_SHORTCUT,
        false,
        editable,
        Color::Gray,
    );
}

/// Draw the status bar: key hints, submission state, last edit error
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if app.state.is_editable() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::styled(" ◌ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            "Submitting... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        "Tab:next  ←/→/Space:choose  ",
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

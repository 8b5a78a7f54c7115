//! Loan application form rendering

use super::field_renderer::{
    draw_choice_field, draw_field_with_value, draw_section_header, FIELD_HEIGHT,
};
use crate::app::App;
use cattle_loan::state::{
    CattleType, FieldKind, FieldLocation, FieldPath, FieldValue, LoanPurpose, OwnershipType,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const HEADER_HEIGHT: u32 = 1;

/// One laid-out line of the form
#[derive(Debug, PartialEq)]
enum Row {
    Header(String),
    Field(usize, FieldLocation),
}

impl Row {
    /// Row heights are summed in `u32`; the entry count has no upper bound
    fn height(&self) -> u32 {
        match self {
            Row::Header(_) => HEADER_HEIGHT,
            Row::Field(..) => u32::from(FIELD_HEIGHT),
        }
    }
}

fn section_title(location: &FieldLocation) -> &'static str {
    match location {
        FieldLocation::Scalar(FieldPath::Applicant(_)) => "Applicant Details",
        FieldLocation::Scalar(FieldPath::Farm(_)) => "Farm Details",
        FieldLocation::Cattle { .. } => "Cattle Details",
        FieldLocation::Scalar(FieldPath::Loan(_)) => "Loan Details",
        FieldLocation::Scalar(FieldPath::Banking(_)) => "Banking Information",
    }
}

/// Interleave section and cattle-entry headings with the focus order
fn build_rows(order: &[FieldLocation]) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut section = "";
    let mut entry = None;

    for (position, location) in order.iter().enumerate() {
        let title = section_title(location);
        if title != section {
            section = title;
            rows.push(Row::Header(title.to_string()));
        }
        if let FieldLocation::Cattle { index, .. } = location {
            if entry != Some(*index) {
                entry = Some(*index);
                rows.push(Row::Header(format!("  Cattle #{}", index + 1)));
            }
        }
        rows.push(Row::Field(position, *location));
    }
    rows
}

/// Smallest scroll offset that keeps the active field fully visible
fn scroll_offset(rows: &[Row], active: usize, visible_height: u16) -> u32 {
    let mut top = 0u32;
    for row in rows {
        let bottom = top + row.height();
        if matches!(row, Row::Field(position, _) if *position == active) {
            return bottom.saturating_sub(u32::from(visible_height));
        }
        top = bottom;
    }
    0
}

fn is_unset(value: &FieldValue) -> bool {
    matches!(
        value,
        FieldValue::Ownership(OwnershipType::Unset)
            | FieldValue::Purpose(LoanPurpose::Unset)
            | FieldValue::CattleType(CattleType::Unset)
    )
}

/// Draw the scrolling application form
pub fn draw_application_form(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let editable = state.is_editable();
    let border_color = if editable {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Cattle Loan Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let application = state.form.application();
    let rows = build_rows(&state.focus_order());
    let offset = scroll_offset(&rows, state.active_form_field, inner.height);

    let mut top = 0u32;
    for row in &rows {
        let height = row.height();
        let row_top = top;
        top += height;
        if row_top < offset {
            continue;
        }
        let y = row_top - offset;
        if y + height > u32::from(inner.height) {
            break;
        }
        // Both fit inside `inner.height` here
        let row_area = Rect {
            x: inner.x + 1,
            y: inner.y + y as u16,
            width: inner.width.saturating_sub(2),
            height: height as u16,
        };

        match row {
            Row::Header(title) => draw_section_header(frame, row_area, title),
            Row::Field(position, location) => {
                let is_active = *position == state.active_form_field && editable;
                let Some(value) = location.read(application) else {
                    continue;
                };
                match location.kind() {
                    FieldKind::Choice | FieldKind::Flag => draw_choice_field(
                        frame,
                        row_area,
                        location.label(),
                        &value.display_value(),
                        is_unset(&value),
                        is_active,
                    ),
                    FieldKind::Text | FieldKind::Numeric => draw_field_with_value(
                        frame,
                        row_area,
                        location.label(),
                        value.as_text(),
                        is_active,
                    ),
                }
            }
        }
    }
}

//! Application state definitions

use super::forms::{focus_order, CattleField, FieldKind, FieldLocation, FieldValue, FormState};
use crate::error::FormError;
use crate::submission::{SubmissionEvent, SubmissionOrchestrator};

/// A message shown over the form until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl From<&SubmissionEvent> for Notice {
    fn from(event: &SubmissionEvent) -> Self {
        Self {
            title: event.title().to_string(),
            message: event.message(),
            is_error: event.is_error(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FormState,
    pub submission: SubmissionOrchestrator,

    // Focus
    pub active_form_field: usize,

    // UI state
    pub notice: Option<Notice>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edits are blocked while a submission is in flight
    pub fn is_editable(&self) -> bool {
        !self.submission.is_busy()
    }

    pub fn focus_order(&self) -> Vec<FieldLocation> {
        focus_order(self.form.application())
    }

    pub fn form_field_count(&self) -> usize {
        self.focus_order().len()
    }

    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn active_location(&self) -> Option<FieldLocation> {
        self.focus_order().get(self.active_form_field).copied()
    }

    /// Move focus to a location, if it is currently shown
    pub fn focus(&mut self, location: FieldLocation) {
        if let Some(index) = self.focus_order().iter().position(|l| *l == location) {
            self.active_form_field = index;
        }
    }

    fn clamp_focus(&mut self) {
        let count = self.form_field_count();
        if self.active_form_field >= count {
            self.active_form_field = count.saturating_sub(1);
        }
    }

    fn write(&mut self, location: FieldLocation, value: FieldValue) -> Result<(), FormError> {
        match location {
            FieldLocation::Scalar(path) => self.form.set_field(path, value),
            FieldLocation::Cattle { index, field } => {
                self.form.set_cattle_field(index, field, value)
            }
        }
    }

    /// Append a typed character to the focused text field
    pub fn form_input_char(&mut self, c: char) -> Result<(), FormError> {
        let Some(location) = self.active_location() else {
            return Ok(());
        };
        if !self.is_editable() || !location.kind().accepts_char(c) {
            return Ok(());
        }
        let mut text = location
            .read(self.form.application())
            .map(|v| v.as_text().to_string())
            .unwrap_or_default();
        text.push(c);
        self.write(location, FieldValue::Text(text))
    }

    /// Remove the last character of the focused text field
    pub fn form_backspace(&mut self) -> Result<(), FormError> {
        let Some(location) = self.active_location() else {
            return Ok(());
        };
        if !self.is_editable() || matches!(location.kind(), FieldKind::Choice | FieldKind::Flag) {
            return Ok(());
        }
        let mut text = location
            .read(self.form.application())
            .map(|v| v.as_text().to_string())
            .unwrap_or_default();
        text.pop();
        self.write(location, FieldValue::Text(text))
    }

    /// Step the focused picker or toggle
    pub fn cycle_active_choice(&mut self, forward: bool) -> Result<(), FormError> {
        let Some(location) = self.active_location() else {
            return Ok(());
        };
        if !self.is_editable() || !matches!(location.kind(), FieldKind::Choice | FieldKind::Flag) {
            return Ok(());
        }
        let Some(value) = location.read(self.form.application()) else {
            return Ok(());
        };
        self.write(location, value.cycled(forward))?;
        // Toggling insurance off hides the details field
        self.clamp_focus();
        Ok(())
    }

    /// Add a cattle entry and focus its first field
    pub fn add_cattle_entry(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.form.add_cattle_entry();
        let index = self.form.cattle_count() - 1;
        self.focus(FieldLocation::Cattle {
            index,
            field: CattleField::CattleType,
        });
    }

    /// Remove the cattle entry that holds focus, keeping the last one
    pub fn remove_active_cattle_entry(&mut self) -> Result<(), FormError> {
        if !self.is_editable() {
            return Ok(());
        }
        if let Some(FieldLocation::Cattle { index, .. }) = self.active_location() {
            self.form.remove_cattle_entry(index)?;
            self.clamp_focus();
        }
        Ok(())
    }

    pub fn reset_form(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.form.reset();
        self.active_form_field = 0;
    }

    /// Show a submission outcome; validation errors also move focus
    pub fn show_event(&mut self, event: &SubmissionEvent) {
        match event {
            SubmissionEvent::ValidationFailed(err) => self.focus(err.location()),
            SubmissionEvent::Submitted { ok: true } => self.active_form_field = 0,
            SubmissionEvent::Submitted { ok: false } => {}
        }
        self.clamp_focus();
        self.notice = Some(Notice::from(event));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

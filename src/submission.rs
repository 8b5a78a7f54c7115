//! Submission orchestration
//!
//! Sequences validate -> store -> reset-or-report and keeps at most one
//! submission in flight. The phase is the single source of truth for both
//! the re-entrancy guard and the "Submitting..." state the UI shows.

use crate::state::FormState;
use crate::store::{ApplicationStore, DocumentId, NewApplication};
use crate::validation::{validate, ValidationError};

pub const SUCCESS_MESSAGE: &str = "Application submitted successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to submit application. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Result of asking to submit
#[derive(Debug)]
pub enum SubmitAttempt {
    /// The application broke a rule; nothing was sent
    Rejected(ValidationError),
    /// The record is ready for the store; the orchestrator is now submitting
    Started(NewApplication),
    /// A submission is already in flight
    Ignored,
}

/// Outcomes the presentation layer turns into notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    ValidationFailed(ValidationError),
    Submitted { ok: bool },
}

impl SubmissionEvent {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ValidationFailed(_) => "Validation Error",
            Self::Submitted { ok: true } => "Success",
            Self::Submitted { ok: false } => "Error",
        }
    }

    /// User-facing text. Never carries the underlying store error.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationFailed(err) => err.to_string(),
            Self::Submitted { ok: true } => SUCCESS_MESSAGE.to_string(),
            Self::Submitted { ok: false } => FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Submitted { ok: true })
    }
}

#[derive(Debug, Default)]
pub struct SubmissionOrchestrator {
    phase: SubmissionPhase,
}

impl SubmissionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    /// Validate the current form and, if it passes, hand back the record
    /// to store. Does nothing while another submission is in flight.
    pub fn begin(&mut self, form: &FormState) -> SubmitAttempt {
        if self.is_busy() {
            tracing::debug!(phase = ?self.phase, "submission in flight, ignoring submit");
            return SubmitAttempt::Ignored;
        }

        self.phase = SubmissionPhase::Validating;
        let snapshot = form.snapshot();
        match validate(&snapshot) {
            Err(err) => {
                self.phase = SubmissionPhase::Idle;
                tracing::debug!(reason = %err, "application failed validation");
                SubmitAttempt::Rejected(err)
            }
            Ok(()) => {
                self.phase = SubmissionPhase::Submitting;
                tracing::info!(entries = snapshot.cattle().len(), "submitting application");
                SubmitAttempt::Started(NewApplication::pending(snapshot))
            }
        }
    }

    /// Apply the store's answer. Success resets the form; failure keeps it
    /// so the user can retry without re-entering anything.
    pub fn finish(
        &mut self,
        result: anyhow::Result<DocumentId>,
        form: &mut FormState,
    ) -> SubmissionEvent {
        if self.phase != SubmissionPhase::Submitting {
            tracing::warn!(phase = ?self.phase, "submission result with nothing in flight");
        }
        self.phase = SubmissionPhase::Idle;

        match result {
            Ok(id) => {
                tracing::info!(%id, "application submitted");
                form.reset();
                SubmissionEvent::Submitted { ok: true }
            }
            Err(err) => {
                tracing::warn!("Submission error: {err:#}");
                SubmissionEvent::Submitted { ok: false }
            }
        }
    }

    /// Run a whole submission in-line, awaiting the store.
    ///
    /// Returns `None` when the call was ignored because one is in flight.
    pub async fn submit(
        &mut self,
        form: &mut FormState,
        store: &dyn ApplicationStore,
    ) -> Option<SubmissionEvent> {
        match self.begin(form) {
            SubmitAttempt::Ignored => None,
            SubmitAttempt::Rejected(err) => Some(SubmissionEvent::ValidationFailed(err)),
            SubmitAttempt::Started(record) => {
                let result = store.create(&record).await;
                Some(self.finish(result, form))
            }
        }
    }
}

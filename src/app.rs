//! Application state and core logic

use anyhow::Result;
use cattle_loan::error::FormError;
use cattle_loan::state::{AppState, FieldKind};
use cattle_loan::store::{ApplicationStore, DocumentId};
use cattle_loan::submission::{SubmissionEvent, SubmitAttempt};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submitted applications go
    store: Arc<dyn ApplicationStore>,
    /// Store results coming back from spawned submissions
    results_tx: mpsc::UnboundedSender<Result<DocumentId>>,
    results_rx: mpsc::UnboundedReceiver<Result<DocumentId>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(store: Arc<dyn ApplicationStore>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            store,
            results_tx,
            results_rx,
            quit: false,
        }
    }

    /// Check if app should quit. A quit request waits for the in-flight
    /// submission so its write is never cut short.
    pub fn should_quit(&self) -> bool {
        self.quit && !self.state.submission.is_busy()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Quit works everywhere, even over a notice
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            if self.state.submission.is_busy() {
                tracing::info!("Quit requested, waiting for submission to finish");
                self.state.status_message =
                    Some("Waiting for submission to finish...".to_string());
            }
            return Ok(());
        }

        // Notice dialog is modal
        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('n') => self.state.add_cattle_entry(),
                KeyCode::Char('d') => {
                    let result = self.state.remove_active_cattle_entry();
                    self.report(result);
                }
                KeyCode::Char('r') => self.state.reset_form(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Left => {
                let result = self.state.cycle_active_choice(false);
                self.report(result);
            }
            KeyCode::Right => {
                let result = self.state.cycle_active_choice(true);
                self.report(result);
            }
            KeyCode::Char(' ') if self.active_is_picker() => {
                let result = self.state.cycle_active_choice(true);
                self.report(result);
            }
            KeyCode::Char(c) => {
                let result = self.state.form_input_char(c);
                self.report(result);
            }
            KeyCode::Backspace => {
                let result = self.state.form_backspace();
                self.report(result);
            }
            _ => {}
        }
        Ok(())
    }

    fn active_is_picker(&self) -> bool {
        self.state
            .active_location()
            .is_some_and(|l| matches!(l.kind(), FieldKind::Choice | FieldKind::Flag))
    }

    /// Form edits only fail on a stale focus; surface it rather than abort
    fn report(&mut self, result: Result<(), FormError>) {
        if let Err(err) = result {
            tracing::error!("Form edit failed: {err}");
            self.state.status_message = Some(err.to_string());
        }
    }

    /// Validate and, if valid, send the application to the store on a
    /// background task
    pub fn submit(&mut self) {
        match self.state.submission.begin(&self.state.form) {
            SubmitAttempt::Ignored => {}
            SubmitAttempt::Rejected(err) => {
                self.state
                    .show_event(&SubmissionEvent::ValidationFailed(err));
            }
            SubmitAttempt::Started(record) => {
                let store = Arc::clone(&self.store);
                let tx = self.results_tx.clone();
                tokio::spawn(async move {
                    let result = store.create(&record).await;
                    if tx.send(result).is_err() {
                        tracing::debug!("App closed before submission finished");
                    }
                });
            }
        }
    }

    /// Apply any finished submissions. Called once per tick.
    pub fn poll_submissions(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            let event = self
                .state
                .submission
                .finish(result, &mut self.state.form);
            self.state.show_event(&event);
        }
    }

    /// Wait for the in-flight submission, if any, and apply it
    #[cfg(test)]
    async fn settle(&mut self) {
        if self.state.submission.is_busy() {
            if let Some(result) = self.results_rx.recv().await {
                let event = self
                    .state
                    .submission
                    .finish(result, &mut self.state.form);
                self.state.show_event(&event);
            }
        }
    }
}

//! Application state and core logic

use crate::state::{AppState, FocusRow, ValidationConfig};
use crate::submit::SubmitHandler;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives forms that pass validation
    submitter: Box<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: ValidationConfig, submitter: Box<dyn SubmitHandler>) -> Self {
        tracing::debug!(min = config.min, max = config.max, "password bounds");
        Self {
            state: AppState::new(config),
            submitter,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // An open error dialog swallows everything but dismissal
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.state.clear_form();
                self.state.status_message = None;
            }
            // Submit (Ctrl+S or Cmd+S)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit().await;
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_row(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_row(),
            KeyCode::Enter => {
                if self.state.focus == FocusRow::SubmitButton {
                    self.submit().await;
                } else {
                    self.state.next_row();
                }
            }
            // Unhandled Ctrl/Alt/Super chords are not text input
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand it to the submit handler
    async fn submit(&mut self) {
        if let Err(summary) = self.state.form.validate() {
            tracing::debug!(fields = summary.errors().len(), "submit blocked");
            self.push_error(format!(
                "Please fix the following before submitting:\n{}",
                summary.describe()
            ));
            return;
        }

        let form = self.state.form.state();
        match self.submitter.submit(&form).await {
            Ok(()) => {
                let message = if form.email.is_empty() {
                    "Signup submitted".to_string()
                } else {
                    format!("Signed up {}", form.email)
                };
                self.state.clear_form();
                self.state.status_message = Some(message);
            }
            Err(e) => {
                tracing::warn!("submit failed: {e:#}");
                self.push_error(format!("Failed to submit: {}", e));
            }
        }
    }
}

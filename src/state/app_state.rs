//! Application state definitions

use super::forms::{SignupForm, ValidationConfig};
use crate::validation::FieldId;
use std::collections::VecDeque;

/// Focusable row on the signup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRow {
    Field(FieldId),
    SubmitButton,
}

impl Default for FocusRow {
    fn default() -> Self {
        FocusRow::Field(FieldId::Email)
    }
}

impl FocusRow {
    /// Five inputs plus the submit button
    pub const COUNT: usize = FieldId::ALL.len() + 1;

    pub fn index(&self) -> usize {
        match self {
            Self::Field(field) => field.index(),
            Self::SubmitButton => FieldId::ALL.len(),
        }
    }

    pub fn from_index(index: usize) -> Self {
        FieldId::from_index(index % Self::COUNT)
            .map(Self::Field)
            .unwrap_or(Self::SubmitButton)
    }

    /// Next row (wraps around)
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous row (wraps around)
    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::Field(field) => Some(*field),
            Self::SubmitButton => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: SignupForm,
    pub focus: FocusRow,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            form: SignupForm::new(config),
            ..Default::default()
        }
    }

    pub fn next_row(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_row(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            self.form.push_char(field, c);
        }
    }

    /// Delete the last character of the focused field
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.pop_char(field);
        }
    }

    /// Reset the form and move focus back to the first field
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.focus = FocusRow::default();
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// The error currently displayed, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

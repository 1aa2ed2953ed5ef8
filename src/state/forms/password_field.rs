//! Password field state holder

use crate::validation::password_error;
use serde::{Deserialize, Serialize};

/// Password length bounds, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub min: usize,
    pub max: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { min: 6, max: 10 }
    }
}

/// Owns the password value and its derived error message
#[derive(Debug, Clone, Default)]
pub struct PasswordField {
    config: ValidationConfig,
    value: String,
    error: String,
}

impl PasswordField {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            value: String::new(),
            error: String::new(),
        }
    }

    pub fn password(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn config(&self) -> ValidationConfig {
        self.config
    }

    /// Replace the stored password and refresh the error
    pub fn set_password(&mut self, value: String) {
        self.value = value;
        self.recompute();
    }

    /// Re-derive the error from the current value
    pub fn recompute(&mut self) {
        self.error = password_error(&self.value, &self.config);
    }
}

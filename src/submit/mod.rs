//! Form submission

mod handler;
mod traits;

pub use handler::LogSubmitHandler;
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;

use crate::validation::FieldId;
use thiserror::Error;

/// Every validation message active when a submit was attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationSummary {
    errors: Vec<(FieldId, String)>,
}

impl ValidationSummary {
    pub fn new(errors: Vec<(FieldId, String)>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[(FieldId, String)] {
        &self.errors
    }

    /// One `Label: message` line per failing field
    pub fn describe(&self) -> String {
        self.errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field.label(), message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

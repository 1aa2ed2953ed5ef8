//! Default submit handler

use super::traits::SubmitHandler;
use crate::state::FormState;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A submitted form with the time it was accepted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission<'a> {
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub form: &'a FormState,
}

/// Records each submission as a JSON log line. Nothing is persisted.
#[derive(Debug, Default)]
pub struct LogSubmitHandler {
    count: usize,
}

impl LogSubmitHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions accepted so far
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.count
    }
}

#[async_trait]
impl SubmitHandler for LogSubmitHandler {
    async fn submit(&mut self, form: &FormState) -> Result<()> {
        let submission = Submission {
            submitted_at: Utc::now(),
            form,
        };
        let json = serde_json::to_string(&submission)?;
        self.count += 1;
        tracing::info!(count = self.count, "signup submitted: {json}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SignupForm, ValidationConfig};

    #[test]
    fn test_submission_serializes_without_passwords() {
        let mut signup = SignupForm::new(ValidationConfig::default());
        signup.set_email("john@example.com".to_string());
        signup.set_name("John".to_string());
        signup.set_zip_code("12345".to_string());
        signup.set_password("secret1".to_string());
        signup.set_confirm_password("secret1".to_string());
        let form = signup.state();
        let submission = Submission {
            submitted_at: Utc::now(),
            form: &form,
        };

        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"submittedAt\""));
        assert!(json.contains("\"email\":\"john@example.com\""));
        assert!(json.contains("\"zipCode\":\"12345\""));
        assert!(!json.contains("secret1"));
    }

    #[test]
    fn test_log_handler_counts_submissions() {
        let mut handler = LogSubmitHandler::new();
        let form = FormState::default();

        tokio_test::block_on(handler.submit(&form)).unwrap();
        tokio_test::block_on(handler.submit(&form)).unwrap();

        assert_eq!(handler.count(), 2);
    }
}

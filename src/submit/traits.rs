//! Trait abstraction for submission to enable mocking in tests

use crate::state::FormState;
use anyhow::Result;
use async_trait::async_trait;

/// Receives a signup form that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Accept the submitted values
    async fn submit(&mut self, form: &FormState) -> Result<()>;
}

//! Form domain layer
//!
//! This module provides the signup form state and its password holder.

mod form_state;
mod password_field;
mod signup_form;

pub use form_state::FormState;
pub use password_field::ValidationConfig;
pub use signup_form::SignupForm;

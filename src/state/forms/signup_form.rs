//! Signup form with reactive field validation

use super::form_state::{ErrorState, FormState, Profile};
use super::password_field::{PasswordField, ValidationConfig};
use crate::submit::ValidationSummary;
use crate::validation::{self, FieldId, Rule};

/// The signup form: four fields of its own plus a delegated password field.
///
/// Each setter runs a validation pass that re-evaluates only the rules
/// watching the changed field.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    email: String,
    profile: Profile,
    confirm_password: String,
    password: PasswordField,
    errors: ErrorState,
    last_pass: Vec<Rule>,
}

impl SignupForm {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            password: PasswordField::new(config),
            ..Default::default()
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.reconcile(&[FieldId::Email]);
    }

    pub fn set_name(&mut self, name: String) {
        self.profile = self.profile.with_name(name);
        self.reconcile(&[FieldId::Name]);
    }

    pub fn set_zip_code(&mut self, zip_code: String) {
        self.profile = self.profile.with_zip_code(zip_code);
        self.reconcile(&[FieldId::ZipCode]);
    }

    pub fn set_password(&mut self, password: String) {
        self.password.set_password(password);
        self.reconcile(&[FieldId::Password]);
    }

    pub fn set_confirm_password(&mut self, confirm_password: String) {
        self.confirm_password = confirm_password;
        self.reconcile(&[FieldId::ConfirmPassword]);
    }

    pub fn set_field(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Email => self.set_email(value),
            FieldId::Name => self.set_name(value),
            FieldId::ZipCode => self.set_zip_code(value),
            FieldId::Password => self.set_password(value),
            FieldId::ConfirmPassword => self.set_confirm_password(value),
        }
    }

    /// Append a character to a field
    pub fn push_char(&mut self, field: FieldId, c: char) {
        let mut value = self.value(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    /// Remove the last character of a field, if any
    pub fn pop_char(&mut self, field: FieldId) {
        let mut value = self.value(field).to_string();
        if value.pop().is_some() {
            self.set_field(field, value);
        }
    }

    /// Reset every field and error, keeping the password config
    pub fn clear(&mut self) {
        *self = Self::new(self.password.config());
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email,
            FieldId::Name => &self.profile.name,
            FieldId::ZipCode => &self.profile.zip_code,
            FieldId::Password => self.password.password(),
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn error(&self, field: FieldId) -> &str {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn config(&self) -> ValidationConfig {
        self.password.config()
    }

    /// Rules re-evaluated by the most recent validation pass
    pub fn last_pass(&self) -> &[Rule] {
        &self.last_pass
    }

    /// Snapshot of the current values
    pub fn state(&self) -> FormState {
        FormState {
            email: self.email.clone(),
            profile: self.profile.clone(),
            password: self.password.password().to_string(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    /// Check the form as a whole. An empty form is valid.
    pub fn validate(&self) -> Result<(), ValidationSummary> {
        let errors = self.errors.active();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationSummary::new(errors))
        }
    }

    fn reconcile(&mut self, changed: &[FieldId]) {
        self.last_pass.clear();
        for rule in Rule::ALL {
            if !rule.is_triggered_by(changed) {
                continue;
            }
            let message = self.evaluate(rule);
            tracing::trace!(?rule, error = %message, "validation rule evaluated");
            self.errors.set(rule.target(), message);
            self.last_pass.push(rule);
        }
    }

    fn evaluate(&mut self, rule: Rule) -> String {
        match rule {
            Rule::Email => validation::email_error(&self.email),
            Rule::Name => validation::name_error(&self.profile.name),
            Rule::ZipCode => validation::zip_error(&self.profile.zip_code),
            Rule::ConfirmPassword => validation::confirm_password_error(
                self.password.password(),
                &self.confirm_password,
            ),
            Rule::Password => {
                self.password.recompute();
                self.password.error().to_string()
            }
        }
    }
}

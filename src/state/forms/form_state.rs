//! Signup form values and error messages

use crate::validation::FieldId;
use serde::Serialize;

/// Name and zip code, updated as a single record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub zip_code: String,
}

impl Profile {
    /// Copy of this profile with a new name
    pub fn with_name(&self, name: String) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    /// Copy of this profile with a new zip code
    pub fn with_zip_code(&self, zip_code: String) -> Self {
        Self {
            zip_code,
            ..self.clone()
        }
    }
}

/// Every value entered on the signup form.
///
/// Password values are never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub email: String,
    pub profile: Profile,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

/// Current message per field, empty when the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub email_error: String,
    pub name_error: String,
    pub zip_error: String,
    pub password_error: String,
    pub confirm_password_error: String,
}

impl ErrorState {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email_error,
            FieldId::Name => &self.name_error,
            FieldId::ZipCode => &self.zip_error,
            FieldId::Password => &self.password_error,
            FieldId::ConfirmPassword => &self.confirm_password_error,
        }
    }

    pub(crate) fn set(&mut self, field: FieldId, message: String) {
        let slot = match field {
            FieldId::Email => &mut self.email_error,
            FieldId::Name => &mut self.name_error,
            FieldId::ZipCode => &mut self.zip_error,
            FieldId::Password => &mut self.password_error,
            FieldId::ConfirmPassword => &mut self.confirm_password_error,
        };
        *slot = message;
    }

    /// Active messages in display order
    pub fn active(&self) -> Vec<(FieldId, String)> {
        FieldId::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .map(|f| (*f, self.get(*f).to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

//! Field validation rules
//!
//! Every rule is a pure function from field values to a message, where an
//! empty string means the field is currently valid. Rules never treat an
//! empty field as an error: nothing on the signup form is required.

mod fields;

pub use fields::{FieldId, Rule};

use crate::state::ValidationConfig;
use regex::Regex;
use std::sync::OnceLock;

pub const EMAIL_INVALID: &str = "Please enter a valid email.";
pub const NAME_LETTERS_ONLY: &str = "Name can only contain letters.";
pub const ZIP_DIGITS_ONLY: &str = "Zip Code can only contain digits.";
pub const ZIP_FIVE_DIGITS: &str = "Zip Code must be 5 digits.";
pub const PASSWORDS_MUST_MATCH: &str = "The passwords must match.";

/// Required zip code length
pub const ZIP_LENGTH: usize = 5;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid regex pattern"))
}

/// Returns true if `email` looks like `local@domain.tld`
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn email_error(email: &str) -> String {
    if email.is_empty() || validate_email(email) {
        String::new()
    } else {
        EMAIL_INVALID.to_string()
    }
}

pub fn name_error(name: &str) -> String {
    if name.chars().all(|c| c.is_ascii_alphabetic()) {
        String::new()
    } else {
        NAME_LETTERS_ONLY.to_string()
    }
}

/// Zip codes are only checked for letters and length. Symbols in a
/// five-character zip code are accepted.
pub fn zip_error(zip_code: &str) -> String {
    if zip_code.is_empty() {
        return String::new();
    }

    if zip_code.chars().any(|c| c.is_ascii_alphabetic()) {
        ZIP_DIGITS_ONLY.to_string()
    } else if zip_code.chars().count() != ZIP_LENGTH {
        ZIP_FIVE_DIGITS.to_string()
    } else {
        String::new()
    }
}

/// Mismatch is only reported once both passwords have been entered
pub fn confirm_password_error(password: &str, confirm_password: &str) -> String {
    if password.is_empty() || confirm_password.is_empty() || password == confirm_password {
        String::new()
    } else {
        PASSWORDS_MUST_MATCH.to_string()
    }
}

pub fn password_error(password: &str, config: &ValidationConfig) -> String {
    if password.is_empty() {
        return String::new();
    }

    let len = password.chars().count();
    if len < config.min {
        format!("Must be at least {} characters.", config.min)
    } else if len > config.max {
        format!("Must be no more than {} characters.", config.max)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_empty_email_has_no_error() {
            assert_eq!(email_error(""), "");
        }

        #[test]
        fn test_valid_emails() {
            for email in ["john@example.com", "a.b+c@mail.example.co.uk", "x@y.io"] {
                assert!(validate_email(email), "{email} should be valid");
                assert_eq!(email_error(email), "");
            }
        }

        #[test]
        fn test_invalid_emails() {
            for email in ["john", "john@", "@example.com", "john@example", "a@b.c", "a b@c.de"] {
                assert!(!validate_email(email), "{email} should be invalid");
                assert_eq!(email_error(email), EMAIL_INVALID);
            }
        }
    }

    mod name {
        use super::*;

        #[test]
        fn test_letters_only_is_valid() {
            assert_eq!(name_error(""), "");
            assert_eq!(name_error("John"), "");
            assert_eq!(name_error("mcDONALD"), "");
        }

        #[test]
        fn test_non_letters_are_rejected() {
            for name in ["John3", "Mary Ann", "O'Brien", "Zoë", "-"] {
                assert_eq!(name_error(name), NAME_LETTERS_ONLY, "{name}");
            }
        }
    }

    mod zip_code {
        use super::*;

        #[test]
        fn test_empty_zip_has_no_error() {
            assert_eq!(zip_error(""), "");
        }

        #[test]
        fn test_letters_take_priority_over_length() {
            assert_eq!(zip_error("a"), ZIP_DIGITS_ONLY);
            assert_eq!(zip_error("1234a"), ZIP_DIGITS_ONLY);
            assert_eq!(zip_error("12345678Z"), ZIP_DIGITS_ONLY);
        }

        #[test]
        fn test_wrong_length_digits() {
            assert_eq!(zip_error("1"), ZIP_FIVE_DIGITS);
            assert_eq!(zip_error("1234"), ZIP_FIVE_DIGITS);
            assert_eq!(zip_error("123456"), ZIP_FIVE_DIGITS);
        }

        #[test]
        fn test_five_digits_is_valid() {
            assert_eq!(zip_error("12345"), "");
            assert_eq!(zip_error("00000"), "");
        }

        #[test]
        fn test_symbols_without_letters_pass_at_five_chars() {
            assert_eq!(zip_error("12-45"), "");
            assert_eq!(zip_error("#####"), "");
        }
    }

    mod confirm_password {
        use super::*;

        #[test]
        fn test_either_empty_has_no_error() {
            assert_eq!(confirm_password_error("", ""), "");
            assert_eq!(confirm_password_error("secret1", ""), "");
            assert_eq!(confirm_password_error("", "secret1"), "");
        }

        #[test]
        fn test_mismatch() {
            assert_eq!(
                confirm_password_error("secret1", "secret2"),
                PASSWORDS_MUST_MATCH
            );
            assert_eq!(
                confirm_password_error("Secret1", "secret1"),
                PASSWORDS_MUST_MATCH
            );
        }

        #[test]
        fn test_match() {
            assert_eq!(confirm_password_error("secret1", "secret1"), "");
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_empty_password_has_no_error() {
            assert_eq!(password_error("", &ValidationConfig::default()), "");
        }

        #[test]
        fn test_too_short() {
            assert_eq!(
                password_error("abc", &ValidationConfig::default()),
                "Must be at least 6 characters."
            );
        }

        #[test]
        fn test_too_long() {
            assert_eq!(
                password_error("abcdefghijk", &ValidationConfig::default()),
                "Must be no more than 10 characters."
            );
        }

        #[test]
        fn test_bounds_are_inclusive() {
            let config = ValidationConfig::default();
            assert_eq!(password_error("abcdef", &config), "");
            assert_eq!(password_error("abcdefghij", &config), "");
        }

        #[test]
        fn test_custom_config() {
            let config = ValidationConfig { min: 2, max: 3 };
            assert_eq!(password_error("a", &config), "Must be at least 2 characters.");
            assert_eq!(password_error("abc", &config), "");
            assert_eq!(
                password_error("abcd", &config),
                "Must be no more than 3 characters."
            );
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            let config = ValidationConfig::default();
            assert_eq!(password_error("ééééé", &config), "Must be at least 6 characters.");
            assert_eq!(password_error("éééééé", &config), "");
        }
    }
}

//! Field identifiers and the rules that watch them

/// A named input on the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Name,
    ZipCode,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 5] = [
        FieldId::Email,
        FieldId::Name,
        FieldId::ZipCode,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
            Self::ZipCode => "Zip Code",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Position of the field on the form
    pub fn index(&self) -> usize {
        match self {
            Self::Email => 0,
            Self::Name => 1,
            Self::ZipCode => 2,
            Self::Password => 3,
            Self::ConfirmPassword => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the value should be masked when displayed
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// A validation rule and the fields it depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Email,
    Name,
    ZipCode,
    ConfirmPassword,
    Password,
}

impl Rule {
    /// Rules in the order a validation pass evaluates them
    pub const ALL: [Rule; 5] = [
        Rule::Email,
        Rule::ZipCode,
        Rule::Name,
        Rule::ConfirmPassword,
        Rule::Password,
    ];

    /// Fields whose change triggers this rule.
    ///
    /// The password rule has no narrowed dependency list and reruns on
    /// every change to the form.
    pub fn watches(&self) -> &'static [FieldId] {
        match self {
            Self::Email => &[FieldId::Email],
            Self::Name => &[FieldId::Name],
            Self::ZipCode => &[FieldId::ZipCode],
            Self::ConfirmPassword => &[FieldId::Password, FieldId::ConfirmPassword],
            Self::Password => &FieldId::ALL,
        }
    }

    pub fn is_triggered_by(&self, changed: &[FieldId]) -> bool {
        self.watches().iter().any(|f| changed.contains(f))
    }

    /// The field whose error slot this rule writes
    pub fn target(&self) -> FieldId {
        match self {
            Self::Email => FieldId::Email,
            Self::Name => FieldId::Name,
            Self::ZipCode => FieldId::ZipCode,
            Self::ConfirmPassword => FieldId::ConfirmPassword,
            Self::Password => FieldId::Password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_index(field.index()), Some(field));
        }
        assert!(FieldId::from_index(5).is_none());
    }

    #[test]
    fn test_only_passwords_are_secret() {
        assert!(FieldId::Password.is_secret());
        assert!(FieldId::ConfirmPassword.is_secret());
        assert!(!FieldId::Email.is_secret());
        assert!(!FieldId::ZipCode.is_secret());
    }

    #[test]
    fn test_single_field_rules_watch_only_their_field() {
        assert!(Rule::Email.is_triggered_by(&[FieldId::Email]));
        assert!(!Rule::Email.is_triggered_by(&[FieldId::Name]));
        assert!(Rule::Name.is_triggered_by(&[FieldId::Name]));
        assert!(!Rule::Name.is_triggered_by(&[FieldId::ZipCode]));
        assert!(Rule::ZipCode.is_triggered_by(&[FieldId::ZipCode]));
        assert!(!Rule::ZipCode.is_triggered_by(&[FieldId::Password]));
    }

    #[test]
    fn test_confirm_rule_watches_both_passwords() {
        assert!(Rule::ConfirmPassword.is_triggered_by(&[FieldId::Password]));
        assert!(Rule::ConfirmPassword.is_triggered_by(&[FieldId::ConfirmPassword]));
        assert!(!Rule::ConfirmPassword.is_triggered_by(&[FieldId::Email]));
    }

    #[test]
    fn test_password_rule_watches_everything() {
        for field in FieldId::ALL {
            assert!(Rule::Password.is_triggered_by(&[field]));
        }
    }

    #[test]
    fn test_empty_change_set_triggers_nothing() {
        for rule in Rule::ALL {
            assert!(!rule.is_triggered_by(&[]));
        }
    }
}

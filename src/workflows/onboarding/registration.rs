use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{is_blank, FieldValue};

/// Shortest password the registration form accepts, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Account details collected on the first screen.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub accepted_terms: bool,
}

/// One typed edit of a registration field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum RegistrationUpdate {
    FullName(String),
    Email(String),
    Password(String),
    PasswordConfirmation(String),
    AcceptedTerms(bool),
}

/// Individual conditions behind [`RegistrationForm::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationRule {
    FullNameBlank,
    EmailInvalid,
    PasswordTooShort,
    PasswordMismatch,
    TermsNotAccepted,
}

impl RegistrationRule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullNameBlank => "full name is required",
            Self::EmailInvalid => "email must be filled in and contain '@'",
            Self::PasswordTooShort => "password must have at least 6 characters",
            Self::PasswordMismatch => "password confirmation does not match",
            Self::TermsNotAccepted => "terms of use must be accepted",
        }
    }
}

impl RegistrationForm {
    pub fn set_field(&mut self, update: RegistrationUpdate) {
        match update {
            RegistrationUpdate::FullName(value) => self.full_name = value,
            RegistrationUpdate::Email(value) => self.email = value,
            RegistrationUpdate::Password(value) => self.password = value,
            RegistrationUpdate::PasswordConfirmation(value) => self.password_confirmation = value,
            RegistrationUpdate::AcceptedTerms(value) => self.accepted_terms = value,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.failed_rules().is_empty()
    }

    /// Every rule the current field values break, in form order.
    pub fn failed_rules(&self) -> Vec<RegistrationRule> {
        let mut failed = Vec::new();

        if is_blank(&self.full_name) {
            failed.push(RegistrationRule::FullNameBlank);
        }
        if is_blank(&self.email) || !self.email.contains('@') {
            failed.push(RegistrationRule::EmailInvalid);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            failed.push(RegistrationRule::PasswordTooShort);
        }
        if self.password != self.password_confirmation {
            failed.push(RegistrationRule::PasswordMismatch);
        }
        if !self.accepted_terms {
            failed.push(RegistrationRule::TermsNotAccepted);
        }

        failed
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .field("accepted_terms", &self.accepted_terms)
            .finish()
    }
}

impl RegistrationUpdate {
    /// Maps a presentation-layer field name onto a typed update.
    ///
    /// Accepts the snake_case names as well as the legacy Portuguese ones. Returns `None`
    /// for unknown names or a value of the wrong kind so the caller can drop the edit.
    pub fn from_raw(name: &str, value: FieldValue) -> Option<Self> {
        match name.trim() {
            "full_name" | "nome" => value.into_text().map(Self::FullName),
            "email" => value.into_text().map(Self::Email),
            "password" | "senha" => value.into_text().map(Self::Password),
            "password_confirmation" | "confirmar_senha" => {
                value.into_text().map(Self::PasswordConfirmation)
            }
            "accepted_terms" | "aceita_termos" => value.as_flag().map(Self::AcceptedTerms),
            _ => None,
        }
    }

    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::FullName(_) => "full_name",
            Self::Email(_) => "email",
            Self::Password(_) => "password",
            Self::PasswordConfirmation(_) => "password_confirmation",
            Self::AcceptedTerms(_) => "accepted_terms",
        }
    }
}

impl fmt::Debug for RegistrationUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullName(value) => f.debug_tuple("FullName").field(value).finish(),
            Self::Email(value) => f.debug_tuple("Email").field(value).finish(),
            Self::Password(_) => f.debug_tuple("Password").field(&"<redacted>").finish(),
            Self::PasswordConfirmation(_) => f
                .debug_tuple("PasswordConfirmation")
                .field(&"<redacted>")
                .finish(),
            Self::AcceptedTerms(value) => f.debug_tuple("AcceptedTerms").field(value).finish(),
        }
    }
}

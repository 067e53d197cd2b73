use serde::{Deserialize, Serialize};

/// Message shown when the registration form fails its validity rule.
pub const REGISTRATION_REJECTED: &str = "Preencha todos os campos corretamente";

/// Message shown when required academic information is missing.
pub const ACADEMIC_REJECTED: &str = "Complete todas as informações necessárias";

/// Screens of the onboarding flow, in the only order they can be entered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingScreen {
    Registration,
    Academic,
    Roadmap,
}

impl OnboardingScreen {
    pub const fn ordered() -> [Self; 3] {
        [Self::Registration, Self::Academic, Self::Roadmap]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Academic => "Academic Profile",
            Self::Roadmap => "Roadmap",
        }
    }

    /// The screen a successful submit leads to, `None` once the flow is over.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Registration => Some(Self::Academic),
            Self::Academic => Some(Self::Roadmap),
            Self::Roadmap => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::Registration
    }
}

/// Recoverable rejection of a submit; surfaced to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub screen: OnboardingScreen,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn registration() -> Self {
        Self {
            screen: OnboardingScreen::Registration,
            message: REGISTRATION_REJECTED,
        }
    }

    pub const fn academic() -> Self {
        Self {
            screen: OnboardingScreen::Academic,
            message: ACADEMIC_REJECTED,
        }
    }
}

/// Raw value forwarded by the presentation layer for a field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

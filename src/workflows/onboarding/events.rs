use serde::{Deserialize, Serialize};
use tracing::debug;

use super::academic::AcademicUpdate;
use super::controller::FormMessage;
use super::domain::FieldValue;
use super::registration::RegistrationUpdate;

/// Wire form of a presentation-layer action, with field names still untyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OnboardingEvent {
    RegistrationFieldChanged { field: String, value: FieldValue },
    AcademicFieldChanged { field: String, value: FieldValue },
    SubmitRegistration,
    SubmitAcademic,
}

impl OnboardingEvent {
    pub fn registration(field: &str, value: impl Into<FieldValue>) -> Self {
        Self::RegistrationFieldChanged {
            field: field.to_owned(),
            value: value.into(),
        }
    }

    pub fn academic(field: &str, value: impl Into<FieldValue>) -> Self {
        Self::AcademicFieldChanged {
            field: field.to_owned(),
            value: value.into(),
        }
    }

    /// Resolves the field name; `None` means the edit is dropped.
    pub fn into_message(self) -> Option<FormMessage> {
        match self {
            OnboardingEvent::RegistrationFieldChanged { field, value } => {
                let update = RegistrationUpdate::from_raw(&field, value);
                if update.is_none() {
                    debug!(%field, "dropping unrecognized registration edit");
                }
                update.map(FormMessage::UpdateRegistration)
            }
            OnboardingEvent::AcademicFieldChanged { field, value } => {
                let update = AcademicUpdate::from_raw(&field, value);
                if update.is_none() {
                    debug!(%field, "dropping unrecognized academic edit");
                }
                update.map(FormMessage::UpdateAcademic)
            }
            OnboardingEvent::SubmitRegistration => Some(FormMessage::SubmitRegistration),
            OnboardingEvent::SubmitAcademic => Some(FormMessage::SubmitAcademic),
        }
    }
}

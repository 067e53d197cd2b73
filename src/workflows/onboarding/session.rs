use serde::Serialize;

use super::academic::AcademicProfile;
use super::domain::OnboardingScreen;
use super::navigation::NavigationCoordinator;
use super::registration::RegistrationForm;

/// Everything one user has entered during onboarding, owned in a single place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingSession {
    pub registration: RegistrationForm,
    pub academic: AcademicProfile,
    pub navigation: NavigationCoordinator,
}

/// Input handed to the roadmap screen once both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapRequest {
    pub full_name: String,
    pub email: String,
    pub education_level: String,
    pub interest_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<String>,
    pub available_time: String,
}

/// Password-free projection of the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationView {
    pub full_name: String,
    pub email: String,
    pub password_provided: bool,
    pub accepted_terms: bool,
}

impl OnboardingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> OnboardingScreen {
        self.navigation.current()
    }

    pub fn is_finished(&self) -> bool {
        self.screen().is_terminal()
    }

    pub fn registration_view(&self) -> RegistrationView {
        RegistrationView {
            full_name: self.registration.full_name.clone(),
            email: self.registration.email.clone(),
            password_provided: !self.registration.password.is_empty(),
            accepted_terms: self.registration.accepted_terms,
        }
    }

    /// Available only after the flow reached the roadmap screen.
    pub fn roadmap_request(&self) -> Option<RoadmapRequest> {
        if !self.is_finished() {
            return None;
        }

        let goals = self.academic.learning_goals.trim();
        Some(RoadmapRequest {
            full_name: self.registration.full_name.trim().to_owned(),
            email: self.registration.email.trim().to_owned(),
            education_level: self.academic.education_level.clone(),
            interest_area: self.academic.interest_area.clone(),
            learning_goals: (!goals.is_empty()).then(|| goals.to_owned()),
            available_time: self.academic.available_time.clone(),
        })
    }
}

//! Registration, academic questionnaire, and roadmap onboarding flow.
//!
//! The entities and the navigation state machine are plain synchronous code; the service,
//! repository, and router modules expose them to a remote renderer over HTTP.

pub mod academic;
pub mod catalog;
pub mod controller;
pub mod domain;
pub mod events;
pub mod navigation;
pub mod registration;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use academic::{AcademicField, AcademicProfile, AcademicUpdate};
pub use catalog::OptionCatalog;
pub use controller::{FormController, FormMessage, Presenter};
pub use domain::{FieldValue, OnboardingScreen, ValidationError};
pub use events::OnboardingEvent;
pub use navigation::{NavigationCoordinator, Transition};
pub use registration::{RegistrationForm, RegistrationRule, RegistrationUpdate};
pub use repository::{RepositoryError, SessionId, SessionRepository};
pub use router::onboarding_router;
pub use service::{OnboardingService, OnboardingServiceError, SessionView};
pub use session::{OnboardingSession, RegistrationView, RoadmapRequest};

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::academic::AcademicProfile;
use super::controller::FormController;
use super::domain::{OnboardingScreen, ValidationError};
use super::events::OnboardingEvent;
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::session::{OnboardingSession, RegistrationView, RoadmapRequest};

/// Loads a session, runs one event through a [`FormController`], and stores the result.
pub struct OnboardingService<R> {
    repository: Arc<R>,
}

fn next_session_id() -> SessionId {
    SessionId(format!("onb-{}", Uuid::new_v4().simple()))
}

/// What the presentation layer needs to render the current screen.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub screen: OnboardingScreen,
    pub screen_label: &'static str,
    pub registration: RegistrationView,
    pub academic: AcademicProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<RoadmapRequest>,
}

impl SessionView {
    pub fn from_session(session_id: SessionId, session: &OnboardingSession) -> Self {
        let screen = session.screen();
        Self {
            session_id,
            screen,
            screen_label: screen.label(),
            registration: session.registration_view(),
            academic: session.academic.clone(),
            roadmap: session.roadmap_request(),
        }
    }
}

impl<R> OnboardingService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Open a fresh session on the registration screen.
    pub fn start(&self) -> Result<SessionView, OnboardingServiceError> {
        let session_id = next_session_id();
        let session = OnboardingSession::new();
        let view = SessionView::from_session(session_id.clone(), &session);
        self.repository.insert(session_id, session)?;
        Ok(view)
    }

    pub fn get(&self, session_id: &SessionId) -> Result<SessionView, OnboardingServiceError> {
        let session = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(SessionView::from_session(session_id.clone(), &session))
    }

    /// Apply one presentation event; rejected submits leave the stored session untouched.
    pub fn apply(
        &self,
        session_id: &SessionId,
        event: OnboardingEvent,
    ) -> Result<SessionView, OnboardingServiceError> {
        let message = event.into_message();

        let (outcome, view) = self.repository.modify(
            session_id,
            |session| -> (Result<(), ValidationError>, SessionView) {
                let Some(message) = message else {
                    debug!(%session_id, "event carried no applicable edit");
                    return (Ok(()), SessionView::from_session(session_id.clone(), session));
                };

                let mut controller = FormController::resume(std::mem::take(session));
                let outcome = controller.handle(message).map(|_| ());
                *session = controller.into_session();
                (outcome, SessionView::from_session(session_id.clone(), session))
            },
        )?;

        outcome?;
        Ok(view)
    }

    /// Drop a session the renderer no longer needs, returning its last state.
    pub fn discard(&self, session_id: &SessionId) -> Result<SessionView, OnboardingServiceError> {
        let session = self.repository.remove(session_id)?;
        info!(%session_id, screen = session.screen().label(), "onboarding session discarded");
        Ok(SessionView::from_session(session_id.clone(), &session))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

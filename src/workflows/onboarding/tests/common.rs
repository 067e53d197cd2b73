use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::onboarding::domain::{OnboardingScreen, ValidationError};
use crate::workflows::onboarding::repository::{RepositoryError, SessionId, SessionRepository};
use crate::workflows::onboarding::{
    onboarding_router, AcademicUpdate, FormController, FormMessage, OnboardingEvent,
    OnboardingService, OnboardingSession, Presenter, RegistrationUpdate,
};

pub(super) fn registration_updates() -> Vec<RegistrationUpdate> {
    vec![
        RegistrationUpdate::FullName("Ana".to_string()),
        RegistrationUpdate::Email("ana@x.com".to_string()),
        RegistrationUpdate::Password("abcdef".to_string()),
        RegistrationUpdate::PasswordConfirmation("abcdef".to_string()),
        RegistrationUpdate::AcceptedTerms(true),
    ]
}

pub(super) fn academic_updates() -> Vec<AcademicUpdate> {
    vec![
        AcademicUpdate::EducationLevel("Graduação Completa".to_string()),
        AcademicUpdate::InterestArea("Inteligência Artificial".to_string()),
        AcademicUpdate::AvailableTime("Entre 5 e 10 horas por semana".to_string()),
    ]
}

pub(super) fn registered_controller() -> FormController {
    let mut controller = FormController::new();
    for update in registration_updates() {
        controller.update_registration_field(update);
    }
    controller
}

pub(super) fn registration_events() -> Vec<OnboardingEvent> {
    vec![
        OnboardingEvent::registration("full_name", "Ana"),
        OnboardingEvent::registration("email", "ana@x.com"),
        OnboardingEvent::registration("password", "abcdef"),
        OnboardingEvent::registration("password_confirmation", "abcdef"),
        OnboardingEvent::registration("accepted_terms", true),
    ]
}

pub(super) fn academic_events() -> Vec<OnboardingEvent> {
    vec![
        OnboardingEvent::academic("education_level", "Ensino Médio"),
        OnboardingEvent::academic("interest_area", "Desenvolvimento Web"),
        OnboardingEvent::academic("available_time", "Mais de 20 horas por semana"),
    ]
}

#[derive(Debug, Default)]
pub(super) struct RecordingPresenter {
    pub(super) screens: Vec<OnboardingScreen>,
    pub(super) errors: Vec<ValidationError>,
}

impl Presenter for RecordingPresenter {
    fn show_screen(&mut self, screen: OnboardingScreen) {
        self.screens.push(screen);
    }

    fn show_validation_error(&mut self, error: &ValidationError) {
        self.errors.push(error.clone());
    }
}

pub(super) fn dispatch_all(
    controller: &mut FormController,
    presenter: &mut RecordingPresenter,
    messages: impl IntoIterator<Item = FormMessage>,
) {
    for message in messages {
        let _ = controller.dispatch(message, presenter);
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    sessions: Arc<Mutex<HashMap<SessionId, OnboardingSession>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &SessionId) -> Option<OnboardingSession> {
        self.sessions.lock().unwrap().get(id).cloned()
    }
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, id: SessionId, session: OnboardingSession) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().unwrap();
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<OnboardingSession>, RepositoryError> {
        Ok(self.sessions.lock().unwrap().get(id).cloned())
    }

    fn modify<F, T>(&self, id: &SessionId, change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut OnboardingSession) -> T,
    {
        let mut guard = self.sessions.lock().unwrap();
        let session = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(change(session))
    }

    fn remove(&self, id: &SessionId) -> Result<OnboardingSession, RepositoryError> {
        self.sessions
            .lock()
            .unwrap()
            .remove(id)
            .ok_or(RepositoryError::NotFound)
    }
}

/// Holds every `modify` call at a barrier so concurrent events reach the store together.
#[derive(Clone)]
pub(super) struct GatedRepository {
    pub(super) inner: MemoryRepository,
    gate: Arc<Barrier>,
}

impl GatedRepository {
    pub(super) fn new(parties: usize) -> Self {
        Self {
            inner: MemoryRepository::default(),
            gate: Arc::new(Barrier::new(parties)),
        }
    }
}

impl SessionRepository for GatedRepository {
    fn insert(&self, id: SessionId, session: OnboardingSession) -> Result<(), RepositoryError> {
        self.inner.insert(id, session)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<OnboardingSession>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn modify<F, T>(&self, id: &SessionId, change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut OnboardingSession) -> T,
    {
        self.gate.wait();
        self.inner.modify(id, change)
    }

    fn remove(&self, id: &SessionId) -> Result<OnboardingSession, RepositoryError> {
        self.inner.remove(id)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _id: SessionId, _session: OnboardingSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<OnboardingSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn modify<F, T>(&self, _id: &SessionId, _change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut OnboardingSession) -> T,
    {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<OnboardingSession, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (OnboardingService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = OnboardingService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: OnboardingService<MemoryRepository>) -> axum::Router {
    onboarding_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

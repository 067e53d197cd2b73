use std::fmt;

use serde::{Deserialize, Serialize};

use super::session::OnboardingSession;

/// Identifier handed to the presentation layer for one onboarding session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage abstraction so the service can be exercised without a server.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, id: SessionId, session: OnboardingSession) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<OnboardingSession>, RepositoryError>;
    /// Runs `change` against the stored session with no other access to it in between.
    fn modify<F, T>(&self, id: &SessionId, change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut OnboardingSession) -> T;
    fn remove(&self, id: &SessionId) -> Result<OnboardingSession, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

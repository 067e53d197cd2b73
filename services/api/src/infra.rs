use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use stuttz_onboarding::workflows::onboarding::{
    OnboardingSession, RepositoryError, SessionId, SessionRepository,
};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store; sessions vanish when the service stops.
///
/// Once `capacity` sessions are held, starting another evicts the least recently
/// touched finished session, or the least recently touched one when none has finished.
#[derive(Clone)]
pub(crate) struct InMemorySessionStore {
    table: Arc<Mutex<SessionTable>>,
    capacity: usize,
}

#[derive(Default)]
struct SessionTable {
    entries: HashMap<SessionId, StoredSession>,
    clock: u64,
}

struct StoredSession {
    session: OnboardingSession,
    touched: u64,
}

impl SessionTable {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn eviction_candidate(&self) -> Option<SessionId> {
        let oldest = |finished_only: bool| {
            self.entries
                .iter()
                .filter(|(_, stored)| !finished_only || stored.session.is_finished())
                .min_by_key(|(_, stored)| stored.touched)
                .map(|(id, _)| id.clone())
        };
        oldest(true).or_else(|| oldest(false))
    }
}

impl InMemorySessionStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Arc::new(Mutex::new(SessionTable::default())),
            capacity,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionTable>, RepositoryError> {
        self.table
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store mutex poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionStore {
    fn insert(&self, id: SessionId, session: OnboardingSession) -> Result<(), RepositoryError> {
        if self.capacity == 0 {
            return Err(RepositoryError::Unavailable(
                "session store has no capacity".to_string(),
            ));
        }

        let mut table = self.lock()?;
        if table.entries.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        while table.entries.len() >= self.capacity {
            let Some(evicted) = table.eviction_candidate() else {
                break;
            };
            if let Some(stored) = table.entries.remove(&evicted) {
                info!(
                    session_id = %evicted,
                    screen = stored.session.screen().label(),
                    "onboarding session evicted"
                );
            }
        }

        let touched = table.tick();
        table.entries.insert(id, StoredSession { session, touched });
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<OnboardingSession>, RepositoryError> {
        let table = self.lock()?;
        Ok(table.entries.get(id).map(|stored| stored.session.clone()))
    }

    fn modify<F, T>(&self, id: &SessionId, change: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut OnboardingSession) -> T,
    {
        let mut table = self.lock()?;
        let touched = table.tick();
        let stored = table.entries.get_mut(id).ok_or(RepositoryError::NotFound)?;
        stored.touched = touched;
        Ok(change(&mut stored.session))
    }

    fn remove(&self, id: &SessionId) -> Result<OnboardingSession, RepositoryError> {
        let mut table = self.lock()?;
        table
            .entries
            .remove(id)
            .map(|stored| stored.session)
            .ok_or(RepositoryError::NotFound)
    }
}

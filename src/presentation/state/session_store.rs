use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};

use crate::domain::{PatientProfile, ReportImage, SessionId, Transcript};

#[derive(Debug, Clone)]
pub struct SignedInUser {
    pub profile: PatientProfile,
}

/// Everything one browser session carries between requests.
#[derive(Debug, Default)]
pub struct SessionState {
    pub user: Option<SignedInUser>,
    pub transcript: Option<Transcript>,
    pub report_image: Option<ReportImage>,
}

impl SessionState {
    pub fn for_user(user: SignedInUser) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// Drops the current consultation, keeping the sign-in.
    pub fn reset_consultation(&mut self) {
        self.transcript = None;
        self.report_image = None;
    }
}

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

struct SessionEntry {
    state: Arc<Mutex<SessionState>>,
    last_used: Instant,
}

/// Sessions keyed by id; each entry's mutex serializes that session's turns.
///
/// Entries untouched for longer than the idle timeout are treated as gone
/// and swept whenever a new session is created.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub async fn create(&self, state: SessionState) -> SessionId {
        let id = SessionId::new();
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_used) < self.idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, "Idle sessions evicted");
        }

        sessions.insert(
            id,
            SessionEntry {
                state: Arc::new(Mutex::new(state)),
                last_used: now,
            },
        );
        id
    }

    /// Looks a session up and marks it as used.
    pub async fn get(&self, id: SessionId) -> Option<Arc<Mutex<SessionState>>> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        if entry.last_used.elapsed() >= self.idle_timeout {
            sessions.remove(&id);
            tracing::debug!(session_id = %id, "Idle session expired");
            return None;
        }
        entry.last_used = Instant::now();
        Some(Arc::clone(&entry.state))
    }

    pub async fn remove(&self, id: SessionId) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Counts sessions that have not yet gone idle.
    pub async fn len(&self) -> usize {
        self.sessions
            .read()
            .await
            .values()
            .filter(|entry| entry.last_used.elapsed() < self.idle_timeout)
            .count()
    }
}

use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{errors::AppResult, models::domain::ResearchSession};

/// Sessions untouched for this long are discarded.
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(60 * 60);

/// A session guarded by its own lock so actions on it run one at a time.
pub type SharedSession = Arc<Mutex<ResearchSession>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: ResearchSession) -> AppResult<SharedSession>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SharedSession>>;
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;
    async fn count(&self) -> AppResult<usize>;
}

struct SessionEntry {
    session: SharedSession,
    last_access: DateTime<Utc>,
}

/// Process-local session storage. Nothing outlives the process, and a
/// session idle for longer than `idle_timeout` is dropped on the next
/// create, lookup or count.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_SESSION_IDLE)
    }
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    fn is_idle(&self, last_access: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        (now - last_access)
            .to_std()
            .map(|elapsed| elapsed > self.idle_timeout)
            .unwrap_or(false)
    }

    /// Drops every session idle at `now` and returns how many went.
    pub async fn expire_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions, now)
    }

    fn sweep(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: DateTime<Utc>) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_idle(entry.last_access, now));
        let expired = before - sessions.len();
        if expired > 0 {
            log::info!("Expired {} idle research sessions", expired);
        }
        expired
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: ResearchSession) -> AppResult<SharedSession> {
        let now = Utc::now();
        let id = session.id;
        let last_access = session.created_at;
        let shared = Arc::new(Mutex::new(session));

        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions, now);
        sessions.insert(
            id,
            SessionEntry {
                session: Arc::clone(&shared),
                last_access,
            },
        );
        log::info!("Created research session {}", id);
        Ok(shared)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SharedSession>> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions, now);

        Ok(sessions.get_mut(id).map(|entry| {
            entry.last_access = now;
            Arc::clone(&entry.session)
        }))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            log::info!("Discarded research session {}", id);
        }
        Ok(removed)
    }

    async fn count(&self) -> AppResult<usize> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions, Utc::now());
        Ok(sessions.len())
    }
}

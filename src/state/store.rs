//! In-memory session store keyed by the session cookie.
//!
//! Reads never insert: an unknown id reads as a fresh [`SessionState`].
//! Only a mutation stores a session, and the store holds at most
//! `capacity` of them, evicting the one written least recently.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::session::SessionState;

/// Identifier carried in the session cookie.
pub type SessionId = Uuid;

/// Sessions kept before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug)]
struct Entry {
    state: SessionState,
    touched: Instant,
}

/// Shared map of live sessions. Nothing is written to disk.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Entry>>>,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding at most `capacity` sessions (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Snapshot of a session; unknown ids read as a fresh session.
    pub async fn get(&self, id: SessionId) -> SessionState {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    /// Mutate a session in place, storing it if unknown.
    pub async fn update<F, R>(&self, id: SessionId, f: F) -> R
    where
        F: FnOnce(&mut SessionState) -> R,
    {
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(&id) && sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(key, _)| *key);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                tracing::debug!(session = %oldest, "Evicted session");
            }
        }

        let entry = sessions.entry(id).or_insert_with(|| {
            tracing::debug!(session = %id, "Created session");
            Entry {
                state: SessionState::new(),
                touched: Instant::now(),
            }
        });
        entry.touched = Instant::now();
        f(&mut entry.state)
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

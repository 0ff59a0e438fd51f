//! In-memory session registry.
//!
//! The map lock is only held to look a session up; every action on a session
//! then holds that session's own mutex from start to finish.
//!
//! Sessions idle for longer than the TTL are evicted lazily: on lookup, and
//! across the whole map whenever a new session is created.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::models::artifacts::GeneratedArtifacts;
use crate::models::resume::ResumeRecord;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(3600);

/// Everything one user has entered and produced.
#[derive(Debug, Default)]
pub struct Session {
    pub record: ResumeRecord,
    pub artifacts: GeneratedArtifacts,
}

pub type SessionHandle = Arc<Mutex<Session>>;

struct Entry {
    handle: SessionHandle,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl,
        }
    }

    /// Starts a session with an empty record, dropping any idle ones first.
    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = SessionHandle::default();
        let now = Instant::now();

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, "Idle sessions evicted");
        }

        sessions.insert(
            id,
            Entry {
                handle: handle.clone(),
                last_seen: now,
            },
        );
        info!(session_id = %id, active = sessions.len(), "Session created");
        (id, handle)
    }

    /// Looks a session up and marks it as active. Expired sessions are removed.
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        if now.duration_since(sessions.get(&id)?.last_seen) > self.ttl {
            sessions.remove(&id);
            info!(session_id = %id, "Session expired");
            return None;
        }
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = now;
        Some(entry.handle.clone())
    }

    /// Ends a session. Returns false when it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "Session ended");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::default();
        let (id, handle) = store.create().await;
        assert!(handle.lock().await.record.full_name.is_empty());

        let fetched = store.get(id).await.unwrap();
        assert!(Arc::ptr_eq(&handle, &fetched));

        assert!(store.remove(id).await);
        assert!(store.get(id).await.is_none());
        assert!(!store.remove(id).await);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let (a, _) = store.create().await;
        let (b, _) = store.create().await;
        assert_ne!(a, b);

        store.get(a).await.unwrap().lock().await.record.full_name = "Ada".to_string();
        assert!(store.get(b).await.unwrap().lock().await.record.full_name.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, _) = store.create().await;

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(store.get(id).await.is_none());
        assert!(!store.remove(id).await, "expired session should be gone from the map");
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, _) = store.create().await;

        for _ in 0..3 {
            tokio::time::advance(Duration::from_secs(45)).await;
            assert!(store.get(id).await.is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_evicts_idle_sessions() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (stale, _) = store.create().await;
        tokio::time::advance(Duration::from_secs(90)).await;

        let (fresh, _) = store.create().await;
        assert_eq!(store.sessions.read().await.len(), 1);
        assert!(!store.sessions.read().await.contains_key(&stale));
        assert!(store.get(fresh).await.is_some());
    }
}

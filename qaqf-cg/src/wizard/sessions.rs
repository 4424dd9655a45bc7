//! In-memory wizard sessions with idle eviction
//!
//! Every access through the store refreshes the session's last-active time.
//! Sessions idle for longer than the configured timeout are dropped by
//! [`SessionStore::evict_idle`], which [`SessionStore::spawn_sweeper`] runs
//! periodically. At capacity, creating a session drops the least recently
//! active one.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use super::WizardController;

/// Default idle time before a session is evicted
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(3600);

/// Default maximum number of live sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

struct WizardSession {
    controller: WizardController,
    last_active: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Store a new session, dropping the least recently active one when full
    pub async fn insert(&self, controller: WizardController) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_active)
                .map(|(id, _)| *id);
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                    info!(wizard_id = %oldest, "Session limit reached, evicted oldest wizard");
                }
                None => break,
            }
        }

        sessions.insert(
            id,
            WizardSession {
                controller,
                last_active: Instant::now(),
            },
        );
        id
    }

    /// Run `f` against a session and mark it active; `None` if unknown
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardController) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_active = Instant::now();
        Some(f(&mut session.controller))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop sessions idle for at least `max_idle`; returns how many went
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_active.elapsed() < max_idle);
        before - sessions.len()
    }

    /// Evict idle sessions every `every` until the runtime shuts down
    pub fn spawn_sweeper(&self, max_idle: Duration, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut tick = interval(every);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tick.tick().await;
                let evicted = store.evict_idle(max_idle).await;
                if evicted > 0 {
                    info!(evicted, "Evicted idle wizard sessions");
                } else {
                    debug!("No idle wizard sessions to evict");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_access() {
        let store = SessionStore::default();
        let id = store.insert(WizardController::new()).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.with_session(id, |w| w.current_step()).await, Some(1));
        assert_eq!(store.with_session(Uuid::new_v4(), |w| w.current_step()).await, None);

        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted() {
        let store = SessionStore::default();
        let idle = store.insert(WizardController::new()).await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        let active = store.insert(WizardController::new()).await;
        store.with_session(active, |w| w.go_to_step(2)).await;

        assert_eq!(store.evict_idle(DEFAULT_IDLE_TIMEOUT).await, 0);
        assert_eq!(store.evict_idle(Duration::from_millis(100)).await, 1);
        assert_eq!(store.with_session(idle, |_| ()).await, None);
        assert_eq!(store.with_session(active, |w| w.current_step()).await, Some(2));

        assert_eq!(store.evict_idle(Duration::ZERO).await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_sweeper_evicts_in_background() {
        let store = SessionStore::default();
        store.insert(WizardController::new()).await;
        let sweeper = store.spawn_sweeper(Duration::from_millis(10), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(store.is_empty().await);
        sweeper.abort();
    }

    #[tokio::test]
    async fn test_capacity_drops_least_recently_active() {
        let store = SessionStore::new(2);
        let first = store.insert(WizardController::new()).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = store.insert(WizardController::new()).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        store.with_session(first, |_| ()).await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        let third = store.insert(WizardController::new()).await;

        assert_eq!(store.len().await, 2);
        assert!(store.with_session(first, |_| ()).await.is_some());
        assert!(store.with_session(second, |_| ()).await.is_none());
        assert!(store.with_session(third, |_| ()).await.is_some());
    }
}

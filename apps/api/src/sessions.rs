//! In-memory session store standing in for the browser session.
//!
//! Each session owns its `SessionState` behind its own async mutex. Handlers hold that lock
//! for a whole interaction, so at most one generation call per session is ever in flight.
//! Sessions are never shared: the store only hands out the handle for the requested id.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::engine::governor;
use crate::models::session::SessionState;

pub type SessionHandle = Arc<Mutex<SessionState>>;

struct Slot {
    created_at: DateTime<Utc>,
    state: SessionHandle,
}

#[derive(Clone)]
pub struct SessionStore {
    slots: Arc<RwLock<HashMap<Uuid, Slot>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates an opened session and prunes expired ones.
    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let state = Arc::new(Mutex::new(governor::open(SessionState::default())));

        let mut slots = self.slots.write().await;
        let before = slots.len();
        slots.retain(|_, slot| now - slot.created_at < self.ttl);
        if slots.len() < before {
            debug!("Pruned {} expired sessions", before - slots.len());
        }
        slots.insert(
            id,
            Slot {
                created_at: now,
                state: state.clone(),
            },
        );
        (id, state)
    }

    /// Returns the session's handle, or `None` when unknown or expired.
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let slots = self.slots.read().await;
        slots
            .get(&id)
            .filter(|slot| Utc::now() - slot.created_at < self.ttl)
            .map(|slot| slot.state.clone())
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.slots.write().await.remove(&id).is_some()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }
}

//! In-memory [`SessionStore`]. Idle chats hold no entry, so the map only grows with chats that
//! pressed the button and have not answered yet.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{SessionState, SessionStore};

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<i64, SessionState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn mark_awaiting_code(&self, chat_id: i64) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(chat_id, SessionState::AwaitingAccessCode { since: Utc::now() });
        debug!(chat_id = chat_id, "Session marked awaiting access code");
    }

    async fn take_awaiting_code(&self, chat_id: i64) -> bool {
        let taken = self
            .sessions
            .write()
            .await
            .remove(&chat_id)
            .is_some_and(|state| state.is_awaiting_code());
        debug!(chat_id = chat_id, taken = taken, "Session take awaiting code");
        taken
    }

    async fn is_awaiting_code(&self, chat_id: i64) -> bool {
        self.state(chat_id).await.is_awaiting_code()
    }

    async fn state(&self, chat_id: i64) -> SessionState {
        self.sessions
            .read()
            .await
            .get(&chat_id)
            .copied()
            .unwrap_or_default()
    }

    async fn clear(&self, chat_id: i64) {
        self.sessions.write().await.remove(&chat_id);
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

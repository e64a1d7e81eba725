use async_trait::async_trait;

use crate::SessionState;

/// Per-chat session state, injected into handlers as `Arc<dyn SessionStore>`.
///
/// `take_awaiting_code` is the only way the access-code flag is consumed: it reads and clears in
/// one step, so of two concurrent callers for the same chat exactly one sees `true`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Marks the chat as waiting for an access code. Re-marking refreshes `since`.
    async fn mark_awaiting_code(&self, chat_id: i64);

    /// Clears the flag and returns whether it was set.
    async fn take_awaiting_code(&self, chat_id: i64) -> bool;

    /// Reads the flag without clearing it.
    async fn is_awaiting_code(&self, chat_id: i64) -> bool;

    /// Current state of the chat.
    async fn state(&self, chat_id: i64) -> SessionState;

    /// Resets the chat to idle.
    async fn clear(&self, chat_id: i64);

    /// Number of chats currently awaiting a code.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

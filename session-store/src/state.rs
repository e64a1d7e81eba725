use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Two-state per-chat flag. A chat with no entry is [`SessionState::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    /// Set by the "Enter Access Code" button; cleared by the next text message.
    AwaitingAccessCode { since: DateTime<Utc> },
}

impl SessionState {
    pub fn is_awaiting_code(&self) -> bool {
        matches!(self, SessionState::AwaitingAccessCode { .. })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

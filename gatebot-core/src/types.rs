//! Core types: user, chat, update (tagged by kind), handler response, and the Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for updates without a sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Chat (private, group or channel) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What a user did. Routing matches on this tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateKind {
    /// `/name args`. `name` is lower-cased and stripped of the leading slash and any `@botname`.
    Command { name: String, args: String },
    /// Inline button press carrying the button's callback data.
    Callback { query_id: String, data: String },
    /// Any other text message.
    Text(String),
}

impl UpdateKind {
    /// Classifies message text as a command or plain text.
    pub fn from_text(text: &str) -> Self {
        match text.strip_prefix('/') {
            Some(rest) if !rest.is_empty() && !rest.starts_with(char::is_whitespace) => {
                let (head, args) = match rest.split_once(char::is_whitespace) {
                    Some((head, args)) => (head, args.trim()),
                    None => (rest, ""),
                };
                let name = head.split_once('@').map_or(head, |(name, _)| name);
                UpdateKind::Command {
                    name: name.to_lowercase(),
                    args: args.to_string(),
                }
            }
            _ => UpdateKind::Text(text.to_string()),
        }
    }

    /// Short tag for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            UpdateKind::Command { .. } => "command",
            UpdateKind::Callback { .. } => "callback",
            UpdateKind::Text(_) => "text",
        }
    }
}

/// One inbound user action, already converted from the provider's envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Provider-assigned update id.
    pub id: i64,
    pub user: User,
    pub chat: Chat,
    pub kind: UpdateKind,
    pub received_at: DateTime<Utc>,
}

impl Update {
    pub fn new(id: i64, user: User, chat: Chat, kind: UpdateKind) -> Self {
        Self {
            id,
            user,
            chat,
            kind,
            received_at: Utc::now(),
        }
    }

    /// Message text for commands (including the slash) and plain texts; None for callbacks.
    pub fn text(&self) -> Option<String> {
        match &self.kind {
            UpdateKind::Command { name, args } if args.is_empty() => Some(format!("/{}", name)),
            UpdateKind::Command { name, args } => Some(format!("/{} {}", name, args)),
            UpdateKind::Text(text) => Some(text.clone()),
            UpdateKind::Callback { .. } => None,
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the sent text so middleware can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Nothing decided; the chain result stays open.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// The handler (or route table) had nothing to do with this update.
    Ignore,
    /// Handled; carries the text that was sent back.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update type to core [`Update`]. None means the update kind is
/// not one the bot reacts to.
pub trait ToCoreUpdate: Send + Sync {
    fn to_core(&self) -> Option<Update>;
}

/// Single handler concept: optional before / handle / after.
/// Middleware uses before and after; routed handlers use handle.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _update: &Update) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the update. Default: Continue.
    async fn handle(&self, _update: &Update) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _update: &Update,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

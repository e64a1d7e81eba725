//! Bot abstraction for outbound calls to the messaging provider.
//!
//! [`Bot`] is transport-agnostic; gatebot-telegram implements it via teloxide and tests substitute
//! recording mocks.

use crate::error::Result;
use crate::keyboard::InlineKeyboard;
use crate::types::Chat;
use async_trait::async_trait;

/// Outbound side of the bot: plain text, text with an inline keyboard, callback acknowledgement.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message with an inline keyboard attached.
    async fn send_keyboard(&self, chat: &Chat, text: &str, keyboard: &InlineKeyboard)
        -> Result<()>;
    /// Answers a callback query so the client stops showing the button as pending.
    async fn answer_callback(&self, query_id: &str) -> Result<()>;
}

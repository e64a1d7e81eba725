//! Access-code flow: the "Enter Access Code" button arms the chat's session flag, the next plain
//! text consumes it and is checked against the access code.

use async_trait::async_trait;
use gatebot_core::{Bot, Handler, HandlerError, HandlerResponse, Result, Update, UpdateKind};
use session_store::SessionStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::texts;

/// Callback `enter_code`: marks the chat as awaiting a code and prompts for it.
pub struct EnterCodeHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<dyn SessionStore>,
}

impl EnterCodeHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { bot, sessions }
    }
}

#[async_trait]
impl Handler for EnterCodeHandler {
    #[instrument(skip(self, update), fields(chat_id = update.chat.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        self.sessions.mark_awaiting_code(update.chat.id).await;
        self.bot
            .send_message(&update.chat, texts::ENTER_CODE_PROMPT)
            .await?;
        info!(chat_id = update.chat.id, "Awaiting access code");
        Ok(HandlerResponse::Reply(texts::ENTER_CODE_PROMPT.to_string()))
    }
}

/// Plain text: when the chat's flag is set, consumes it and answers success or rejection.
/// Without the flag the text is ignored. If the answer cannot be sent the flag is set again, so a
/// retried update gets its verdict.
pub struct AccessCodeHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<dyn SessionStore>,
    code: String,
}

impl AccessCodeHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<dyn SessionStore>) -> Self {
        Self::with_code(bot, sessions, texts::ACCESS_CODE)
    }

    pub fn with_code(bot: Arc<dyn Bot>, sessions: Arc<dyn SessionStore>, code: &str) -> Self {
        Self {
            bot,
            sessions,
            code: code.to_lowercase(),
        }
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        candidate.to_lowercase() == self.code
    }
}

#[async_trait]
impl Handler for AccessCodeHandler {
    #[instrument(skip(self, update), fields(chat_id = update.chat.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let UpdateKind::Text(text) = &update.kind else {
            return Err(HandlerError::UnexpectedKind {
                expected: "text",
                got: update.kind.name(),
            }
            .into());
        };

        if !self.sessions.take_awaiting_code(update.chat.id).await {
            return Ok(HandlerResponse::Ignore);
        }

        let granted = self.is_valid(text);
        let reply = if granted {
            texts::ACCESS_GRANTED
        } else {
            texts::ACCESS_DENIED
        };
        info!(
            chat_id = update.chat.id,
            user_id = update.user.id,
            granted = granted,
            "Access code checked"
        );
        if let Err(e) = self.bot.send_message(&update.chat, reply).await {
            // Undelivered verdict: re-arm the flag so a redelivery of this update is checked again.
            self.sessions.mark_awaiting_code(update.chat.id).await;
            warn!(
                chat_id = update.chat.id,
                error = %e,
                "Access code reply not sent; flag restored"
            );
            return Err(e);
        }
        Ok(HandlerResponse::Reply(reply.to_string()))
    }
}

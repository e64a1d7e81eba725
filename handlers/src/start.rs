//! `/start`: greeting plus the two-button inline keyboard.

use async_trait::async_trait;
use gatebot_core::{Bot, Handler, HandlerResponse, InlineButton, InlineKeyboard, Result, Update};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::texts;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// "Join Queue" above "Enter Access Code".
    pub fn keyboard() -> InlineKeyboard {
        InlineKeyboard::single_column([
            InlineButton::callback(texts::JOIN_QUEUE_LABEL, texts::JOIN_QUEUE_DATA),
            InlineButton::callback(texts::ENTER_CODE_LABEL, texts::ENTER_CODE_DATA),
        ])
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, update), fields(chat_id = update.chat.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        self.bot
            .send_keyboard(&update.chat, texts::WELCOME, &Self::keyboard())
            .await?;
        info!(chat_id = update.chat.id, user_id = update.user.id, "Sent welcome keyboard");
        Ok(HandlerResponse::Reply(texts::WELCOME.to_string()))
    }
}

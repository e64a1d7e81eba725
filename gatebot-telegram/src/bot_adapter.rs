//! Wraps teloxide::Bot and implements [`gatebot_core::Bot`]. Production code sends messages via
//! Telegram; tests can substitute another Bot impl or point the API URL at a mock server.

use async_trait::async_trait;
use gatebot_core::{Bot as CoreBot, Chat, GatebotError, InlineKeyboard, Result};
use teloxide::{
    prelude::*,
    types::{CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup},
};

/// Thin wrapper around teloxide::Bot that implements gatebot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    pub(crate) fn markup(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.callback_data.clone()))
                .collect::<Vec<_>>()
        }))
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| GatebotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(Self::markup(keyboard))
            .await
            .map_err(|e| GatebotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()))
            .await
            .map_err(|e| GatebotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatebot_core::InlineButton;

    #[test]
    fn test_markup_keeps_rows_and_payloads() {
        let keyboard = InlineKeyboard::single_column([
            InlineButton::callback("Join Queue", "join_queue"),
            InlineButton::callback("Enter Access Code", "enter_code"),
        ]);

        let markup = TelegramBotAdapter::markup(&keyboard);

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0][0].text, "Join Queue");
        assert_eq!(markup.inline_keyboard[1][0].text, "Enter Access Code");
    }
}

//! Recording [`Bot`] for handler unit tests.

use async_trait::async_trait;
use gatebot_core::{Bot, Chat, GatebotError, InlineKeyboard, Result};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message { chat_id: i64, text: String },
    Keyboard { chat_id: i64, text: String, keyboard: InlineKeyboard },
    CallbackAnswer { query_id: String },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_sends: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a Bot error (nothing is recorded).
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail_sends {
            return Err(GatebotError::Bot("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Message {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        self.record(Sent::Keyboard {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: keyboard.clone(),
        })
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        self.record(Sent::CallbackAnswer {
            query_id: query_id.to_string(),
        })
    }
}

//! Scripted [`Bot`] for end-to-end chain tests: records delivered calls and fails chosen message
//! sends, so delivery failures can be driven through the whole chain.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gatebot_core::{Bot, Chat, GatebotError, InlineKeyboard, Result};

/// One delivered outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message { chat_id: i64, text: String },
    Keyboard { chat_id: i64, text: String, keyboard: InlineKeyboard },
    CallbackAnswer { query_id: String },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    /// Remaining failures per message text.
    failures: Mutex<HashMap<String, usize>>,
    fail_all_messages: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// `send_message` always fails; keyboards and callback answers still go through.
    pub fn failing_messages() -> Self {
        Self {
            fail_all_messages: true,
            ..Self::default()
        }
    }

    /// The next `times` sends of `text` fail.
    pub fn fail_message(self, text: &str, times: usize) -> Self {
        self.failures.lock().unwrap().insert(text.to_string(), times);
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn callback_answers(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::CallbackAnswer { query_id } => Some(query_id),
                _ => None,
            })
            .collect()
    }

    fn should_fail(&self, text: &str) -> bool {
        if self.fail_all_messages {
            return true;
        }
        let mut failures = self.failures.lock().unwrap();
        match failures.get_mut(text) {
            Some(left) if *left > 0 => {
                *left -= 1;
                true
            }
            _ => false,
        }
    }

    fn record(&self, sent: Sent) -> Result<()> {
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.should_fail(text) {
            return Err(GatebotError::Bot(format!("scripted failure: {text}")));
        }
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

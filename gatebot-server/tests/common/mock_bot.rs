//! [`Bot`] that forwards every outbound call over an mpsc channel, so tests can await what the
//! pool's workers send.

use std::sync::Mutex;

use async_trait::async_trait;
use gatebot_core::{Bot, Chat, GatebotError, InlineKeyboard, Result};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message { chat_id: i64, text: String },
    Keyboard { chat_id: i64, text: String, keyboard: InlineKeyboard },
    CallbackAnswer { query_id: String },
}

pub struct ChannelBot {
    tx: mpsc::UnboundedSender<Sent>,
    /// (text, remaining failures) for `send_message`.
    failing: Mutex<Option<(String, usize)>>,
}

impl ChannelBot {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Sent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                failing: Mutex::new(None),
            },
            rx,
        )
    }

    /// The first `times` sends of `text` fail and are not forwarded.
    pub fn failing_first(text: &str, times: usize) -> (Self, mpsc::UnboundedReceiver<Sent>) {
        let (bot, rx) = Self::new();
        *bot.failing.lock().unwrap() = Some((text.to_string(), times));
        (bot, rx)
    }

    fn should_fail(&self, text: &str) -> bool {
        match self.failing.lock().unwrap().as_mut() {
            Some((failing_text, left)) if failing_text == text && *left > 0 => {
                *left -= 1;
                true
            }
            _ => false,
        }
    }

    fn record(&self, sent: Sent) -> Result<()> {
        // Receiver may be gone once a test has what it needs.
        let _ = self.tx.send(sent);
        Ok(())
    }
}

#[async_trait]
impl Bot for ChannelBot {
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

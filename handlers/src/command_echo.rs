//! Catch-all for commands without a route: echoes the command name back.

use async_trait::async_trait;
use gatebot_core::{Bot, Handler, HandlerResponse, Result, Update, UpdateKind};
use std::sync::Arc;
use tracing::warn;

use crate::texts;

pub struct CommandEchoHandler {
    bot: Arc<dyn Bot>,
}

impl CommandEchoHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for CommandEchoHandler {
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let UpdateKind::Command { name, .. } = &update.kind else {
            return Ok(HandlerResponse::Ignore);
        };
        warn!(chat_id = update.chat.id, command = %name, "Unknown command");
        let reply = texts::received_command(name);
        self.bot.send_message(&update.chat, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}

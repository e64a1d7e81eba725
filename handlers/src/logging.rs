//! Middleware: update logging and callback acknowledgement.

use async_trait::async_trait;
use gatebot_core::{Bot, Handler, HandlerResponse, Result, Update, UpdateKind};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Logs each update in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, update))]
    async fn before(&self, update: &Update) -> Result<bool> {
        info!(
            update_id = update.id,
            user_id = update.user.id,
            chat_id = update.chat.id,
            username = %update.user.username.as_deref().unwrap_or("unknown"),
            kind = update.kind.name(),
            "Received update"
        );
        Ok(true)
    }

    #[instrument(skip(self, update, response))]
    async fn after(&self, update: &Update, response: &HandlerResponse) -> Result<()> {
        debug!(update_id = update.id, response = ?response, "Processed update");
        Ok(())
    }
}

/// Answers every callback query in after(), routed or not, so the client's button stops spinning.
/// A failed acknowledgement is logged and does not fail the update.
pub struct CallbackAckHandler {
    bot: Arc<dyn Bot>,
}

impl CallbackAckHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for CallbackAckHandler {
    async fn after(&self, update: &Update, _response: &HandlerResponse) -> Result<()> {
        if let UpdateKind::Callback { query_id, data } = &update.kind {
            match self.bot.answer_callback(query_id).await {
                Ok(()) => debug!(chat_id = update.chat.id, data = %data, "Callback answered"),
                Err(e) => warn!(
                    chat_id = update.chat.id,
                    data = %data,
                    error = %e,
                    "Failed to answer callback"
                ),
            }
        }
        Ok(())
    }
}

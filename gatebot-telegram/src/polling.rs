//! Long-poll runner: fetches updates with `getUpdates`, converts them, and hands them to an
//! [`UpdateSink`]. Handler execution never happens on this loop.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use gatebot_core::{ToCoreUpdate, UpdateSink};
use teloxide::prelude::*;
use teloxide::{ApiError, RequestError};
use tracing::{debug, error, info, instrument, warn};

use crate::{delete_webhook, TelegramUpdateWrapper};

/// Server-side long-poll timeout. Must stay below teloxide's default HTTP client timeout.
pub const POLL_TIMEOUT_SECS: u32 = 10;

const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Polls until `shutdown` resolves. An invalid token ends the loop with an error; other request
/// failures are retried with exponential backoff.
#[instrument(skip(bot, sink, shutdown))]
pub async fn run_polling<S, F>(bot: Bot, sink: &S, shutdown: F) -> Result<()>
where
    S: UpdateSink + ?Sized,
    F: Future<Output = ()> + Send,
{
    delete_webhook(&bot).await?;

    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Polling as bot");
        }
    }

    tokio::pin!(shutdown);
    let mut offset: i32 = 0;
    let mut backoff = Duration::from_secs(1);

    loop {
        let request = bot.get_updates().offset(offset).timeout(POLL_TIMEOUT_SECS).send();
        let updates = tokio::select! {
            _ = &mut shutdown => {
                info!("Polling stopped");
                return Ok(());
            }
            result = request => result,
        };

        match updates {
            Ok(updates) => {
                backoff = Duration::from_secs(1);
                for update in updates {
                    offset = offset.max(update.id.0 as i32 + 1);
                    let Some(core) = TelegramUpdateWrapper(&update).to_core() else {
                        debug!(update_id = update.id.0, "Skipping unsupported update");
                        continue;
                    };
                    if let Err(e) = sink.submit(core) {
                        error!(update_id = update.id.0, error = %e, "Failed to submit update; dropped");
                    }
                }
            }
            Err(RequestError::Api(ApiError::InvalidToken)) => {
                anyhow::bail!("Telegram rejected the bot token");
            }
            Err(e) => {
                warn!(error = %e, retry_in_secs = backoff.as_secs(), "getUpdates failed");
                tokio::select! {
                    _ = &mut shutdown => {
                        info!("Polling stopped");
                        return Ok(());
                    }
                    _ = tokio::time::sleep(backoff) => {}
                }
                backoff = (backoff * 2).min(MAX_BACKOFF);
            }
        }
    }
}

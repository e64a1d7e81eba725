//! teloxide Bot construction and webhook registration with the provider.

use anyhow::{Context, Result};
use teloxide::prelude::*;
use tracing::{info, instrument, warn};

use crate::TelegramConfig;

/// Builds the teloxide Bot from config: token plus the optional API URL override.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Result<Bot> {
    let bot = Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            info!(api_url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Tells the provider to push updates to `url`. Called once at startup; failure is fatal.
#[instrument(skip(bot), fields(url = %url))]
pub async fn register_webhook(bot: &Bot, url: reqwest::Url) -> Result<()> {
    bot.set_webhook(url.clone())
        .await
        .with_context(|| format!("Failed to register webhook {}", url))?;
    info!(url = %url, "Webhook registered");
    Ok(())
}

/// Removes any registered webhook so long polling can receive updates.
#[instrument(skip(bot))]
pub async fn delete_webhook(bot: &Bot) -> Result<()> {
    if let Err(e) = bot.delete_webhook().await {
        warn!(error = %e, "Failed to delete webhook");
        return Err(e).context("Failed to delete webhook");
    }
    info!("Webhook deleted");
    Ok(())
}

//! Bot configuration: Telegram credentials, webhook endpoint, listen port, log file, and dispatch
//! pool sizing. Loaded from environment variables.

use anyhow::Result;
use std::env;

pub const DEFAULT_PORT: u16 = 8443;
pub const DEFAULT_LOG_FILE: &str = "logs/gatebot.log";
/// Route the provider posts updates to.
pub const WEBHOOK_PATH: &str = "/webhook";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// BOT_TOKEN (or lower-case bot_token)
    pub bot_token: String,
    /// WEBHOOK_URL: public HTTPS URL the provider calls; required in webhook mode
    pub webhook_url: Option<String>,
    /// PORT
    pub port: u16,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// DISPATCH_WORKERS
    pub dispatch_workers: usize,
    /// DISPATCH_QUEUE_CAPACITY, per worker
    pub dispatch_queue_capacity: usize,
    /// DISPATCH_MAX_RETRIES
    pub dispatch_max_retries: u32,
}

impl TelegramConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    /// A missing or blank token is an error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .or_else(|| env::var("bot_token").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|u| !u.trim().is_empty());
        let port = parse_env("PORT").unwrap_or(DEFAULT_PORT);
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            webhook_url,
            port,
            telegram_api_url,
            log_file,
            dispatch_workers: parse_env("DISPATCH_WORKERS").unwrap_or(4),
            dispatch_queue_capacity: parse_env("DISPATCH_QUEUE_CAPACITY").unwrap_or(256),
            dispatch_max_retries: parse_env("DISPATCH_MAX_RETRIES").unwrap_or(0),
        })
    }

    /// Loads from environment variables with no token override.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Uses the given token; everything else at defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            webhook_url: None,
            port: DEFAULT_PORT,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            dispatch_workers: 4,
            dispatch_queue_capacity: 256,
            dispatch_max_retries: 0,
        }
    }

    /// Validates the settings every mode needs.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.dispatch_workers == 0 {
            anyhow::bail!("DISPATCH_WORKERS must be at least 1");
        }
        if self.dispatch_queue_capacity == 0 {
            anyhow::bail!("DISPATCH_QUEUE_CAPACITY must be at least 1");
        }
        if let Some(ref url) = self.webhook_url {
            Self::check_webhook_url(url)?;
        }
        Ok(())
    }

    /// Returns the parsed webhook URL; webhook mode cannot start without one.
    pub fn webhook_url(&self) -> Result<reqwest::Url> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("WEBHOOK_URL not set (required in webhook mode)"))?;
        Self::check_webhook_url(url)
    }

    fn check_webhook_url(url: &str) -> Result<reqwest::Url> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| anyhow::anyhow!("WEBHOOK_URL is not a valid URL ({}): {}", e, url))?;
        if parsed.scheme() != "https" {
            anyhow::bail!("WEBHOOK_URL must use https: {}", url);
        }
        Ok(parsed)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

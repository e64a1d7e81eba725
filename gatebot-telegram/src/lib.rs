//! # gatebot-telegram
//!
//! Telegram layer: adapters from teloxide types, [`gatebot_core::Bot`] implementation, config,
//! webhook registration, and the long-poll runner.
//! Handles only Telegram connectivity; routing and session state live elsewhere.

mod adapters;
mod bot_adapter;
mod config;
mod polling;
mod webhook;

pub use adapters::{TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{TelegramConfig, DEFAULT_LOG_FILE, DEFAULT_PORT, WEBHOOK_PATH};
pub use polling::{run_polling, POLL_TIMEOUT_SECS};
pub use webhook::{build_teloxide_bot, delete_webhook, register_webhook};

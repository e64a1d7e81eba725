//! # gatebot-cli
//!
//! Argument parsing, config loading and the webhook / polling runners behind the `gatebot` binary.

pub mod cli;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use runner::{build_runtime, dispatch_config, run_polling_mode, run_webhook, BotRuntime};
pub use gatebot_telegram::TelegramConfig;

//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gatebot_telegram::TelegramConfig;

#[derive(Parser, Debug)]
#[command(name = "gatebot")]
#[command(about = "Telegram access-code gate bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `webhook` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Register WEBHOOK_URL and serve the webhook relay plus liveness routes.
    Webhook {
        /// Overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
        /// Overrides BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Long-poll getUpdates; serve only the liveness routes.
    Polling {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short, long)]
        token: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Webhook {
            port: None,
            token: None,
        })
    }
}

/// Loads TelegramConfig from environment. `token` overrides BOT_TOKEN and `port` overrides PORT.
pub fn load_config(token: Option<String>, port: Option<u16>) -> Result<TelegramConfig> {
    let mut config = TelegramConfig::load(token)?;
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;
    Ok(config)
}

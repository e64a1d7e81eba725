//! gatebot: Telegram access-code gate bot. Config from env (and `.env`) with optional CLI overrides.

use anyhow::Result;
use clap::Parser;
use gatebot_cli::{load_config, run_polling_mode, run_webhook, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Commands::Webhook { port, token } => {
            let config = load_config(token, port)?;
            run_webhook(config).await
        }
        Commands::Polling { port, token } => {
            let config = load_config(token, port)?;
            run_polling_mode(config).await
        }
    }
}

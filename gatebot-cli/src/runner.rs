//! Startup wiring and the two deployment modes.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use gatebot_core::init_tracing;
use gatebot_server::{
    bind, liveness_router, serve, shutdown_signal, webhook_router, DispatchConfig, DispatchPool,
    RelayState,
};
use gatebot_telegram::{
    build_teloxide_bot, register_webhook, run_polling, TelegramBotAdapter, TelegramConfig,
};
use handlers::build_chain;
use session_store::InMemorySessionStore;
use tokio::sync::watch;
use tracing::{info, instrument};

/// Everything both modes share: the teloxide client and the running dispatch pool.
pub struct BotRuntime {
    pub bot: teloxide::Bot,
    pub pool: Arc<DispatchPool>,
}

pub fn dispatch_config(config: &TelegramConfig) -> DispatchConfig {
    DispatchConfig {
        workers: config.dispatch_workers,
        queue_capacity: config.dispatch_queue_capacity,
        max_retries: config.dispatch_max_retries,
        retry_backoff: Duration::from_millis(500),
    }
}

/// Initialises tracing, then builds the bot, session store, handler chain and dispatch pool.
pub fn build_runtime(config: &TelegramConfig) -> Result<BotRuntime> {
    init_tracing(&config.log_file)?;

    info!(
        port = config.port,
        workers = config.dispatch_workers,
        queue_capacity = config.dispatch_queue_capacity,
        log_file = %config.log_file,
        "Initializing bot"
    );

    let bot = build_teloxide_bot(config)?;
    let sessions = Arc::new(InMemorySessionStore::new());
    let chain = build_chain(Arc::new(TelegramBotAdapter::new(bot.clone())), sessions);
    let pool = Arc::new(DispatchPool::start(chain, dispatch_config(config)));

    Ok(BotRuntime { bot, pool })
}

/// Registers the webhook and serves the relay until Ctrl-C, then drains the pool.
#[instrument(skip(config))]
pub async fn run_webhook(config: TelegramConfig) -> Result<()> {
    let url = config.webhook_url()?;
    let runtime = build_runtime(&config)?;

    register_webhook(&runtime.bot, url)
        .await
        .context("Webhook registration failed")?;
    let listener = bind(config.port).await?;

    info!("Bot started successfully (webhook mode)");
    let served = serve(
        listener,
        webhook_router(RelayState::new(runtime.pool.clone())),
        shutdown_signal(),
    )
    .await;

    runtime.pool.shutdown().await;
    served
}

/// Serves liveness routes and long-polls in parallel until Ctrl-C or a fatal poll error, then
/// drains the pool.
#[instrument(skip(config))]
pub async fn run_polling_mode(config: TelegramConfig) -> Result<()> {
    let runtime = build_runtime(&config)?;
    let listener = bind(config.port).await?;
    let (stop_tx, stop_rx) = watch::channel(false);

    info!("Bot started successfully (polling mode)");

    let signal = async {
        tokio::select! {
            _ = shutdown_signal() => {}
            _ = stopped(stop_rx.clone()) => {}
        }
        let _ = stop_tx.send(true);
    };
    let poll = then_stop(
        run_polling(
            runtime.bot.clone(),
            runtime.pool.as_ref(),
            stopped(stop_rx.clone()),
        ),
        &stop_tx,
    );
    let http = then_stop(
        serve(listener, liveness_router(), stopped(stop_rx.clone())),
        &stop_tx,
    );

    let ((), polled, served) = tokio::join!(signal, poll, http);

    runtime.pool.shutdown().await;
    polled?;
    served
}

async fn stopped(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

/// Runs `fut`, then tells the sibling tasks to stop, however `fut` ended.
async fn then_stop<F: Future>(fut: F, stop_tx: &watch::Sender<bool>) -> F::Output {
    let output = fut.await;
    let _ = stop_tx.send(true);
    output
}

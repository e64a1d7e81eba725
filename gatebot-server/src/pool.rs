//! Supervised dispatch pool.
//!
//! Updates are sharded by chat id across `workers` tasks, each owning a bounded queue, so one
//! chat's updates run in arrival order while different chats run in parallel. Every job runs in
//! its own spawned task: handler errors and panics are caught, counted and logged, and failed jobs
//! are retried up to `max_retries` times.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use gatebot_core::{GatebotError, Update, UpdateSink};
use handler_chain::HandlerChain;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::DispatchError;

#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub workers: usize,
    /// Queue capacity per worker.
    pub queue_capacity: usize,
    pub max_retries: u32,
    /// Delay before retry `n` is `retry_backoff * n`.
    pub retry_backoff: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            queue_capacity: 256,
            max_retries: 0,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

/// Snapshot of pool counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub submitted: u64,
    pub processed: u64,
    pub failed: u64,
    pub retried: u64,
}

#[derive(Default)]
struct Counters {
    submitted: AtomicU64,
    processed: AtomicU64,
    failed: AtomicU64,
    retried: AtomicU64,
}

pub struct DispatchPool {
    senders: RwLock<Vec<mpsc::Sender<Update>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    counters: Arc<Counters>,
}

impl DispatchPool {
    /// Spawns the workers. Must be called inside a tokio runtime.
    pub fn start(chain: HandlerChain, config: DispatchConfig) -> Self {
        let workers = config.workers.max(1);
        let capacity = config.queue_capacity.max(1);
        let chain = Arc::new(chain);
        let config = Arc::new(config);
        let counters = Arc::new(Counters::default());

        let mut senders = Vec::with_capacity(workers);
        let mut handles = Vec::with_capacity(workers);
        for index in 0..workers {
            let (tx, rx) = mpsc::channel(capacity);
            senders.push(tx);
            handles.push(tokio::spawn(run_worker(
                index,
                rx,
                chain.clone(),
                config.clone(),
                counters.clone(),
            )));
        }

        info!(
            workers = workers,
            queue_capacity = capacity,
            max_retries = config.max_retries,
            "Dispatch pool started"
        );

        Self {
            senders: RwLock::new(senders),
            workers: Mutex::new(handles),
            counters,
        }
    }

    /// Queues the update without waiting for it to be handled.
    pub fn submit(&self, update: Update) -> Result<(), DispatchError> {
        let senders = self.senders.read().map_err(|_| DispatchError::Closed)?;
        if senders.is_empty() {
            return Err(DispatchError::Closed);
        }
        let worker = shard(update.chat.id, senders.len());
        match senders[worker].try_send(update) {
            Ok(()) => {
                self.counters.submitted.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(TrySendError::Full(update)) => {
                warn!(worker = worker, update_id = update.id, "Dispatch queue full");
                Err(DispatchError::QueueFull { worker })
            }
            Err(TrySendError::Closed(_)) => Err(DispatchError::Closed),
        }
    }

    pub fn stats(&self) -> DispatchStats {
        DispatchStats {
            submitted: self.counters.submitted.load(Ordering::Relaxed),
            processed: self.counters.processed.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            retried: self.counters.retried.load(Ordering::Relaxed),
        }
    }

    /// Stops accepting updates and waits until queued and in-flight updates are done.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) {
        match self.senders.write() {
            Ok(mut senders) => senders.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
        let handles = std::mem::take(&mut *self.workers.lock().await);
        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Dispatch worker ended abnormally");
            }
        }
        let stats = self.stats();
        info!(
            submitted = stats.submitted,
            processed = stats.processed,
            failed = stats.failed,
            retried = stats.retried,
            "Dispatch pool drained"
        );
    }
}

impl UpdateSink for DispatchPool {
    fn submit(&self, update: Update) -> gatebot_core::Result<()> {
        DispatchPool::submit(self, update).map_err(|e| GatebotError::Dispatch(e.to_string()))
    }
}

fn shard(chat_id: i64, workers: usize) -> usize {
    (chat_id.unsigned_abs() % workers as u64) as usize
}

async fn run_worker(
    index: usize,
    mut rx: mpsc::Receiver<Update>,
    chain: Arc<HandlerChain>,
    config: Arc<DispatchConfig>,
    counters: Arc<Counters>,
) {
    debug!(worker = index, "Dispatch worker started");
    while let Some(update) = rx.recv().await {
        process(index, &chain, update, &config, &counters).await;
    }
    debug!(worker = index, "Dispatch worker stopped");
}

async fn process(
    worker: usize,
    chain: &Arc<HandlerChain>,
    update: Update,
    config: &DispatchConfig,
    counters: &Counters,
) {
    let mut attempt: u32 = 0;
    loop {
        let job_chain = chain.clone();
        let job_update = update.clone();
        let outcome = tokio::spawn(async move { job_chain.handle(&job_update).await }).await;

        let failure = match outcome {
            Ok(Ok(response)) => {
                counters.processed.fetch_add(1, Ordering::Relaxed);
                debug!(
                    worker = worker,
                    update_id = update.id,
                    response = ?response,
                    "Update processed"
                );
                return;
            }
            Ok(Err(e)) => e.to_string(),
            Err(e) if e.is_panic() => format!("handler panicked: {}", e),
            Err(e) => e.to_string(),
        };

        if attempt >= config.max_retries {
            counters.failed.fetch_add(1, Ordering::Relaxed);
            error!(
                worker = worker,
                update_id = update.id,
                chat_id = update.chat.id,
                attempts = attempt + 1,
                error = %failure,
                "Update failed; dropped"
            );
            return;
        }

        attempt += 1;
        counters.retried.fetch_add(1, Ordering::Relaxed);
        warn!(
            worker = worker,
            update_id = update.id,
            attempt = attempt,
            error = %failure,
            "Update failed; retrying"
        );
        tokio::time::sleep(config.retry_backoff * attempt).await;
    }
}

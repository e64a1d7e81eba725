//! Dispatch pool error types.

use thiserror::Error;

/// Why an update could not be handed to the dispatch pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Dispatch queue full (worker {worker})")]
    QueueFull { worker: usize },
    #[error("Dispatch pool is shut down")]
    Closed,
}

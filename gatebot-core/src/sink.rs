use crate::error::Result;
use crate::types::Update;

/// Accepts converted updates for asynchronous processing. `submit` must not wait for the update
/// to be handled; it only reports whether the update was accepted.
pub trait UpdateSink: Send + Sync {
    fn submit(&self, update: Update) -> Result<()>;
}

//! Session crate: per-chat conversation state for the access-code flow.
//!
//! ## Modules
//!
//! - [`state`] – SessionState (idle / awaiting access code)
//! - [`store`] – SessionStore trait
//! - [`in_memory`] – InMemorySessionStore (process-local, no persistence or expiry)

mod in_memory;
mod state;
mod store;


pub use in_memory::InMemorySessionStore;
pub use state::SessionState;
pub use store::SessionStore;

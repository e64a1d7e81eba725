//! # gatebot-server
//!
//! HTTP side of the bot: the webhook relay (`POST /webhook`), the liveness endpoint
//! (`GET /healthcheck`, `GET /`), and the supervised [`DispatchPool`] that runs the handler chain
//! off the request path.

mod error;
mod health;
mod pool;
mod relay;
mod serve;

pub use error::DispatchError;
pub use health::{liveness_router, HEALTH_MESSAGE, ROOT_MESSAGE};
pub use pool::{DispatchConfig, DispatchPool, DispatchStats};
pub use relay::{webhook_router, RelayState, StatusBody};
pub use serve::{bind, serve, shutdown_signal};

//! # Handlers for the access-code bot
//!
//! Routed handlers (`/start`, the enter-code button, the access-code text, unknown commands),
//! the logging and callback-ack middleware, and [`build_chain`] which wires them into a
//! [`handler_chain::HandlerChain`].

mod access_code;
mod command_echo;
mod logging;
mod routes;
mod start;
pub mod texts;

#[cfg(test)]
mod test;

pub use access_code::{AccessCodeHandler, EnterCodeHandler};
pub use command_echo::CommandEchoHandler;
pub use logging::{CallbackAckHandler, LoggingHandler};
pub use routes::build_chain;
pub use start::StartHandler;

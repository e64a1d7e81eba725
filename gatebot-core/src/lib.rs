//! # gatebot-core
//!
//! Core types and traits for the access-code bot: [`Bot`], [`Handler`], [`Update`] and its
//! tagged [`UpdateKind`], inline keyboards, errors, and tracing initialization.
//! Transport-agnostic; used by handler-chain, handlers, gatebot-telegram and gatebot-server.

pub mod bot;
pub mod error;
pub mod keyboard;
pub mod logger;
pub mod sink;
pub mod types;

pub use bot::Bot;
pub use error::{GatebotError, HandlerError, Result};
pub use keyboard::{InlineButton, InlineKeyboard};
pub use logger::init_tracing;
pub use sink::UpdateSink;
pub use types::{
    Chat, Handler, HandlerResponse, ToCoreUpdate, ToCoreUser, Update, UpdateKind, User,
};

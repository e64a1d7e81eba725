use gatebot_core::Bot;
use handler_chain::{HandlerChain, RouteTable};
use session_store::SessionStore;
use std::sync::Arc;

use crate::texts;
use crate::{
    AccessCodeHandler, CallbackAckHandler, CommandEchoHandler, EnterCodeHandler, LoggingHandler,
    StartHandler,
};

/// Builds the bot's handler chain: logging and callback-ack middleware around the route table
/// (`/start`, unknown commands, `enter_code`, plain text).
pub fn build_chain(bot: Arc<dyn Bot>, sessions: Arc<dyn SessionStore>) -> HandlerChain {
    let routes = RouteTable::new()
        .on_command("start", Arc::new(StartHandler::new(bot.clone())))
        .on_unknown_command(Arc::new(CommandEchoHandler::new(bot.clone())))
        .on_callback(
            texts::ENTER_CODE_DATA,
            Arc::new(EnterCodeHandler::new(bot.clone(), sessions.clone())),
        )
        .on_text(Arc::new(AccessCodeHandler::new(bot.clone(), sessions)));

    HandlerChain::new()
        .add_middleware(Arc::new(LoggingHandler))
        .add_middleware(Arc::new(CallbackAckHandler::new(bot)))
        .with_routes(routes)
}

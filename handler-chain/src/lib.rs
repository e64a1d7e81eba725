//! # Handler chain
//!
//! Runs middleware around a single routed handler for each update. All middleware `before` run in
//! order (any false stops the chain); then the handler selected by the [`RouteTable`] runs; then
//! all middleware `after` run in reverse order with the final response.

mod route_table;

pub use route_table::RouteTable;

use gatebot_core::{Handler, HandlerResponse, Result, Update};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Middleware plus route table. Cheap to clone; shared by every dispatch worker.
#[derive(Clone, Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Handler>>,
    routes: RouteTable,
}

impl HandlerChain {
    /// Creates an empty chain (no middleware, no routes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware (before runs in order, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Handler>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Replaces the route table.
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Runs middleware before, the routed handler, then middleware after in reverse.
    /// Returns the handler's response, `Ignore` if nothing is routed, or `Stop` if a middleware stopped the chain.
    /// A handler error is returned after the after phase has run with `Stop`.
    #[instrument(skip(self, update), fields(update_id = update.id, kind = update.kind.name()))]
    pub async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        info!(
            user_id = update.user.id,
            chat_id = update.chat.id,
            update_id = update.id,
            "step: handler_chain started"
        );

        for mw in &self.middleware {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            debug!(chat_id = update.chat.id, middleware = %mw_name, "step: middleware before");
            if !mw.before(update).await? {
                info!(
                    chat_id = update.chat.id,
                    middleware = %mw_name,
                    "step: middleware before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let outcome = match self.routes.route(update) {
            Some(handler) => {
                let handler_name = std::any::type_name_of_val(handler.as_ref());
                info!(chat_id = update.chat.id, handler = %handler_name, "step: handler processing");
                let outcome = handler.handle(update).await;
                match &outcome {
                    Ok(response) => {
                        let (response_type, reply_len) = match response {
                            HandlerResponse::Continue => ("Continue", None),
                            HandlerResponse::Stop => ("Stop", None),
                            HandlerResponse::Ignore => ("Ignore", None),
                            HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
                        };
                        info!(
                            chat_id = update.chat.id,
                            handler = %handler_name,
                            response_type = %response_type,
                            reply_len = ?reply_len,
                            "step: handler done"
                        );
                    }
                    Err(e) => warn!(
                        chat_id = update.chat.id,
                        handler = %handler_name,
                        error = %e,
                        "step: handler failed"
                    ),
                }
                outcome
            }
            None => {
                debug!(chat_id = update.chat.id, kind = update.kind.name(), "step: no route");
                Ok(HandlerResponse::Ignore)
            }
        };

        // A failed handler still gets the after phase, seen as Stop.
        let after_response = match &outcome {
            Ok(response) => response.clone(),
            Err(_) => HandlerResponse::Stop,
        };
        for mw in self.middleware.iter().rev() {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            debug!(chat_id = update.chat.id, middleware = %mw_name, "step: middleware after");
            mw.after(update, &after_response).await?;
        }

        let final_response = outcome?;

        info!(
            user_id = update.user.id,
            chat_id = update.chat.id,
            update_id = update.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Integration tests live in tests/handler_chain_test.rs

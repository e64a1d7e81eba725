//! Liveness endpoint for the hosting platform. Fixed responses, no dependency on bot state.

use axum::{response::Json, routing::get, Router};

use crate::relay::StatusBody;

pub const HEALTH_MESSAGE: &str = "The bot is running fine!";
pub const ROOT_MESSAGE: &str = "Bot is alive";

/// `GET /healthcheck` and `GET /`.
pub fn liveness_router() -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .route("/", get(root))
}

/// GET /healthcheck: `{"status":"ok","message":"The bot is running fine!"}`.
async fn healthcheck() -> Json<StatusBody> {
    Json(StatusBody::ok_with(HEALTH_MESSAGE))
}

/// GET /: plain-text liveness string.
async fn root() -> &'static str {
    ROOT_MESSAGE
}

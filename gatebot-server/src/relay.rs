//! Webhook relay: `POST /webhook` decodes the provider's update, hands it to the dispatch sink
//! and answers immediately. Processing happens later on the pool.

use std::sync::Arc;

use axum::{
    body::Bytes, extract::State, http::StatusCode, response::Json, routing::post, Router,
};
use gatebot_core::{ToCoreUpdate, UpdateSink};
use gatebot_telegram::{TelegramUpdateWrapper, WEBHOOK_PATH};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::liveness_router;

/// JSON body shared by the relay and the liveness endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: None,
        }
    }

    pub fn ok_with(message: &str) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message),
        }
    }
}

#[derive(Clone)]
pub struct RelayState {
    pub sink: Arc<dyn UpdateSink>,
}

impl RelayState {
    pub fn new(sink: Arc<dyn UpdateSink>) -> Self {
        Self { sink }
    }
}

/// Relay plus liveness routes, with HTTP request tracing.
pub fn webhook_router(state: RelayState) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(webhook))
        .with_state(state)
        .merge(liveness_router())
        .layer(TraceLayer::new_for_http())
}

/// POST /webhook: 200 `{"status":"ok"}` once the update is queued (or skipped as unsupported);
/// 500 `{"status":"error","message":...}` when the body does not decode or cannot be queued.
async fn webhook(State(state): State<RelayState>, body: Bytes) -> (StatusCode, Json<StatusBody>) {
    let update: teloxide::types::Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "Malformed webhook payload; dropped");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusBody::error(format!("Invalid update payload: {}", e))),
            );
        }
    };

    let Some(core) = TelegramUpdateWrapper(&update).to_core() else {
        debug!(update_id = update.id.0, "Unsupported update kind; acknowledged");
        return (StatusCode::OK, Json(StatusBody::ok()));
    };

    let update_id = core.id;
    if let Err(e) = state.sink.submit(core) {
        error!(update_id = update_id, error = %e, "Failed to submit update; dropped");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StatusBody::error(e.to_string())),
        );
    }

    debug!(update_id = update_id, "Update queued");
    (StatusCode::OK, Json(StatusBody::ok()))
}

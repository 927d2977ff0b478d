//! HTTP surface: trigger gateway, read endpoint, and liveness probe.
//!
//! The trigger endpoint authorizes a shared secret and hands one ingestion
//! run off to the background, responding before the run has started, let
//! alone finished. The acknowledgment means "a run was scheduled", never "a
//! run succeeded"; job outcomes are observable only in the log.
//!
//! The secret travels either in the `x-trigger-secret` header or in the
//! `secret` query parameter. Which one a deployment uses is a transport
//! detail, not a logic difference.

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router, extract::Query, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiResult;
use crate::ingest;

pub const TRIGGER_SECRET_HEADER: &str = "x-trigger-secret";

/// Acknowledgment payload for the trigger endpoint.
#[derive(Debug, Serialize)]
pub struct TriggerAck {
    pub status: &'static str,
    pub message: &'static str,
}

/// One headline as exposed by the read endpoint.
#[derive(Debug, Serialize)]
pub struct NewsItem {
    pub title: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct TriggerParams {
    pub secret: Option<String>,
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/news", get(list_news))
        .route("/api/internal/update-news", post(trigger_update))
        .with_state(state)
}

/// Liveness probe.
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Cricket News API."
    }))
}

/// Full ordered list of stored headlines, most recent first.
async fn list_news(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<NewsItem>>> {
    let records = state.store.list_all().await?;
    let items = records
        .into_iter()
        .map(|h| NewsItem { title: h.title })
        .collect();
    Ok(Json(items))
}

/// Authorize the caller and schedule exactly one ingestion run.
///
/// A rejected trigger has no side effect and reveals nothing beyond
/// "invalid credentials". An authorized trigger is acknowledged immediately;
/// the scheduled run may not have started when the response is sent.
async fn trigger_update(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TriggerParams>,
    headers: HeaderMap,
) -> (StatusCode, Json<TriggerAck>) {
    let provided = headers
        .get(TRIGGER_SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or(params.secret);

    if provided.as_deref() != Some(state.trigger_secret.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(TriggerAck {
                status: "rejected",
                message: "invalid credentials",
            }),
        );
    }

    info!("Trigger authorized; scheduling ingestion run");
    ingest::schedule(Arc::clone(&state));

    (
        StatusCode::ACCEPTED,
        Json(TriggerAck {
            status: "scheduled",
            message: "Ingestion run scheduled.",
        }),
    )
}

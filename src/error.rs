//! Error types for the storage layer and the HTTP read path.
//!
//! Storage errors are typed and surfaced past the store boundary; the
//! ingestion job is responsible for catching them so a storage outage never
//! reaches a trigger caller. The read path converts them into a plain 500
//! response via [`ApiError`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the deduplicating store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("query execution failed: {0}")]
    QueryFailed(#[from] diesel::result::Error),

    #[error("migration failed: {0}")]
    MigrationFailed(String),

    #[error("blocking task failed: {0}")]
    Blocking(String),
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::Blocking(err.to_string())
    }
}

/// Error wrapper for axum handlers on the read path.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Store(err) = &self;
        tracing::error!(error = %err, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Could not fetch news from database." })),
        )
            .into_response()
    }
}

//! Request-boundary error taxonomy.
//!
//! Validation problems are the caller's fault (400); everything else is a
//! pipeline failure reported as 500 with the original message in the body.
//! This is an internal tool, not a hardened boundary, so messages pass
//! through unredacted. Translation failures never reach this type; the
//! translator degrades to a placeholder instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{
    ai::UpstreamError, extractor::ExtractError, fetcher::FetchError, repositories::StoreError,
};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("failed to fetch blog content: {0}")]
    Fetch(#[from] FetchError),

    #[error("could not extract meaningful content from the blog post: {0}")]
    Extract(#[from] ExtractError),

    #[error("failed to generate summary: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("failed to store results: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

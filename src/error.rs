use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::generation::GenerationError;

/// Error surface of the HTTP handlers. The public message is a stable,
/// non-sensitive string; upstream detail goes to the logs only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("GEMINI_API_KEY is not set in environment")]
    ConfigurationMissing,
    #[error("{public}")]
    Upstream {
        public: &'static str,
        #[source]
        source: GenerationError,
    },
    #[error("{public}")]
    MalformedOutput { public: &'static str, detail: String },
}

impl ApiError {
    /// Wrap a generation failure, routing a missing credential to the
    /// configuration error so the operator-facing message stays precise.
    pub fn generation(public: &'static str, source: GenerationError) -> Self {
        match source {
            GenerationError::MissingCredential => ApiError::ConfigurationMissing,
            source => ApiError::Upstream { public, source },
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::ConfigurationMissing
            | ApiError::Upstream { .. }
            | ApiError::MalformedOutput { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidInput(msg) => {
                tracing::debug!("rejected request: {msg}");
            }
            ApiError::ConfigurationMissing => {
                tracing::error!("generation credential is not configured");
            }
            ApiError::Upstream { public, source } => {
                tracing::error!("{public}: {source}");
            }
            ApiError::MalformedOutput { public, detail } => {
                tracing::error!("{public}: {detail}");
            }
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

/// Errors returned to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// A date key is not a valid `YYYY-MM-DD` date
    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),
    /// The request body could not be turned into the expected JSON shape
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),
    /// The mood document could not be written
    #[error("Failed to save data: {0}")]
    SaveFailed(#[source] StoreError),
    /// The mood document could not be removed
    #[error("Failed to clear moods: {0}")]
    ClearFailed(#[source] StoreError),
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::SaveFailed(_) | ApiError::ClearFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::InvalidBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            error!("{:?}", self);
        } else {
            warn!("Rejected request: {}", detail);
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}

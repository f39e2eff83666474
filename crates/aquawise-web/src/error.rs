//! HTTP error mapping
//!
//! Every failure leaves the API as `{"error": "<message>"}` with a status
//! code chosen by who is at fault.

use aquawise_core::CoreError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by API handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body could not be read as the expected JSON shape
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Core(e) if e.is_invalid_input() => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Rejected request");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

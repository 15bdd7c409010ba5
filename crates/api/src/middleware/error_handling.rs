//! # Error Handling Middleware
//!
//! Maps the engine's [`SlotError`] onto HTTP status codes and a JSON body of
//! the form `{"error": "...", "retryable": bool}`.
//!
//! The two recoverable failures must stay distinguishable for the booking
//! page: `409 Conflict` means "pick another slot", while
//! `503 Service Unavailable` with `retryable: true` means "submit the same
//! request again".

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coachslot_core::errors::SlotError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use coachslot_api::middleware::error_handling::AppError;
/// use coachslot_core::errors::SlotError;
///
/// async fn handler(name: Option<String>) -> Result<Json<String>, AppError> {
///     let name = name.ok_or_else(|| SlotError::Validation("name is required".to_string()))?;
///     Ok(Json(name))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SlotError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::Conflict(_) | SlotError::StaleSelection(_) => StatusCode::CONFLICT,
            SlotError::Retrieval(_) => StatusCode::SERVICE_UNAVAILABLE,
            SlotError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self.0);
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "retryable": self.0.is_retryable(),
        }));

        (status, body).into_response()
    }
}

/// Allows using `?` on `SlotResult` values inside handlers.
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Store failures reported as bare `eyre` reports are treated as retrieval
/// failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::Retrieval(err))
    }
}

/// Bodies that are not valid JSON or do not match the request type.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(SlotError::Validation(rejection.body_text()))
    }
}

/// Path segments that do not parse, such as a malformed coach ID.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(SlotError::Validation(rejection.body_text()))
    }
}

/// Maps a SlotError to an HTTP response
pub fn map_error(err: SlotError) -> Response {
    AppError(err).into_response()
}

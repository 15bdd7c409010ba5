use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use coachslot_core::{
    errors::SlotError,
    intake,
    models::booking::{Booking, CreateBookingRequest, ReserveRequest},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    extract::{AppJson, AppPath},
    middleware::error_handling::AppError,
};

/// Reserves a slot for a client who has finished the intake conversation.
///
/// # Endpoint
///
/// ```text
/// POST /api/coaches/:coach_id/bookings
/// ```
///
/// `client_name` and `client_email` may be omitted when the transcript ends
/// with the intake agent's completion marker; explicit fields win.
///
/// # Errors
///
/// * `400` - Missing client details
/// * `409` - The slot was taken or is no longer offered; re-list and pick again
/// * `503` - Store unavailable or commit outcome unknown; retry the same request
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    AppPath(coach_id): AppPath<Uuid>,
    AppJson(payload): AppJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let from_intake = intake::completed_details(&payload.transcript);

    let client_name = payload
        .client_name
        .filter(|name| !name.trim().is_empty())
        .or_else(|| from_intake.as_ref().map(|d| d.name.clone()))
        .ok_or_else(|| SlotError::Validation("client name is required".to_string()))?;
    let client_email = payload
        .client_email
        .filter(|email| !email.trim().is_empty())
        .or_else(|| from_intake.as_ref().map(|d| d.email.clone()))
        .ok_or_else(|| SlotError::Validation("client email is required".to_string()))?;

    let request = ReserveRequest {
        coach_id,
        client_name,
        client_email,
        chosen_time: payload.booking_time,
        transcript: payload.transcript,
    };

    let booking = state.engine.reserve(request, state.now()).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Upcoming bookings for the coach dashboard, earliest first.
///
/// # Endpoint
///
/// ```text
/// GET /api/coaches/:coach_id/bookings
/// ```
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    AppPath(coach_id): AppPath<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.engine.upcoming_bookings(coach_id, state.now()).await?;
    Ok(Json(bookings))
}

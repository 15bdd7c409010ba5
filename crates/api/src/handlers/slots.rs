use axum::{
    Json,
    extract::State,
};
use coachslot_core::models::time_slot::TimeSlot;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    extract::AppPath,
    middleware::error_handling::AppError,
};

/// Bookable slots for a coach over the next seven days.
///
/// # Endpoint
///
/// ```text
/// GET /api/coaches/:coach_id/slots
/// ```
///
/// Slots are freshly derived on every call; nothing is held for the client.
/// Taken slots are included with `available: false`.
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    AppPath(coach_id): AppPath<Uuid>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let slots = state.engine.resolve_slots(coach_id, state.now()).await?;
    Ok(Json(slots))
}

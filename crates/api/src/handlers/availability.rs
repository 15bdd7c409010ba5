//! # Availability Handlers
//!
//! Coach-facing management of the weekly availability rules the slot
//! generator expands. A save is an upsert per day of week: days missing
//! from the request keep whatever was stored before.

use axum::{
    Json,
    extract::State,
};
use coachslot_core::models::availability::{AvailabilityRule, WeeklyAvailabilityRequest};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    extract::{AppJson, AppPath},
    middleware::error_handling::AppError,
};

/// ```text
/// GET /api/coaches/:coach_id/availability
/// ```
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    AppPath(coach_id): AppPath<Uuid>,
) -> Result<Json<Vec<AvailabilityRule>>, AppError> {
    let rules = state.engine.availability(coach_id).await?;
    Ok(Json(rules))
}

/// ```text
/// PUT /api/coaches/:coach_id/availability
/// {"days": [{"day_of_week": 1, "start_time": "09:00", "end_time": "17:00"}]}
/// ```
///
/// # Errors
///
/// * `400` - A window with `start_time >= end_time`, a day outside 0-6, or
///   the same day listed twice
#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    AppPath(coach_id): AppPath<Uuid>,
    AppJson(payload): AppJson<WeeklyAvailabilityRequest>,
) -> Result<Json<Vec<AvailabilityRule>>, AppError> {
    let rules = payload
        .days
        .into_iter()
        .map(|day| day.into_rule(coach_id))
        .collect();

    let stored = state.engine.save_availability(coach_id, rules).await?;
    Ok(Json(stored))
}

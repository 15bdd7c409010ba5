use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/coaches/:coach_id/slots",
            get(handlers::slots::list_slots),
        )
        .route(
            "/api/coaches/:coach_id/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
}

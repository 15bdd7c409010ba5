use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use coachslot_api::{ApiState, build_router};
use coachslot_core::{
    SlotEngine,
    models::{
        availability::AvailabilityRule,
        booking::{Booking, NewBooking},
    },
};
use coachslot_db::mock::repositories::{MockAvailabilityRepo, MockBookingRepo};
use uuid::Uuid;

/// Monday 2024-06-10, 08:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap()
}

pub fn monday_at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, hour, 0, 0).unwrap()
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn stored_booking(new_booking: NewBooking) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        coach_id: new_booking.coach_id,
        client_name: new_booking.client_name,
        client_email: new_booking.client_email,
        booking_time: new_booking.booking_time,
        transcript: new_booking.transcript,
        created_at: fixed_now(),
    }
}

pub struct TestContext {
    pub coach_id: Uuid,
    pub availability_repo: MockAvailabilityRepo,
    pub booking_repo: MockBookingRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            coach_id: Uuid::new_v4(),
            availability_repo: MockAvailabilityRepo::new(),
            booking_repo: MockBookingRepo::new(),
        }
    }

    /// Coach works Mondays 09:00-12:00.
    pub fn with_monday_rule(mut self) -> Self {
        self.availability_repo
            .expect_fetch_availability_rules()
            .returning(|coach_id| Ok(vec![AvailabilityRule::new(coach_id, 1, hm(9, 0), hm(12, 0))]));
        self
    }

    pub fn with_booked_times(mut self, times: Vec<DateTime<Utc>>) -> Self {
        self.booking_repo
            .expect_fetch_booked_times()
            .returning(move |_| Ok(times.clone()));
        self
    }

    pub fn server(self) -> TestServer {
        let engine = SlotEngine::new(Arc::new(self.availability_repo), Arc::new(self.booking_repo));
        let state = Arc::new(ApiState::new(engine).with_clock(fixed_now));
        TestServer::new(build_router(state)).expect("Failed to start test server")
    }
}

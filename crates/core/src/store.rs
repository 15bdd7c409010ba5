//! Read/write contract the engine expects from persistent storage.
//!
//! Implementations report every I/O failure as [`SlotError::Retrieval`] and a
//! uniqueness violation on `(coach_id, booking_time)` as
//! [`SlotError::Conflict`]; the engine relies on the two being distinct.
//!
//! [`SlotError::Retrieval`]: crate::errors::SlotError::Retrieval
//! [`SlotError::Conflict`]: crate::errors::SlotError::Conflict

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::SlotResult;
use crate::models::{
    availability::AvailabilityRule,
    booking::{Booking, NewBooking},
};

#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    async fn fetch_availability_rules(&self, coach_id: Uuid) -> SlotResult<Vec<AvailabilityRule>>;

    /// Inserts or replaces the rules keyed by `(coach_id, day_of_week)` and
    /// returns every rule now stored for the coach.
    async fn upsert_availability_rules(
        &self,
        coach_id: Uuid,
        rules: Vec<AvailabilityRule>,
    ) -> SlotResult<Vec<AvailabilityRule>>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn fetch_booked_times(&self, coach_id: Uuid) -> SlotResult<Vec<DateTime<Utc>>>;

    async fn fetch_bookings(&self, coach_id: Uuid) -> SlotResult<Vec<Booking>>;

    async fn insert_booking(&self, booking: NewBooking) -> SlotResult<Booking>;
}

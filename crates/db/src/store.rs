//! PostgreSQL implementation of the engine's storage contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coachslot_core::{
    SlotError, SlotResult,
    models::{
        availability::AvailabilityRule,
        booking::{Booking, NewBooking},
    },
    store::{AvailabilityStore, BookingStore},
};
use eyre::WrapErr;
use uuid::Uuid;

use crate::{
    DbPool,
    repositories::{
        availability,
        booking::{self, InsertOutcome},
    },
};

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AvailabilityStore for PgStore {
    async fn fetch_availability_rules(&self, coach_id: Uuid) -> SlotResult<Vec<AvailabilityRule>> {
        let rows = availability::get_rules_by_coach_id(&self.pool, coach_id)
            .await
            .wrap_err_with(|| format!("failed to fetch availability rules for coach {coach_id}"))?;

        rows.into_iter()
            .map(|row| AvailabilityRule::try_from(row).map_err(SlotError::Retrieval))
            .collect()
    }

    async fn upsert_availability_rules(
        &self,
        coach_id: Uuid,
        rules: Vec<AvailabilityRule>,
    ) -> SlotResult<Vec<AvailabilityRule>> {
        let windows: Vec<_> = rules
            .iter()
            .map(|rule| (i16::from(rule.day_of_week), rule.start_time, rule.end_time))
            .collect();

        let rows = availability::upsert_rules(&self.pool, coach_id, &windows)
            .await
            .wrap_err_with(|| format!("failed to save availability rules for coach {coach_id}"))?;

        rows.into_iter()
            .map(|row| AvailabilityRule::try_from(row).map_err(SlotError::Retrieval))
            .collect()
    }
}

#[async_trait]
impl BookingStore for PgStore {
    async fn fetch_booked_times(&self, coach_id: Uuid) -> SlotResult<Vec<DateTime<Utc>>> {
        let times = booking::get_booking_times_by_coach_id(&self.pool, coach_id)
            .await
            .wrap_err_with(|| format!("failed to fetch booked times for coach {coach_id}"))?;
        Ok(times)
    }

    async fn fetch_bookings(&self, coach_id: Uuid) -> SlotResult<Vec<Booking>> {
        let rows = booking::get_bookings_by_coach_id(&self.pool, coach_id)
            .await
            .wrap_err_with(|| format!("failed to fetch bookings for coach {coach_id}"))?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn insert_booking(&self, new_booking: NewBooking) -> SlotResult<Booking> {
        let outcome = booking::create_booking(&self.pool, &new_booking)
            .await
            .wrap_err("failed to insert booking")?;

        match outcome {
            InsertOutcome::Inserted(row) => Ok(row.into()),
            InsertOutcome::Duplicate => Err(SlotError::Conflict(format!(
                "{} is already booked for coach {}",
                new_booking.booking_time, new_booking.coach_id
            ))),
        }
    }
}

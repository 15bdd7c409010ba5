use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::{
    errors::SlotResult,
    models::{availability::AvailabilityRule, booking::Booking},
    store::{AvailabilityStore, BookingStore},
};

/// Default bound on how long a booking insert may take before its outcome
/// is treated as unknown.
pub const DEFAULT_COMMIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Request-scoped slot resolution and reservation for every coach.
///
/// The engine keeps no mutable state of its own; each call reads fresh
/// rules and bookings from the stores. Slot resolution lives in
/// [`crate::resolver`] and reservation in [`crate::reservation`].
#[derive(Clone)]
pub struct SlotEngine {
    pub(crate) rules: Arc<dyn AvailabilityStore>,
    pub(crate) bookings: Arc<dyn BookingStore>,
    pub(crate) timezone: Tz,
    pub(crate) commit_timeout: Duration,
}

impl SlotEngine {
    pub fn new(rules: Arc<dyn AvailabilityStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self {
            rules,
            bookings,
            timezone: Tz::UTC,
            commit_timeout: DEFAULT_COMMIT_TIMEOUT,
        }
    }

    /// Time zone the weekly rules' wall-clock times are read in.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_commit_timeout(mut self, commit_timeout: Duration) -> Self {
        self.commit_timeout = commit_timeout;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Validates and stores a coach's weekly rules, returning everything now
    /// stored for the coach ordered by day.
    pub async fn save_availability(
        &self,
        coach_id: Uuid,
        rules: Vec<AvailabilityRule>,
    ) -> SlotResult<Vec<AvailabilityRule>> {
        crate::validation::validate_weekly_rules(coach_id, &rules)?;
        let mut stored = self.rules.upsert_availability_rules(coach_id, rules).await?;
        stored.sort_by_key(|rule| rule.day_of_week);
        Ok(stored)
    }

    pub async fn availability(&self, coach_id: Uuid) -> SlotResult<Vec<AvailabilityRule>> {
        let mut rules = self.rules.fetch_availability_rules(coach_id).await?;
        rules.sort_by_key(|rule| rule.day_of_week);
        Ok(rules)
    }

    /// Bookings at or after `now`, earliest first.
    pub async fn upcoming_bookings(
        &self,
        coach_id: Uuid,
        now: DateTime<Utc>,
    ) -> SlotResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .fetch_bookings(coach_id)
            .await?
            .into_iter()
            .filter(|booking| booking.booking_time >= now)
            .collect();
        bookings.sort_by_key(|booking| booking.booking_time);
        Ok(bookings)
    }
}

//! # Availability Resolver
//!
//! Marks each generated candidate as free or taken. A booking takes a
//! candidate only when its `booking_time` is the same instant to the second;
//! bookings are single generated start times, not intervals, so no overlap
//! arithmetic is done. Booked instants go into a set once and each
//! candidate is then classified in constant time.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    engine::SlotEngine, errors::SlotResult, models::time_slot::TimeSlot, slots::generate_candidates,
};

/// Annotates `candidates`, keeping their order.
pub fn resolve_availability(
    candidates: &[DateTime<Utc>],
    booked_times: &[DateTime<Utc>],
) -> Vec<TimeSlot> {
    let booked: HashSet<i64> = booked_times.iter().map(DateTime::timestamp).collect();
    candidates
        .iter()
        .map(|&time| TimeSlot {
            time,
            available: !booked.contains(&time.timestamp()),
        })
        .collect()
}

impl SlotEngine {
    /// Offerable slots for `coach_id` over the horizon starting at `now`.
    ///
    /// A store failure on either read is returned as an error rather than an
    /// empty list, so "fully booked" and "store down" stay distinguishable.
    pub async fn resolve_slots(&self, coach_id: Uuid, now: DateTime<Utc>) -> SlotResult<Vec<TimeSlot>> {
        let (rules, booked_times) = tokio::try_join!(
            self.rules.fetch_availability_rules(coach_id),
            self.bookings.fetch_booked_times(coach_id),
        )?;

        let local_now = now.with_timezone(&self.timezone);
        let candidates: Vec<DateTime<Utc>> = generate_candidates(&rules, &local_now)
            .into_iter()
            .map(|instant| instant.with_timezone(&Utc))
            .collect();

        tracing::debug!(
            %coach_id,
            rules = rules.len(),
            bookings = booked_times.len(),
            candidates = candidates.len(),
            "resolved slots"
        );

        Ok(resolve_availability(&candidates, &booked_times))
    }
}

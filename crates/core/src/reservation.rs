//! # Booking Reservation
//!
//! A single attempt moves `Selecting → Submitting → {Confirmed | Conflict | Failed}`:
//!
//! - **Confirmed**: the insert succeeded and the booking is returned.
//! - **Conflict**: [`SlotError::Conflict`] from the store's uniqueness
//!   constraint on `(coach_id, booking_time)`, or [`SlotError::StaleSelection`]
//!   when the chosen time is no longer offered. The client re-resolves and
//!   picks again.
//! - **Failed**: [`SlotError::Retrieval`]; the same request may be retried.
//!
//! Slots are not held while the client talks to the intake agent, so there
//! is a window between seeing a slot and submitting it. The uniqueness
//! constraint is the only guard inside that window.

use chrono::{DateTime, Utc};
use eyre::eyre;
use tracing::{info, warn};

use crate::{
    engine::SlotEngine,
    errors::{SlotError, SlotResult},
    models::booking::{Booking, NewBooking, ReserveRequest},
    validation::validate_client,
};

impl SlotEngine {
    /// Books `request.chosen_time`, re-deriving the coach's slots at `now`
    /// first instead of trusting the submitted timestamp.
    pub async fn reserve(&self, request: ReserveRequest, now: DateTime<Utc>) -> SlotResult<Booking> {
        validate_client(&request.client_name, &request.client_email)?;

        let slots = self.resolve_slots(request.coach_id, now).await?;
        match slots.iter().find(|slot| slot.time == request.chosen_time) {
            None => {
                return Err(SlotError::StaleSelection(format!(
                    "{} is not an offered slot for coach {}",
                    request.chosen_time, request.coach_id
                )));
            }
            Some(slot) if !slot.available => {
                return Err(SlotError::StaleSelection(format!(
                    "{} has already been booked",
                    request.chosen_time
                )));
            }
            Some(_) => {}
        }

        let new_booking = NewBooking {
            coach_id: request.coach_id,
            client_name: request.client_name.trim().to_string(),
            client_email: request.client_email.trim().to_string(),
            booking_time: request.chosen_time,
            transcript: request.transcript,
        };

        let outcome = match tokio::time::timeout(
            self.commit_timeout,
            self.bookings.insert_booking(new_booking.clone()),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    coach_id = %new_booking.coach_id,
                    booking_time = %new_booking.booking_time,
                    "booking insert timed out after {:?}; reconciling",
                    self.commit_timeout
                );
                self.reconcile(&new_booking).await
            }
        };

        match &outcome {
            Ok(booking) => info!(
                booking_id = %booking.id,
                coach_id = %booking.coach_id,
                booking_time = %booking.booking_time,
                "booking confirmed"
            ),
            Err(SlotError::Conflict(reason)) => warn!(
                coach_id = %new_booking.coach_id,
                booking_time = %new_booking.booking_time,
                "booking conflict: {}",
                reason
            ),
            Err(e) => warn!(coach_id = %new_booking.coach_id, "booking failed: {}", e),
        }

        outcome
    }

    /// Settles an insert whose outcome is unknown by reading back what the
    /// store holds for the chosen instant.
    async fn reconcile(&self, attempted: &NewBooking) -> SlotResult<Booking> {
        let bookings = self.bookings.fetch_bookings(attempted.coach_id).await?;
        let holder = bookings
            .into_iter()
            .find(|booking| booking.booking_time.timestamp() == attempted.booking_time.timestamp());

        match holder {
            Some(booking) if booking.client_email.eq_ignore_ascii_case(&attempted.client_email) => {
                Ok(booking)
            }
            Some(_) => Err(SlotError::Conflict(format!(
                "{} was booked by another client",
                attempted.booking_time
            ))),
            None => Err(SlotError::Retrieval(eyre!(
                "booking commit timed out and no booking was recorded for {}",
                attempted.booking_time
            ))),
        }
    }
}

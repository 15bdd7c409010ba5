use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coachslot_core::{
    SlotResult,
    models::{
        availability::AvailabilityRule,
        booking::{Booking, NewBooking},
    },
    store::{AvailabilityStore, BookingStore},
};
use mockall::mock;
use uuid::Uuid;

// Mock repositories for testing
mock! {
    pub AvailabilityRepo {}

    #[async_trait]
    impl AvailabilityStore for AvailabilityRepo {
        async fn fetch_availability_rules(
            &self,
            coach_id: Uuid,
        ) -> SlotResult<Vec<AvailabilityRule>>;

        async fn upsert_availability_rules(
            &self,
            coach_id: Uuid,
            rules: Vec<AvailabilityRule>,
        ) -> SlotResult<Vec<AvailabilityRule>>;
    }
}

mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingStore for BookingRepo {
        async fn fetch_booked_times(
            &self,
            coach_id: Uuid,
        ) -> SlotResult<Vec<DateTime<Utc>>>;

        async fn fetch_bookings(
            &self,
            coach_id: Uuid,
        ) -> SlotResult<Vec<Booking>>;

        async fn insert_booking(
            &self,
            booking: NewBooking,
        ) -> SlotResult<Booking>;
    }
}

#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use coachslot_core::{
    SlotEngine, SlotError, SlotResult,
    models::{
        availability::AvailabilityRule,
        booking::{Booking, NewBooking},
    },
    store::{AvailabilityStore, BookingStore},
};
use uuid::Uuid;

/// How `insert_booking` behaves, so commit timeouts can be provoked.
#[derive(Debug, Clone)]
pub enum InsertBehavior {
    Normal,
    /// Writes the row, then never acknowledges within the test's patience.
    CommitThenStall(Duration),
    /// Stalls before writing anything.
    StallWithoutCommit(Duration),
    /// Another client's row lands, then the caller's insert stalls.
    OtherClientWinsThenStall(Duration),
}

/// In-process store with the same uniqueness rule as the real schema.
/// Every call yields once so concurrent callers interleave at the same
/// points a network round trip would.
pub struct MemoryStore {
    pub rules: Mutex<Vec<AvailabilityRule>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub fail_rules: Mutex<bool>,
    pub fail_bookings: Mutex<bool>,
    pub insert_behavior: Mutex<InsertBehavior>,
}

impl MemoryStore {
    pub fn new(rules: Vec<AvailabilityRule>) -> Arc<Self> {
        Arc::new(Self {
            rules: Mutex::new(rules),
            bookings: Mutex::new(Vec::new()),
            fail_rules: Mutex::new(false),
            fail_bookings: Mutex::new(false),
            insert_behavior: Mutex::new(InsertBehavior::Normal),
        })
    }

    pub fn seed_booking(&self, coach_id: Uuid, booking_time: DateTime<Utc>, email: &str) {
        self.bookings.lock().unwrap().push(Booking {
            id: Uuid::new_v4(),
            coach_id,
            client_name: "Seeded Client".to_string(),
            client_email: email.to_string(),
            booking_time,
            transcript: Default::default(),
            created_at: Utc::now(),
        });
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    fn write(&self, booking: NewBooking) -> SlotResult<Booking> {
        let mut bookings = self.bookings.lock().unwrap();
        if bookings
            .iter()
            .any(|b| b.coach_id == booking.coach_id && b.booking_time == booking.booking_time)
        {
            return Err(SlotError::Conflict(format!(
                "duplicate key (coach_id, booking_time) = ({}, {})",
                booking.coach_id, booking.booking_time
            )));
        }
        let stored = Booking {
            id: Uuid::new_v4(),
            coach_id: booking.coach_id,
            client_name: booking.client_name,
            client_email: booking.client_email,
            booking_time: booking.booking_time,
            transcript: booking.transcript,
            created_at: Utc::now(),
        };
        bookings.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl AvailabilityStore for MemoryStore {
    async fn fetch_availability_rules(&self, coach_id: Uuid) -> SlotResult<Vec<AvailabilityRule>> {
        tokio::task::yield_now().await;
        if *self.fail_rules.lock().unwrap() {
            return Err(SlotError::Retrieval(eyre::eyre!("rules table unreachable")));
        }
        Ok(self
            .rules
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.coach_id == coach_id)
            .cloned()
            .collect())
    }

    async fn upsert_availability_rules(
        &self,
        coach_id: Uuid,
        rules: Vec<AvailabilityRule>,
    ) -> SlotResult<Vec<AvailabilityRule>> {
        tokio::task::yield_now().await;
        let mut stored = self.rules.lock().unwrap();
        for rule in rules {
            stored.retain(|r| !(r.coach_id == coach_id && r.day_of_week == rule.day_of_week));
            stored.push(rule);
        }
        Ok(stored.iter().filter(|r| r.coach_id == coach_id).cloned().collect())
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn fetch_booked_times(&self, coach_id: Uuid) -> SlotResult<Vec<DateTime<Utc>>> {
        Ok(self
            .fetch_bookings(coach_id)
            .await?
            .into_iter()
            .map(|b| b.booking_time)
            .collect())
    }

    async fn fetch_bookings(&self, coach_id: Uuid) -> SlotResult<Vec<Booking>> {
        tokio::task::yield_now().await;
        if *self.fail_bookings.lock().unwrap() {
            return Err(SlotError::Retrieval(eyre::eyre!("bookings table unreachable")));
        }
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.coach_id == coach_id)
            .cloned()
            .collect())
    }

    async fn insert_booking(&self, booking: NewBooking) -> SlotResult<Booking> {
        tokio::task::yield_now().await;
        let behavior = self.insert_behavior.lock().unwrap().clone();
        match behavior {
            InsertBehavior::Normal => self.write(booking),
            InsertBehavior::CommitThenStall(stall) => {
                let stored = self.write(booking)?;
                tokio::time::sleep(stall).await;
                Ok(stored)
            }
            InsertBehavior::StallWithoutCommit(stall) => {
                tokio::time::sleep(stall).await;
                self.write(booking)
            }
            InsertBehavior::OtherClientWinsThenStall(stall) => {
                let other = NewBooking {
                    client_name: "Other Client".to_string(),
                    client_email: "other@example.com".to_string(),
                    ..booking.clone()
                };
                self.write(other)?;
                tokio::time::sleep(stall).await;
                self.write(booking)
            }
        }
    }
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn engine_for(store: &Arc<MemoryStore>) -> SlotEngine {
    SlotEngine::new(store.clone(), store.clone())
}

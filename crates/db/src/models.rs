use chrono::{DateTime, NaiveTime, Utc};
use coachslot_core::models::{
    availability::AvailabilityRule,
    booking::{Booking, Transcript},
};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailabilityRule {
    pub coach_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TryFrom<DbAvailabilityRule> for AvailabilityRule {
    type Error = eyre::Report;

    fn try_from(row: DbAvailabilityRule) -> Result<Self> {
        let day_of_week = u8::try_from(row.day_of_week)
            .ok()
            .filter(|day| *day <= 6)
            .ok_or_else(|| eyre!("stored day_of_week {} is out of range", row.day_of_week))?;
        Ok(AvailabilityRule::new(
            row.coach_id,
            day_of_week,
            row.start_time,
            row.end_time,
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub coach_id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub booking_time: DateTime<Utc>,
    pub transcript: Json<Transcript>,
    pub created_at: DateTime<Utc>,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Self {
            id: row.id,
            coach_id: row.coach_id,
            client_name: row.client_name,
            client_email: row.client_email,
            booking_time: row.booking_time,
            transcript: row.transcript.0,
            created_at: row.created_at,
        }
    }
}

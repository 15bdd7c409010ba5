use crate::models::DbBooking;
use chrono::{DateTime, Utc};
use coachslot_core::models::booking::NewBooking;
use eyre::Result;
use sqlx::{Pool, Postgres, types::Json};
use uuid::Uuid;

/// Result of an insert that may lose the race for its slot.
#[derive(Debug)]
pub enum InsertOutcome {
    Inserted(DbBooking),
    /// `(coach_id, booking_time)` already exists.
    Duplicate,
}

pub async fn create_booking(pool: &Pool<Postgres>, booking: &NewBooking) -> Result<InsertOutcome> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let inserted = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, coach_id, client_name, client_email, booking_time, transcript, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, coach_id, client_name, client_email, booking_time, transcript, created_at
        "#,
    )
    .bind(id)
    .bind(booking.coach_id)
    .bind(&booking.client_name)
    .bind(&booking.client_email)
    .bind(booking.booking_time)
    .bind(Json(&booking.transcript))
    .bind(now)
    .fetch_one(pool)
    .await;

    match inserted {
        Ok(row) => {
            tracing::debug!("Booking created: id={}, coach_id={}", row.id, row.coach_id);
            Ok(InsertOutcome::Inserted(row))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::debug!(
                "Booking insert hit existing slot: coach_id={}, booking_time={}",
                booking.coach_id,
                booking.booking_time
            );
            Ok(InsertOutcome::Duplicate)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get_bookings_by_coach_id(
    pool: &Pool<Postgres>,
    coach_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, coach_id, client_name, client_email, booking_time, transcript, created_at
        FROM bookings
        WHERE coach_id = $1
        ORDER BY booking_time ASC
        "#,
    )
    .bind(coach_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_booking_times_by_coach_id(
    pool: &Pool<Postgres>,
    coach_id: Uuid,
) -> Result<Vec<DateTime<Utc>>> {
    let times = sqlx::query_scalar::<_, DateTime<Utc>>(
        r#"
        SELECT booking_time
        FROM bookings
        WHERE coach_id = $1
        "#,
    )
    .bind(coach_id)
    .fetch_all(pool)
    .await?;

    Ok(times)
}

use crate::models::DbAvailabilityRule;
use chrono::NaiveTime;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_rules_by_coach_id(
    pool: &Pool<Postgres>,
    coach_id: Uuid,
) -> Result<Vec<DbAvailabilityRule>> {
    let rules = sqlx::query_as::<_, DbAvailabilityRule>(
        r#"
        SELECT coach_id, day_of_week, start_time, end_time
        FROM availability_rules
        WHERE coach_id = $1
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(coach_id)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Fetched {} availability rules for coach {}", rules.len(), coach_id);
    Ok(rules)
}

/// Writes all windows in one transaction, replacing any existing window for
/// the same day.
pub async fn upsert_rules(
    pool: &Pool<Postgres>,
    coach_id: Uuid,
    windows: &[(i16, NaiveTime, NaiveTime)],
) -> Result<Vec<DbAvailabilityRule>> {
    let mut tx = pool.begin().await?;

    for (day_of_week, start_time, end_time) in windows {
        sqlx::query(
            r#"
            INSERT INTO availability_rules (coach_id, day_of_week, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (coach_id, day_of_week)
            DO UPDATE SET start_time = EXCLUDED.start_time, end_time = EXCLUDED.end_time
            "#,
        )
        .bind(coach_id)
        .bind(day_of_week)
        .bind(start_time)
        .bind(end_time)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::debug!("Upserted {} availability rules for coach {}", windows.len(), coach_id);

    get_rules_by_coach_id(pool, coach_id).await
}

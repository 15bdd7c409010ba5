use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SlotError, SlotResult};

/// A coach's recurring open-hours window for one day of the week.
///
/// `day_of_week` counts from Sunday (`0`) to Saturday (`6`). Times are
/// wall-clock times in the schedule's time zone and travel over the wire
/// as `"HH:MM"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub coach_id: Uuid,
    pub day_of_week: u8,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl AvailabilityRule {
    pub fn new(coach_id: Uuid, day_of_week: u8, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            coach_id,
            day_of_week,
            start_time,
            end_time,
        }
    }

    /// Whether the rule applies to the given calendar weekday.
    pub fn applies_to(&self, weekday: Weekday) -> bool {
        u32::from(self.day_of_week) == weekday.num_days_from_sunday()
    }

    /// A rule whose window is empty or inverted produces no slots.
    pub fn has_open_window(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn validate(&self) -> SlotResult<()> {
        if self.day_of_week > 6 {
            return Err(SlotError::Validation(format!(
                "day_of_week must be between 0 and 6, got {}",
                self.day_of_week
            )));
        }
        if !self.has_open_window() {
            return Err(SlotError::Validation(format!(
                "start_time {} must be before end_time {} (day {})",
                self.start_time.format("%H:%M"),
                self.end_time.format("%H:%M"),
                self.day_of_week
            )));
        }
        Ok(())
    }
}

/// Body of a coach's weekly availability update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyAvailabilityRequest {
    pub days: Vec<DayWindow>,
}

/// One day's window inside a [`WeeklyAvailabilityRequest`]; the coach is
/// implied by the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayWindow {
    pub day_of_week: u8,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl DayWindow {
    pub fn into_rule(self, coach_id: Uuid) -> AvailabilityRule {
        AvailabilityRule::new(coach_id, self.day_of_week, self.start_time, self.end_time)
    }
}

/// Serde adapter for `"HH:MM"` wall-clock times. Seconds are accepted on
/// input and dropped on output.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| D::Error::custom(format!("invalid time {raw:?}: {e}")))
    }
}

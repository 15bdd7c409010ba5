use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate start time annotated with whether it is still free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: DateTime<Utc>,
    pub available: bool,
}

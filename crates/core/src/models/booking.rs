use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
}

/// The intake conversation, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(pub Vec<Message>);

impl Transcript {
    pub fn new(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub coach_id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub booking_time: DateTime<Utc>,
    pub transcript: Transcript,
    pub created_at: DateTime<Utc>,
}

/// Insert payload handed to the booking store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub coach_id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub booking_time: DateTime<Utc>,
    pub transcript: Transcript,
}

/// A client's request to book `chosen_time` with a coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReserveRequest {
    pub coach_id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub chosen_time: DateTime<Utc>,
    #[serde(default)]
    pub transcript: Transcript,
}

/// HTTP body for a reservation; the coach comes from the route and the
/// client details may be recovered from the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub booking_time: DateTime<Utc>,
    #[serde(default)]
    pub transcript: Transcript,
}

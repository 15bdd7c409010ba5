//! Recovers the client details the intake agent announces when it is done.
//!
//! The agent finishes with an assistant message of the form
//! `... INTAKE_COMPLETE::{"name": "...", "email": "..."}`. Anything after the
//! marker that is not a JSON object (or has no object at all) means the
//! intake is still running.

use serde::{Deserialize, Serialize};

use crate::models::booking::{Role, Transcript};

pub const COMPLETION_MARKER: &str = "INTAKE_COMPLETE::";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeDetails {
    pub name: String,
    pub email: String,
}

/// Parses the completion payload out of a single assistant message.
pub fn parse_completion(content: &str) -> Option<IntakeDetails> {
    let marker_at = content.find(COMPLETION_MARKER)?;
    let payload = &content[marker_at + COMPLETION_MARKER.len()..];
    let open = payload.find('{')?;
    let close = payload.rfind('}')?;
    if close < open {
        return None;
    }
    match serde_json::from_str(&payload[open..=close]) {
        Ok(details) => Some(details),
        Err(e) => {
            tracing::debug!("intake completion marker with unparsable payload: {}", e);
            None
        }
    }
}

/// The intake is complete only while the assistant has the last word; a user
/// message after the marker reopens the conversation.
pub fn completed_details(transcript: &Transcript) -> Option<IntakeDetails> {
    transcript
        .last_message()
        .filter(|m| m.role == Role::Assistant)
        .and_then(|m| parse_completion(&m.content))
}

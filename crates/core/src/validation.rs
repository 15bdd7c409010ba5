use std::collections::HashSet;

use uuid::Uuid;

use crate::errors::{SlotError, SlotResult};
use crate::models::availability::AvailabilityRule;

/// Checks a batch of rules before it replaces a coach's week.
pub fn validate_weekly_rules(coach_id: Uuid, rules: &[AvailabilityRule]) -> SlotResult<()> {
    let mut seen_days = HashSet::new();
    for rule in rules {
        if rule.coach_id != coach_id {
            return Err(SlotError::Validation(format!(
                "rule for day {} belongs to coach {}, not {}",
                rule.day_of_week, rule.coach_id, coach_id
            )));
        }
        rule.validate()?;
        if !seen_days.insert(rule.day_of_week) {
            return Err(SlotError::Validation(format!(
                "more than one rule for day {}",
                rule.day_of_week
            )));
        }
    }
    Ok(())
}

pub fn validate_client(client_name: &str, client_email: &str) -> SlotResult<()> {
    if client_name.trim().is_empty() {
        return Err(SlotError::Validation("client name must not be empty".to_string()));
    }
    let email = client_email.trim();
    if email.is_empty() {
        return Err(SlotError::Validation("client email must not be empty".to_string()));
    }
    if !email.contains('@') {
        return Err(SlotError::Validation(format!(
            "client email {email:?} is not an email address"
        )));
    }
    Ok(())
}

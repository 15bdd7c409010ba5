//! # Slot Generator
//!
//! Expands a coach's weekly rules into the concrete start times offered over
//! the booking horizon.
//!
//! Each calendar day of the horizon is generated on its own and the days are
//! concatenated in order, so the output is chronological without sorting:
//!
//! 1. Find the first rule whose `day_of_week` matches the date. No rule means
//!    no slots for that date.
//! 2. Walk the local wall clock from `start_time` in one-hour steps while the
//!    step is still before `end_time`. The minute part of `start_time` is kept,
//!    and a final step that starts before `end_time` is emitted even if the
//!    hour would run past it: a slot is a start time, not an interval.
//! 3. Keep only instants strictly after `now`.
//!
//! Local times that fall into a daylight-saving gap do not exist and are
//! skipped; ambiguous ones resolve to the earlier instant.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use tracing::warn;

use crate::models::availability::AvailabilityRule;

/// Number of calendar days, starting with today, that slots are offered for.
pub const HORIZON_DAYS: u64 = 7;

/// Distance between consecutive slot starts.
pub fn slot_step() -> TimeDelta {
    TimeDelta::hours(1)
}

/// The first rule covering `date`'s weekday, if any.
pub fn rule_for_date(rules: &[AvailabilityRule], date: NaiveDate) -> Option<&AvailabilityRule> {
    let weekday = date.weekday();
    rules.iter().find(|rule| rule.applies_to(weekday))
}

/// Local start times a rule opens on `date`, before any past-time filtering.
pub fn local_starts(rule: &AvailabilityRule, date: NaiveDate) -> Vec<NaiveDateTime> {
    if !rule.has_open_window() {
        warn!(
            coach_id = %rule.coach_id,
            day_of_week = rule.day_of_week,
            "skipping availability rule with start {} not before end {}",
            rule.start_time,
            rule.end_time,
        );
        return Vec::new();
    }

    let end = date.and_time(rule.end_time);
    let step = slot_step();
    std::iter::successors(Some(date.and_time(rule.start_time)), |current| {
        current.checked_add_signed(step)
    })
    .take_while(|current| *current < end)
    .collect()
}

/// Candidate instants for a single calendar date.
pub fn candidates_for_date<Tz: TimeZone>(
    rules: &[AvailabilityRule],
    date: NaiveDate,
    now: &DateTime<Tz>,
) -> Vec<DateTime<Tz>> {
    let Some(rule) = rule_for_date(rules, date) else {
        return Vec::new();
    };

    let tz = now.timezone();
    local_starts(rule, date)
        .into_iter()
        .filter_map(|local| tz.from_local_datetime(&local).earliest())
        .filter(|instant| instant > now)
        .collect()
}

/// Candidate instants for the whole horizon starting at `now`'s local date.
pub fn generate_candidates<Tz: TimeZone>(
    rules: &[AvailabilityRule],
    now: &DateTime<Tz>,
) -> Vec<DateTime<Tz>> {
    let today = now.date_naive();
    (0..HORIZON_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .flat_map(|date| candidates_for_date(rules, date, now))
        .collect()
}

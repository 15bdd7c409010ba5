use axum::http::StatusCode;
use coachslot_core::{
    SlotError,
    models::booking::{Booking, Message, Role},
};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, monday_at, stored_booking};
use coachslot_core::models::booking::NewBooking;

fn intake_transcript() -> Vec<Message> {
    vec![
        Message {
            id: "1".to_string(),
            role: Role::Assistant,
            content: "Hi! I'm your AI assistant. To start, what's your full name?".to_string(),
        },
        Message {
            id: "1718006400000".to_string(),
            role: Role::User,
            content: "Jane Doe, jane@example.com, I want to run a marathon".to_string(),
        },
        Message {
            id: "1718006405000".to_string(),
            role: Role::Assistant,
            content: r#"Great! INTAKE_COMPLETE:: {"name": "Jane Doe", "email": "jane@example.com"}"#
                .to_string(),
        },
    ]
}

#[test_log::test(tokio::test)]
async fn test_create_booking_confirms_free_slot() {
    let mut ctx = TestContext::new()
        .with_monday_rule()
        .with_booked_times(Vec::new());
    ctx.booking_repo
        .expect_insert_booking()
        .times(1)
        .returning(|new_booking| Ok(stored_booking(new_booking)));
    let coach_id = ctx.coach_id;
    let server = ctx.server();
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    let response = server
        .post(&format!("/api/coaches/{coach_id}/bookings"))
        .json(&json!({
            "client_name": name,
            "client_email": email,
            "booking_time": monday_at(11),
            "transcript": [],
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let booking: Booking = response.json();
    assert_eq!(booking.coach_id, coach_id);
    assert_eq!(booking.client_name, name);
    assert_eq!(booking.client_email, email);
    assert_eq!(booking.booking_time, monday_at(11));
}

#[test_log::test(tokio::test)]
async fn test_create_booking_fills_client_details_from_intake() {
    let mut ctx = TestContext::new()
        .with_monday_rule()
        .with_booked_times(Vec::new());
    ctx.booking_repo
        .expect_insert_booking()
        .withf(|b| b.client_name == "Jane Doe" && b.client_email == "jane@example.com")
        .times(1)
        .returning(|new_booking| Ok(stored_booking(new_booking)));
    let coach_id = ctx.coach_id;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/coaches/{coach_id}/bookings"))
        .json(&json!({
            "booking_time": monday_at(9),
            "transcript": intake_transcript(),
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let booking: Booking = response.json();
    assert_eq!(booking.transcript.messages().len(), 3);
}

#[tokio::test]
async fn test_create_booking_without_client_details_is_400() {
    let mut ctx = TestContext::new();
    ctx.booking_repo.expect_insert_booking().never();
    let coach_id = ctx.coach_id;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/coaches/{coach_id}/bookings"))
        .json(&json!({ "booking_time": monday_at(9) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[rstest]
#[case::taken_between_listing_and_submit(
    || SlotError::Conflict("duplicate key".to_string()),
    StatusCode::CONFLICT,
    false
)]
#[case::store_down_on_insert(
    || SlotError::Retrieval(eyre::eyre!("connection reset")),
    StatusCode::SERVICE_UNAVAILABLE,
    true
)]
#[tokio::test]
async fn test_create_booking_insert_failures(
    #[case] insert_error: fn() -> SlotError,
    #[case] expected_status: StatusCode,
    #[case] expected_retryable: bool,
) {
    let mut ctx = TestContext::new()
        .with_monday_rule()
        .with_booked_times(Vec::new());
    ctx.booking_repo
        .expect_insert_booking()
        .times(1)
        .returning(move |_| Err(insert_error()));
    let coach_id = ctx.coach_id;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/coaches/{coach_id}/bookings"))
        .json(&json!({
            "client_name": "Jane Doe",
            "client_email": "jane@example.com",
            "booking_time": monday_at(10),
        }))
        .await;

    response.assert_status(expected_status);
    let body: Value = response.json();
    assert_eq!(body["retryable"], Value::Bool(expected_retryable));
}

#[test_log::test(tokio::test)]
async fn test_create_booking_for_already_booked_slot_is_409_without_insert() {
    let mut ctx = TestContext::new()
        .with_monday_rule()
        .with_booked_times(vec![monday_at(10)]);
    ctx.booking_repo.expect_insert_booking().never();
    let coach_id = ctx.coach_id;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/coaches/{coach_id}/bookings"))
        .json(&json!({
            "client_name": "Jane Doe",
            "client_email": "jane@example.com",
            "booking_time": monday_at(10),
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[test_log::test(tokio::test)]
async fn test_list_bookings_returns_upcoming_in_order() {
    let mut ctx = TestContext::new();
    let coach_id = ctx.coach_id;
    let booking_at = move |hour: u32, email: &str| {
        stored_booking(NewBooking {
            coach_id,
            client_name: "Client".to_string(),
            client_email: email.to_string(),
            booking_time: monday_at(hour),
            transcript: Default::default(),
        })
    };
    let stored = vec![
        booking_at(11, "late@example.com"),
        booking_at(7, "past@example.com"),
        booking_at(9, "early@example.com"),
    ];
    ctx.booking_repo
        .expect_fetch_bookings()
        .with(predicate::eq(coach_id))
        .times(1)
        .returning(move |_| Ok(stored.clone()));
    let server = ctx.server();

    let response = server.get(&format!("/api/coaches/{coach_id}/bookings")).await;

    response.assert_status_ok();
    let bookings: Vec<Booking> = response.json();
    let emails: Vec<_> = bookings.iter().map(|b| b.client_email.as_str()).collect();
    assert_eq!(emails, vec!["early@example.com", "late@example.com"]);
}

#[tokio::test]
async fn test_create_booking_with_malformed_body_is_json_400() {
    let mut ctx = TestContext::new();
    ctx.booking_repo.expect_insert_booking().never();
    let coach_id = ctx.coach_id;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/coaches/{coach_id}/bookings"))
        .json(&json!({ "client_name": "Jane Doe", "booking_time": "next tuesday" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some_and(|e| e.starts_with("Validation error")));
    assert_eq!(body["retryable"], Value::Bool(false));
}

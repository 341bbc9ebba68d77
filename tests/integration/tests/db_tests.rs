//! End-to-end tests against PostgreSQL
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Mail delivery is always log-only here. Each test skips itself when
//! DATABASE_URL is not set.
//!
//! Run with: cargo test -p integration-tests --test db_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, date_from_today, ErrorBody, ReadinessBody,
    ReservationCreated, ReservationPayload, TestServer,
};
use reqwest::StatusCode;
use reservation_core::{EventType, ReservationId, ReservationType};

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.checks.database, "healthy");
    assert_eq!(body.checks.mail, "disabled");
}

#[tokio::test]
async fn test_submission_is_stored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = ReservationPayload::table();

    let response = server
        .post("/api/v1/reservations", &payload)
        .await
        .expect("Request failed");
    let created: ReservationCreated = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(created.success);
    // Log-only mailer: nothing was actually sent
    assert!(!created.email_sent);

    let id: ReservationId = created.reservation_id.parse().unwrap();
    let stored = server
        .state
        .service_context()
        .reservation_repo()
        .find_by_id(id)
        .await
        .unwrap()
        .expect("reservation should be stored");

    assert_eq!(Some(stored.name), payload.name);
    assert_eq!(stored.email.as_str(), payload.email.unwrap());
    assert_eq!(stored.reservation_type, ReservationType::Table);
    assert_eq!(stored.guests.get(), 4);
    assert!(stored.event.is_none());
}

#[tokio::test]
async fn test_event_submission_is_stored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/reservation", &ReservationPayload::event())
        .await
        .expect("Request failed");
    let created: ReservationCreated = assert_json(response, StatusCode::OK).await.unwrap();

    let id: ReservationId = created.reservation_id.parse().unwrap();
    let stored = server
        .state
        .service_context()
        .reservation_repo()
        .find_by_id(id)
        .await
        .unwrap()
        .expect("reservation should be stored");

    let event = stored.event.expect("event details");
    assert_eq!(event.event_type, Some(EventType::Birthday));
    assert_eq!(event.attendees.map(|a| a.get()), Some(45));
}

#[tokio::test]
async fn test_past_date_is_not_stored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/reservations",
            &ReservationPayload::table().with_date(date_from_today(-1)),
        )
        .await
        .expect("Request failed");
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.code, "DATE_IN_PAST");
}

#[tokio::test]
async fn test_form_page() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

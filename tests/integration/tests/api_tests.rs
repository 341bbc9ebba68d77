//! API Integration Tests
//!
//! Drive the complete router (extractors, middleware, error rendering,
//! service pipeline) in-process against in-memory ports. No external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use integration_tests::{
    config_with, date_from_today, ErrorBody, Failure, InMemoryReservationRepository,
    ReadinessBody, RecordingNotifier, ReservationCreated, ReservationPayload, TestApp,
};
use reservation_common::Locale;
use reservation_core::{EventType, ReservationId};
use std::time::Duration;

const INTAKE: &str = "/api/v1/reservations";

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_table_reservation() {
    let app = TestApp::new();

    let response = app.post_json(INTAKE, &ReservationPayload::table()).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());

    let body: ReservationCreated = response.json();
    assert!(body.success);
    assert!(body.email_sent);
    assert_eq!(body.message, Locale::Es.messages().reservation_submitted);

    let rows = app.repo.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.to_string(), body.reservation_id);
    assert!(rows[0].event.is_none());

    let id: ReservationId = body.reservation_id.parse().unwrap();
    assert_eq!(app.notifier.sent(), vec![id]);
}

#[tokio::test]
async fn test_submit_event_reservation() {
    let app = TestApp::new();

    let response = app.post_json(INTAKE, &ReservationPayload::event()).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());

    let rows = app.repo.rows();
    assert_eq!(rows.len(), 1);
    let event = rows[0].event.as_ref().unwrap();
    assert_eq!(event.attendees.map(|a| a.get()), Some(45));
}

#[tokio::test]
async fn test_unlisted_event_type_is_kept() {
    let app = TestApp::new();
    let payload = ReservationPayload {
        event_type: Some("Quinceañera".to_string()),
        ..ReservationPayload::event()
    };

    let response = app.post_json(INTAKE, &payload).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());

    let rows = app.repo.rows();
    let event = rows[0].event.as_ref().unwrap();
    assert_eq!(event.event_type, Some(EventType::Other));
    assert_eq!(event.custom_event_type.as_deref(), Some("Quinceañera"));
}

#[tokio::test]
async fn test_numeric_guests_are_accepted() {
    let app = TestApp::new();

    let mut body = serde_json::to_value(ReservationPayload::table()).unwrap();
    body["guests"] = serde_json::json!(6);

    let response = app.post_json(INTAKE, &body).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    assert_eq!(app.repo.rows()[0].guests.get(), 6);
}

#[tokio::test]
async fn test_legacy_path_is_mounted() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/reservation", &ReservationPayload::table())
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    assert_eq!(app.repo.rows().len(), 1);
}

#[tokio::test]
async fn test_english_response() {
    let app = TestApp::new();

    let body = serde_json::to_string(&ReservationPayload::table()).unwrap();
    let response = app
        .post_raw(INTAKE, &body, &[("accept-language", "en-US,en;q=0.9")])
        .await;

    let created: ReservationCreated = response.json();
    assert_eq!(created.message, Locale::En.messages().reservation_submitted);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post_json(INTAKE, &ReservationPayload::table().without_name())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Bad Request");
    assert_eq!(body.code, "MISSING_FIELDS");
    assert_eq!(body.message, Locale::Es.messages().missing_fields);
    assert_eq!(body.details.unwrap()["fields"], serde_json::json!(["name"]));

    assert_eq!(app.repo.create_calls(), 0);
    assert_eq!(app.notifier.calls(), 0);
}

#[tokio::test]
async fn test_empty_body_object_lists_every_required_field() {
    let app = TestApp::new();

    let response = app.post_raw(INTAKE, "{}", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(
        body.details.unwrap()["fields"],
        serde_json::json!(["name", "email", "date", "time", "guests", "reservationType"])
    );
}

#[tokio::test]
async fn test_past_date_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(INTAKE, &ReservationPayload::table().with_date(date_from_today(-2)))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.code, "DATE_IN_PAST");
    assert!(app.repo.rows().is_empty());
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(INTAKE, &ReservationPayload::table().with_email("not-an-email"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.code, "INVALID_EMAIL");
    assert!(app.repo.rows().is_empty());
}

#[tokio::test]
async fn test_unknown_reservation_type() {
    let app = TestApp::new();

    let response = app
        .post_json(INTAKE, &ReservationPayload::table().with_reservation_type("banquet"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.code, "INVALID_RESERVATION_TYPE");
}

#[tokio::test]
async fn test_invalid_json() {
    let app = TestApp::new();

    let response = app.post_raw(INTAKE, "{\"name\": ", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.code, "INVALID_REQUEST_FORMAT");
    assert_eq!(body.message, Locale::Es.messages().invalid_request);
    assert_eq!(app.repo.create_calls(), 0);
}

#[tokio::test]
async fn test_wrong_json_type() {
    let app = TestApp::new();

    let response = app
        .post_raw(INTAKE, "{\"name\": 42}", &[("accept-language", "en")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.code, "INVALID_REQUEST_FORMAT");
    assert_eq!(body.message, Locale::En.messages().invalid_request);
}

#[tokio::test]
async fn test_overlong_name_is_rejected() {
    let app = TestApp::new();

    let mut payload = ReservationPayload::table();
    payload.name = Some("x".repeat(101));

    let response = app.post_json(INTAKE, &payload).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.code, "VALIDATION_ERROR");
    assert!(body.details.unwrap().get("name").is_some());
}

// ============================================================================
// Failure Handling Tests
// ============================================================================

#[tokio::test]
async fn test_persistence_failure_returns_500_without_notifying() {
    let app = TestApp::with_ports(
        InMemoryReservationRepository::failing(Failure::Transient),
        RecordingNotifier::new(),
    );

    let response = app.post_json(INTAKE, &ReservationPayload::table()).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Internal Server Error");
    assert_eq!(body.code, "DATABASE_ERROR");
    assert_eq!(body.message, Locale::Es.messages().save_failed);

    assert_eq!(app.repo.create_calls(), 3);
    assert_eq!(app.notifier.calls(), 0);
}

#[tokio::test]
async fn test_permanent_persistence_failure_is_not_retried() {
    let app = TestApp::with_ports(
        InMemoryReservationRepository::failing(Failure::Permanent),
        RecordingNotifier::new(),
    );

    let response = app.post_json(INTAKE, &ReservationPayload::table()).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.repo.create_calls(), 1);
    assert_eq!(app.notifier.calls(), 0);
}

#[tokio::test]
async fn test_notification_failure_still_succeeds() {
    let app = TestApp::with_ports(
        InMemoryReservationRepository::new(),
        RecordingNotifier::failing(Failure::Transient),
    );

    let response = app.post_json(INTAKE, &ReservationPayload::table()).await;
    assert_eq!(response.status, StatusCode::OK);

    let body: ReservationCreated = response.json();
    assert!(body.success);
    assert!(!body.email_sent);
    assert_eq!(app.repo.rows().len(), 1);
    assert_eq!(app.notifier.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_mail_provider_still_answers_200() {
    // Each attempt hangs for the whole mail client timeout
    let config = config_with(&[]);
    let stall = Duration::from_secs(config.mail.timeout_secs);
    let app = TestApp::with_server_wiring(
        InMemoryReservationRepository::new(),
        RecordingNotifier::stalled(stall),
        config,
    );

    let response = app.post_json(INTAKE, &ReservationPayload::table()).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());

    let body: ReservationCreated = response.json();
    assert!(body.success);
    assert!(!body.email_sent);
    assert_eq!(app.repo.rows().len(), 1);
    assert_eq!(app.notifier.calls(), 3);
}

#[tokio::test]
async fn test_retry_attempts_follow_configuration() {
    let app = TestApp::with_config(
        InMemoryReservationRepository::failing(Failure::Transient),
        RecordingNotifier::new(),
        config_with(&[("RETRY_MAX_ATTEMPTS", "5")]),
    );

    let response = app.post_json(INTAKE, &ReservationPayload::table()).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.repo.create_calls(), 5);
}

// ============================================================================
// Method and CORS Tests
// ============================================================================

#[tokio::test]
async fn test_other_methods_are_not_allowed() {
    let app = TestApp::new();

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let request = Request::builder()
            .method(method.clone())
            .uri(INTAKE)
            .body(Body::empty())
            .unwrap();
        let response = app.send(request).await;

        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        let body: ErrorBody = response.json();
        assert_eq!(body.code, "METHOD_NOT_ALLOWED");
    }
    assert_eq!(app.repo.create_calls(), 0);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(INTAKE)
        .header(header::ORIGIN, "https://www.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert!(response.status.is_success());
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("access-control-max-age"), Some("86400"));

    let methods = response.header("access-control-allow-methods").unwrap();
    for method in ["POST", "OPTIONS", "GET"] {
        assert!(methods.contains(method), "{methods}");
    }

    let headers = response
        .header("access-control-allow-headers")
        .unwrap()
        .to_ascii_lowercase();
    for name in ["content-type", "authorization", "x-client-info", "origin"] {
        assert!(headers.contains(name), "{headers}");
    }
}

#[tokio::test]
async fn test_cors_configured_origins() {
    let app = TestApp::with_config(
        InMemoryReservationRepository::new(),
        RecordingNotifier::new(),
        config_with(&[("CORS_ALLOWED_ORIGINS", "https://casa.example.com")]),
    );

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(INTAKE)
        .header(header::ORIGIN, "https://casa.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        Some("https://casa.example.com")
    );
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    let request_id = response.header("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

// ============================================================================
// Form Page Tests
// ============================================================================

#[tokio::test]
async fn test_form_page_defaults_to_spanish() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .header("content-type")
        .unwrap()
        .starts_with("text/html"));

    let html = response.text();
    assert!(html.contains("<html lang=\"es\">"));
    assert!(html.contains(Locale::Es.messages().form_title));
    assert!(html.contains("Casa de Prueba"));
}

#[tokio::test]
async fn test_form_page_in_english() {
    let app = TestApp::new();

    let response = app.get("/reservations/new?lang=en").await;
    assert_eq!(response.status, StatusCode::OK);

    let html = response.text();
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains(Locale::En.messages().form_title));
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_ready() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;
    assert_eq!(response.status, StatusCode::OK);

    let body: ReadinessBody = response.json();
    assert_eq!(body.status, "ready");
    assert_eq!(body.checks.database, "healthy");
    assert_eq!(body.checks.mail, "recording");
}

#[tokio::test]
async fn test_health_not_ready_when_database_is_down() {
    let app = TestApp::with_ports(
        InMemoryReservationRepository::unreachable(),
        RecordingNotifier::new(),
    );

    let response = app.get("/health/ready").await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);

    let body: ReadinessBody = response.json();
    assert_eq!(body.status, "not_ready");
    assert_eq!(body.checks.database, "unhealthy");
}

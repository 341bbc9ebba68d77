//! Route definitions
//!
//! Reservation intake under /api, the form page at the root, and health
//! probes mounted separately.

use axum::{
    routing::{get, post, MethodRouter},
    Router,
};

use crate::handlers::{form, health, reservations};
use crate::state::AppState;

/// Create the main router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Form page routes
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(form::reservation_form))
        .route("/reservations/new", get(form::reservation_form))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/reservations", intake())
        // Path used by older copies of the form script
        .route("/reservation", intake())
}

/// POST only; every other method gets a JSON 405
fn intake() -> MethodRouter<AppState> {
    post(reservations::submit_reservation).fallback(reservations::method_not_allowed)
}

//! # reservation-api
//!
//! HTTP server built with Axum: reservation intake, the public form page,
//! and health probes.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_service_context, run, run_server};
pub use state::AppState;

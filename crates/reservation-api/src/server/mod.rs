//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reservation_common::{AppConfig, AppError};
use reservation_core::{ReservationNotifier, ReservationRepository};
use reservation_db::{create_pool, run_migrations, PgReservationRepository};
use reservation_mail::notifier_from_config;
use reservation_service::{RetryPolicy, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit, SUBMIT_DEADLINE};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    // Health probes stay outside the rate limiter
    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    let router = apply_middleware(router, &config.cors);

    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = reservation_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    // Create repository and notifier
    let reservation_repo = Arc::new(PgReservationRepository::new(pool));
    let notifier = notifier_from_config(&config.mail, &config.restaurant.name)
        .map_err(|e| AppError::Mail(e.to_string()))?;
    info!(notifier = notifier.kind(), "Mail notifier ready");

    let service_context = create_service_context(reservation_repo, notifier, &config)?;

    Ok(AppState::new(service_context, config))
}

/// Wire the ports into a service context using the configured policies
pub fn create_service_context(
    reservation_repo: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn ReservationNotifier>,
    config: &AppConfig,
) -> Result<ServiceContext, AppError> {
    ServiceContextBuilder::new()
        .reservation_repo(reservation_repo)
        .notifier(notifier)
        .retry_policy(RetryPolicy::from(&config.retry))
        .utc_offset(config.restaurant.offset())
        .submit_deadline(SUBMIT_DEADLINE)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;
    let local_addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {}", e)))?;

    info!("Server listening on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Resolve once Ctrl+C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}

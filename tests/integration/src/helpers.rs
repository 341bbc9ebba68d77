//! Test helpers for integration tests
//!
//! Provides an in-process harness around the full router, utilities for
//! spawning a database-backed server, and response assertions.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode as HttpStatus},
    Router,
};
use reqwest::{Client, Response, StatusCode};
use reservation_api::{create_app, create_app_state, create_service_context, AppState};
use reservation_common::AppConfig;
use reservation_service::{RetryPolicy, ServiceContext, ServiceContextBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use crate::mocks::{InMemoryReservationRepository, RecordingNotifier};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration that needs no environment, with `overrides` applied on top
pub fn config_with(overrides: &[(&str, &str)]) -> AppConfig {
    let mut vars: HashMap<String, String> = [
        ("APP_ENV", "development"),
        ("API_PORT", "0"),
        ("DATABASE_URL", "postgres://unused@localhost/unused"),
        ("MAIL_ADMIN_TO", "staff@example.com"),
        ("RESTAURANT_NAME", "Casa de Prueba"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (key, value) in overrides {
        vars.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("test configuration is valid")
}

/// Configuration for database-backed tests.
///
/// Reads the environment (and `.env`), fills in what a test run does not
/// care about, and never talks to the real mail API.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_lookup(|key| match key {
        "MAIL_API_KEY" => None,
        "API_PORT" => Some("0".to_string()),
        "MAIL_ADMIN_TO" => std::env::var(key).ok().or_else(|| Some("staff@example.com".to_string())),
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

// ============================================================================
// In-process harness
// ============================================================================

/// Full router wired to in-memory ports
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryReservationRepository>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    /// Healthy store and notifier
    pub fn new() -> Self {
        Self::with_ports(InMemoryReservationRepository::new(), RecordingNotifier::new())
    }

    /// Custom ports, default configuration
    pub fn with_ports(repo: InMemoryReservationRepository, notifier: RecordingNotifier) -> Self {
        Self::with_config(repo, notifier, config_with(&[]))
    }

    pub fn with_config(
        repo: InMemoryReservationRepository,
        notifier: RecordingNotifier,
        config: AppConfig,
    ) -> Self {
        let repo = Arc::new(repo);
        let notifier = Arc::new(notifier);

        let context = ServiceContextBuilder::new()
            .reservation_repo(repo.clone())
            .notifier(notifier.clone())
            .retry_policy(RetryPolicy::immediate(config.retry.max_attempts))
            .utc_offset(config.restaurant.offset())
            .build()
            .expect("all ports provided");

        Self::from_context(context, config, repo, notifier)
    }

    /// Same wiring as the real server: configured backoff and submit deadline
    pub fn with_server_wiring(
        repo: InMemoryReservationRepository,
        notifier: RecordingNotifier,
        config: AppConfig,
    ) -> Self {
        let repo = Arc::new(repo);
        let notifier = Arc::new(notifier);

        let context = create_service_context(repo.clone(), notifier.clone(), &config)
            .expect("all ports provided");

        Self::from_context(context, config, repo, notifier)
    }

    fn from_context(
        context: ServiceContext,
        config: AppConfig,
        repo: Arc<InMemoryReservationRepository>,
        notifier: Arc<RecordingNotifier>,
    ) -> Self {
        let router = create_app(AppState::new(context, config));

        Self {
            router,
            repo,
            notifier,
        }
    }

    /// Send one request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body can be read")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::get(path).body(Body::empty()).expect("valid request"))
            .await
    }

    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> TestResponse {
        self.post_raw(path, &serde_json::to_string(body).expect("serializable body"), &[])
            .await
    }

    /// POST a raw body with `Content-Type: application/json` plus extra headers
    pub async fn post_raw(&self, path: &str, body: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.send(builder.body(Body::from(body.to_string())).expect("valid request"))
            .await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffered response from [`TestApp`]
#[derive(Debug)]
pub struct TestResponse {
    pub status: HttpStatus,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "expected JSON body ({e}), got: {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

// ============================================================================
// Spawned server
// ============================================================================

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state.clone());

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

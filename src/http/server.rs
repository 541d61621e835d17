//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with admin, health, and mock handlers
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener, serve until shutdown
//!
//! The mock surface is a single fallback handler over the bound
//! [`RouteTable`]: admin routes always win, and everything else is answered
//! from the table captured at startup.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::admin;
use crate::config::MockServerConfig;
use crate::routing::RouteTable;
use crate::store::RuleStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared rule store; admin mutations go here.
    pub store: Arc<RuleStore>,
    /// Immutable route table captured at startup.
    pub table: Arc<RouteTable>,
}

/// HTTP server for the mock service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server. Binds the route table from the store's
    /// current state; this is the only point at which rules become live.
    pub fn new(config: &MockServerConfig, store: Arc<RuleStore>) -> Self {
        let table = Arc::new(RouteTable::bind(&store.list_all()));
        let state = AppState { store, table };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &MockServerConfig, state: AppState) -> Router {
        Router::new()
            .merge(admin::admin_router())
            .route("/health", get(health))
            .fallback(mock_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(std::time::Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl-C or the shutdown coordinator fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Health check endpoint.
async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy", "service": "mock-service"}))
}

/// Fallback handler serving the bound mock routes.
///
/// The artificial delay is the only suspension point in request handling;
/// the handler only reads its captured response, so no lock is held while
/// sleeping.
async fn mock_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().as_str();
    let path = request.uri().path();

    let Some(mock) = state.table.lookup(method, path) else {
        tracing::debug!(method = %method, path = %path, "No mock route bound");
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "no mock rule for this route"})),
        )
            .into_response();
    };

    let delay = mock.delay_duration();
    if !delay.is_zero() {
        tracing::debug!(method = %method, path = %path, delay = ?delay, "Delaying mock response");
        tokio::time::sleep(delay).await;
    }

    (mock.status, Json(mock.body.clone())).into_response()
}

/// Wait for Ctrl-C or a coordinator trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if result.is_ok() {
                tracing::info!("Shutdown signal received");
            }
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}

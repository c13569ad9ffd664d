//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the repository handlers and the docs routes
//! - Wire up middleware (tracing, request ID, timeout, metrics)
//! - Bind server to listener

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::docs;
use crate::http::handlers::{get_repository, list_repositories};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::observability::metrics;
use crate::store::RepositoryStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RepositoryStore>,
}

/// HTTP server for the repository API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the seeded store.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(config, RepositoryStore::seeded())
    }

    /// Create a new HTTP server over the given store.
    pub fn with_store(config: ApiConfig, store: RepositoryStore) -> Self {
        tracing::debug!(records = store.len(), "Repository store ready");

        let state = AppState {
            store: Arc::new(store),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Repository routes also answer with a trailing slash.
    #[allow(deprecated)]
    fn build_router(config: &ApiConfig, state: AppState) -> Router {
        let openapi = docs::build_openapi(config);

        Router::new()
            .route("/repositories", get(list_repositories))
            .route("/repositories/", get(list_repositories))
            .route("/repositories/{id}", get(get_repository))
            .route("/repositories/{id}/", get(get_repository))
            .route_layer(middleware::from_fn(metrics::track_requests))
            .with_state(state)
            .merge(docs::swagger_ui(&config.docs, openapi))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the process is terminated.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a clone of the router, for in-process dispatch.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

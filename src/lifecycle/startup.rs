//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Start the metrics exporter when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is retried
//! - Listener starts last (traffic only when ready)

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::validation::{validate_config, ValidationError};
use crate::config::ApiConfig;
use crate::http::HttpServer;
use crate::observability::metrics;

/// Fatal errors raised before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0:?}")]
    InvalidConfig(Vec<ValidationError>),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Bring the service up and serve until the process exits.
pub async fn start(config: ApiConfig) -> Result<(), StartupError> {
    validate_config(&config).map_err(StartupError::InvalidConfig)?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation guarantees the address parses.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr)?;
        }
    }

    let listener = bind(&config).await?;

    let base_url = config.listener.base_url();
    tracing::info!("Server running on {base_url}");
    tracing::info!("Swagger UI available at {base_url}{}", config.docs.ui_path);

    HttpServer::new(config)
        .run(listener)
        .await
        .map_err(StartupError::Serve)
}

/// Bind the configured listener address.
pub async fn bind(config: &ApiConfig) -> Result<TcpListener, StartupError> {
    let address = config.listener.bind_address();
    TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })
}

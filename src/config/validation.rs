//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid)
//! - Detect documentation paths that collide with API routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ApiConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ApiConfig;

/// Path prefix owned by the repository handlers.
const API_PREFIX: &str = "/repositories";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must start with '/': {value}")]
    RelativePath { field: &'static str, value: String },

    #[error("docs.ui_path must not be '/' or end with '/': {0}")]
    InvalidUiPath(String),

    #[error("docs.openapi_path must differ from docs.ui_path")]
    DocsPathConflict,

    #[error("{field} collides with the /repositories routes: {value}")]
    ApiPathConflict { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.metrics_address is not a socket address: {0}")]
    InvalidMetricsAddress(String),

    #[error("observability.log_level is not a known level: {0}")]
    UnknownLogLevel(String),
}

/// Check the configuration, collecting every problem found.
pub fn validate_config(config: &ApiConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.listener.bind_host.trim().is_empty() {
        errors.push(ValidationError::EmptyField { field: "listener.bind_host" });
    }
    if config.listener.public_host.trim().is_empty() {
        errors.push(ValidationError::EmptyField { field: "listener.public_host" });
    }

    let docs = &config.docs;
    for (field, value) in [("docs.ui_path", &docs.ui_path), ("docs.openapi_path", &docs.openapi_path)] {
        if !value.starts_with('/') {
            errors.push(ValidationError::RelativePath { field, value: value.clone() });
        }
        if value == API_PREFIX || value.starts_with(&format!("{API_PREFIX}/")) {
            errors.push(ValidationError::ApiPathConflict { field, value: value.clone() });
        }
    }
    if docs.ui_path == "/" || docs.ui_path.ends_with('/') {
        errors.push(ValidationError::InvalidUiPath(docs.ui_path.clone()));
    }
    if docs.openapi_path == docs.ui_path {
        errors.push(ValidationError::DocsPathConflict);
    }
    if docs.title.trim().is_empty() {
        errors.push(ValidationError::EmptyField { field: "docs.title" });
    }
    if docs.version.trim().is_empty() {
        errors.push(ValidationError::EmptyField { field: "docs.version" });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let observability = &config.observability;
    if observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }
    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

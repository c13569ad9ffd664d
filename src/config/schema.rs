//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the repository API.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,

    /// API documentation settings.
    pub docs: DocsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub bind_host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Host name used in logged and documented URLs.
    pub public_host: String,
}

impl ListenerConfig {
    /// Address handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// Externally visible base URL, e.g. `http://localhost:3000`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.public_host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 3000,
            public_host: "localhost".to_string(),
        }
    }
}

/// API documentation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DocsConfig {
    /// Path of the interactive documentation UI.
    pub ui_path: String,

    /// Path of the machine-readable OpenAPI document.
    pub openapi_path: String,

    /// API title shown in the document.
    pub title: String,

    /// API contract version.
    pub version: String,

    /// Free-form API description.
    pub description: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            ui_path: "/api-docs".to_string(),
            openapi_path: "/api-docs/openapi.json".to_string(),
            title: "Repository API".to_string(),
            version: "1.0.0".to_string(),
            description: "API for managing code repositories".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

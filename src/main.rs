//! Repository API (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────────┐
//!                       │                REPOSITORY API                  │
//!                       │                                                │
//!   Client Request      │  ┌──────────┐    ┌──────────┐    ┌──────────┐  │
//!   ────────────────────┼─▶│middleware│───▶│ handlers │───▶│  store   │  │
//!                       │  │ id/trace │    │ list/get │    │(in-mem)  │  │
//!                       │  └──────────┘    └──────────┘    └──────────┘  │
//!                       │        │                                       │
//!                       │        ▼                                       │
//!                       │  ┌──────────────────────────┐                  │
//!                       │  │ docs: OpenAPI + SwaggerUI│                  │
//!                       │  └──────────────────────────┘                  │
//!                       │                                                │
//!                       │  config · observability · lifecycle            │
//!                       └───────────────────────────────────────────────┘
//! ```

use repository_api::config::ApiConfig;
use repository_api::lifecycle;
use repository_api::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Port and data are compiled in
    let config = ApiConfig::default();

    logging::init_logging(&config.observability);

    tracing::info!("repository-api v{} starting", env!("CARGO_PKG_VERSION"));

    lifecycle::start(config).await?;

    Ok(())
}

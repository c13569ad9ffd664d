//! API documentation publisher.
//!
//! # Data Flow
//! ```text
//! #[utoipa::path] annotations (http/handlers.rs)
//! #[derive(ToSchema)] Repository (store/record.rs)
//!     → openapi.rs (ApiDoc, finalized from ApiConfig)
//!     → SwaggerUi routes:
//!         <ui_path>        → redirect to <ui_path>/
//!         <ui_path>/       → interactive UI
//!         <openapi_path>   → JSON document
//! ```
//!
//! # Design Decisions
//! - The document is assembled once at startup and never touches the store
//! - Server URL follows the configured public host and port

pub mod openapi;

pub use openapi::{build_openapi, ApiDoc};

use utoipa_swagger_ui::SwaggerUi;

use crate::config::DocsConfig;

/// Swagger UI serving `openapi` under the configured paths.
pub fn swagger_ui(docs: &DocsConfig, openapi: utoipa::openapi::OpenApi) -> SwaggerUi {
    SwaggerUi::new(docs.ui_path.clone()).url(docs.openapi_path.clone(), openapi)
}

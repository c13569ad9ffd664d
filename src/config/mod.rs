//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ApiConfig::default() (compiled-in)   or   config file (TOML)
//!                 │                              → loader.rs (parse & deserialize)
//!                 ▼                              ▼
//!         validation.rs (semantic checks)
//!     → ApiConfig (validated, immutable)
//!     → consumed once by HttpServer::new
//! ```
//!
//! # Design Decisions
//! - The binary runs on compiled-in defaults; the loader serves library users
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ApiConfig;
pub use schema::DocsConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;

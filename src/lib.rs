//! Repository API Library
//!
//! A read-only HTTP service over an in-memory list of code repositories,
//! with an OpenAPI description served through Swagger UI.

pub mod config;
pub mod docs;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::schema::ApiConfig;
pub use http::HttpServer;
pub use store::{Repository, RepositoryStore};

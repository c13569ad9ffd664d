//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Initialize metrics → Bind listener → Log URLs → Serve
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then observability, then the listener
//! - No shutdown protocol: the process serves until terminated

pub mod startup;

pub use startup::{start, StartupError};

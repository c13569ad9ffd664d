//! In-memory repository store.
//!
//! # Data Flow
//! ```text
//! seed literals (record.rs)
//!     → RepositoryStore (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Populated once at startup, never mutated
//! - Insertion order is preserved for listing
//! - Linear scan lookup (three records)

pub mod record;

pub use record::Repository;

use thiserror::Error;

/// Error type for store construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Two records share the same identifier.
    #[error("duplicate repository id: {0}")]
    DuplicateId(i64),
}

/// Immutable, ordered collection of repository records.
#[derive(Debug, Clone)]
pub struct RepositoryStore {
    records: Vec<Repository>,
}

impl RepositoryStore {
    /// Build a store from arbitrary records, rejecting duplicate ids.
    pub fn from_records(records: Vec<Repository>) -> Result<Self, StoreError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id == record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The store seeded with the built-in records.
    pub fn seeded() -> Self {
        Self {
            records: record::seed(),
        }
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Repository] {
        &self.records
    }

    /// Look up a record by id. Unknown ids yield `None`.
    pub fn find_by_id(&self, id: i64) -> Option<&Repository> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

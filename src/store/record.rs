//! Repository record type and seed data.

use serde::Serialize;
use utoipa::ToSchema;

/// A described software project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Repository {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "awesome-project")]
    pub name: String,

    #[schema(example = "user1")]
    pub owner: String,

    #[schema(example = 42)]
    pub stars: u64,
}

impl Repository {
    pub fn new(id: i64, name: impl Into<String>, owner: impl Into<String>, stars: u64) -> Self {
        Self {
            id,
            name: name.into(),
            owner: owner.into(),
            stars,
        }
    }
}

/// Records the service starts with.
pub(crate) fn seed() -> Vec<Repository> {
    vec![
        Repository::new(1, "awesome-project", "user1", 42),
        Repository::new(2, "cool-library", "user2", 105),
        Repository::new(3, "utility-tool", "user3", 27),
    ]
}

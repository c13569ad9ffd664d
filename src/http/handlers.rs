//! Repository handlers.
//!
//! The `#[utoipa::path]` annotations on these handlers are the source of
//! the published OpenAPI description.

use axum::{extract::State, http::HeaderMap, Json};

use crate::http::request::{RepositoryId, RequestIdExt};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::store::Repository;

/// Get all repositories
///
/// Returns every repository in insertion order.
#[utoipa::path(
    get,
    path = "/repositories",
    tag = "repositories",
    responses(
        (status = 200, description = "A list of repositories", body = [Repository],
            example = json!([
                {"id": 1, "name": "awesome-project", "owner": "user1", "stars": 42},
                {"id": 2, "name": "cool-library", "owner": "user2", "stars": 105},
                {"id": 3, "name": "utility-tool", "owner": "user3", "stars": 27}
            ])
        )
    )
)]
pub async fn list_repositories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Vec<Repository>> {
    tracing::debug!(
        request_id = %headers.request_id(),
        count = state.store.len(),
        "Listing repositories"
    );
    Json(state.store.list_all().to_vec())
}

/// Get a repository by ID
///
/// Non-numeric identifiers are answered like unknown ones.
#[utoipa::path(
    get,
    path = "/repositories/{id}",
    tag = "repositories",
    params(
        ("id" = i64, Path, description = "Repository identifier", example = 1)
    ),
    responses(
        (status = 200, description = "A single repository", body = Repository,
            example = json!({"id": 1, "name": "awesome-project", "owner": "user1", "stars": 42})
        ),
        (status = 404, description = "Repository not found", body = String, content_type = "text/plain",
            example = json!("Repository not found")
        )
    )
)]
pub async fn get_repository(
    State(state): State<AppState>,
    headers: HeaderMap,
    RepositoryId(id): RepositoryId,
) -> Result<Json<Repository>, ApiError> {
    let repository = id.and_then(|id| state.store.find_by_id(id));

    match repository {
        Some(repository) => Ok(Json(repository.clone())),
        None => {
            tracing::debug!(
                request_id = %headers.request_id(),
                id = ?id,
                "Repository not found"
            );
            Err(ApiError::RepositoryNotFound)
        }
    }
}

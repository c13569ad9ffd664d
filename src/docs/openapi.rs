//! OpenAPI document assembly.

use utoipa::openapi::{server::Server, OpenApi as OpenApiDocument};
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::http::handlers;
use crate::store::Repository;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_repositories, handlers::get_repository),
    components(schemas(Repository)),
    tags(
        (name = "repositories", description = "Read-only access to code repositories")
    )
)]
pub struct ApiDoc;

/// Generated document with info and servers taken from the config.
pub fn build_openapi(config: &ApiConfig) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();

    doc.info.title = config.docs.title.clone();
    doc.info.version = config.docs.version.clone();
    doc.info.description = Some(config.docs.description.clone());
    doc.servers = Some(vec![Server::new(config.listener.base_url())]);

    doc
}

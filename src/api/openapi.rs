//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::owner_handler;
use crate::domain::{AccountDto, OwnerDto};

/// OpenAPI documentation for the Account Owner Server
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Owner Server",
        version = "0.1.0",
        description = "Read API for owners and their accounts, built with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        owner_handler::get_all_owners,
        owner_handler::get_owner_by_id,
        owner_handler::get_owner_with_details,
    ),
    components(schemas(OwnerDto, AccountDto)),
    tags(
        (name = "Owners", description = "Owners and their accounts")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_owner_endpoint() {
        let paths = ApiDoc::openapi().paths.paths;

        assert!(paths.contains_key("/api/owner"));
        assert!(paths.contains_key("/api/owner/{id}"));
        assert!(paths.contains_key("/api/owner/{id}/account"));
    }
}

//! Repository scope extractor.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::api::AppState;
use crate::infra::RepositoryWrapper;

/// A repository wrapper opened for the current request.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Repo(repository): Repo) {
///     let owners = repository.owner().get_all_owners().await?;
/// }
/// ```
pub struct Repo(pub Arc<dyn RepositoryWrapper>);

#[async_trait]
impl FromRequestParts<AppState> for Repo {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Repo(state.repositories()))
    }
}

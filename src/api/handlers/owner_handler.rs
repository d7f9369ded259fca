//! Owner handlers.

use axum::{extract::Path, response::Json, routing::get, Router};

use crate::api::extractors::Repo;
use crate::api::AppState;
use crate::domain::mapping::map_owners;
use crate::domain::OwnerDto;
use crate::errors::{AppError, AppResult};

/// Create owner routes
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_owners))
        .route("/:id", get(get_owner_by_id))
        .route("/:id/account", get(get_owner_with_details))
}

/// List all owners ordered by name
#[utoipa::path(
    get,
    path = "/api/owner",
    tag = "Owners",
    responses(
        (status = 200, description = "All owners", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(name = "GetAllOwners", skip_all)]
pub async fn get_all_owners(Repo(repository): Repo) -> AppResult<Json<Vec<OwnerDto>>> {
    let owners = repository
        .owner()
        .get_all_owners()
        .await
        .inspect_err(log_failure("GetAllOwners"))?;
    tracing::info!("Returned all owners from database.");

    Ok(Json(map_owners(owners)))
}

/// Get a single owner
#[utoipa::path(
    get,
    path = "/api/owner/{id}",
    tag = "Owners",
    params(("id" = String, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Owner found", body = OwnerDto),
        (status = 404, description = "Owner not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(name = "GetOwnerById", skip_all, fields(id = %id))]
pub async fn get_owner_by_id(
    Repo(repository): Repo,
    Path(id): Path<String>,
) -> AppResult<Json<OwnerDto>> {
    let Some(owner) = repository
        .owner()
        .get_owner_by_id(&id)
        .await
        .inspect_err(log_failure("GetOwnerById"))?
    else {
        return Err(not_found(&id));
    };
    tracing::info!("Returned owner with id: {}", id);

    Ok(Json(OwnerDto::from(owner)))
}

/// Get a single owner together with its accounts
#[utoipa::path(
    get,
    path = "/api/owner/{id}/account",
    tag = "Owners",
    params(("id" = String, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Owner with nested accounts", body = OwnerDto),
        (status = 404, description = "Owner not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(name = "GetOwnerWithDetails", skip_all, fields(id = %id))]
pub async fn get_owner_with_details(
    Repo(repository): Repo,
    Path(id): Path<String>,
) -> AppResult<Json<OwnerDto>> {
    let Some(owner) = repository
        .owner()
        .get_owner_with_details(&id)
        .await
        .inspect_err(log_failure("GetOwnerWithDetails"))?
    else {
        return Err(not_found(&id));
    };
    tracing::info!("Returned owner with details for id: {}", id);

    Ok(Json(OwnerDto::from(owner)))
}

/// Log a 5xx cause inside the handler span, before the body is replaced
fn log_failure(action: &'static str) -> impl Fn(&AppError) {
    move |err| {
        if err.is_internal() {
            tracing::error!("Something went wrong inside {} action: {}", action, err);
        }
    }
}

fn not_found(id: &str) -> AppError {
    tracing::error!("Owner with id: {}, hasn't been found in db.", id);
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;

    use crate::api::{create_router, AppState};
    use crate::domain::{Account, Owner};
    use crate::errors::{AppError, AppResult, INTERNAL_ERROR_MESSAGE};
    use crate::infra::{
        AccountRepository, Database, MockAccountRepository, MockOwnerRepository,
        OwnerRepository, RepositoryScope, RepositoryWrapper,
    };

    /// Wrapper handing out fixed mock repositories
    struct StubRepositories {
        owner: Arc<MockOwnerRepository>,
        account: Arc<MockAccountRepository>,
    }

    #[async_trait]
    impl RepositoryWrapper for StubRepositories {
        fn owner(&self) -> Arc<dyn OwnerRepository> {
            self.owner.clone()
        }

        fn account(&self) -> Arc<dyn AccountRepository> {
            self.account.clone()
        }

        async fn save(&self) -> AppResult<()> {
            Ok(())
        }
    }

    struct StubScope(Arc<StubRepositories>);

    impl RepositoryScope for StubScope {
        fn begin_scope(&self) -> Arc<dyn RepositoryWrapper> {
            self.0.clone()
        }
    }

    async fn app(owner: MockOwnerRepository) -> Router {
        let database = Database::connect_without_migrations("sqlite::memory:")
            .await
            .unwrap();
        let repositories = Arc::new(StubRepositories {
            owner: Arc::new(owner),
            account: Arc::new(MockAccountRepository::new()),
        });
        let state = AppState::with_scope(Arc::new(database), Arc::new(StubScope(repositories)));
        create_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn created() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn list_returns_mapped_owners() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_get_all_owners().times(1).returning(|| {
            Ok(vec![
                Owner::new("1", "Alice", created()),
                Owner::new("2", "Bob", created()),
            ])
        });

        let (status, body) = get(app(repo).await, "/api/owner").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["id"], "1");
        assert_eq!(json[0]["name"], "Alice");
        assert_eq!(json[1]["id"], "2");
        assert_eq!(json[1]["name"], "Bob");
    }

    #[tokio::test]
    async fn store_failure_becomes_500() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_get_all_owners().returning(|| {
            Err(sea_orm::DbErr::Custom("connection reset by peer".to_string()).into())
        });

        let (status, body) = get(app(repo).await, "/api/owner").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn unknown_owner_is_404_with_empty_body() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_get_owner_by_id()
            .withf(|id: &str| id == "999")
            .returning(|_| Ok(None));

        let (status, body) = get(app(repo).await, "/api/owner/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn owner_by_id_omits_accounts() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_get_owner_by_id()
            .returning(|id| Ok(Some(Owner::new(id, "Alice", created()))));

        let (status, body) = get(app(repo).await, "/api/owner/1").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["id"], "1");
        assert!(json.get("accounts").is_none());
    }

    #[tokio::test]
    async fn owner_with_details_nests_accounts() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_get_owner_with_details().returning(|id| {
            Ok(Some(Owner::new(id, "Alice", created()).with_accounts(vec![
                Account::new("a1", id, "Domestic", created()),
            ])))
        });

        let (status, body) = get(app(repo).await, "/api/owner/1/account").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["accounts"][0]["accountId"], "a1");
        assert_eq!(json["accounts"][0]["accountType"], "Domestic");
    }

    #[tokio::test]
    async fn details_failure_becomes_500() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_get_owner_with_details()
            .returning(|_| Err(AppError::internal("mapping blew up")));

        let (status, body) = get(app(repo).await, "/api/owner/1/account").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, INTERNAL_ERROR_MESSAGE);
    }
}

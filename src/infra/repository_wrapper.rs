//! Repository wrapper - one entry point per request scope.
//!
//! The wrapper owns a single `RepositoryContext` and builds each entity
//! repository the first time it is asked for, then keeps handing out
//! the same instance. Every repository of one wrapper shares the
//! context, so their staged mutations commit together on `save`.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use sea_orm::DatabaseConnection;

use super::db::Database;
use super::repositories::{
    AccountRepository, AccountStore, OwnerRepository, OwnerStore, RepositoryContext,
};
use crate::errors::AppResult;

/// Repository wrapper trait for dependency injection.
#[async_trait]
pub trait RepositoryWrapper: Send + Sync {
    /// Owner repository of this scope
    fn owner(&self) -> Arc<dyn OwnerRepository>;

    /// Account repository of this scope
    fn account(&self) -> Arc<dyn AccountRepository>;

    /// Commit everything staged through this scope as one transaction
    async fn save(&self) -> AppResult<()>;
}

/// Something that can open a fresh repository scope, once per request.
pub trait RepositoryScope: Send + Sync {
    fn begin_scope(&self) -> Arc<dyn RepositoryWrapper>;
}

/// Concrete implementation of RepositoryWrapper
pub struct Repositories {
    context: Arc<RepositoryContext>,
    owner: OnceCell<Arc<OwnerStore>>,
    account: OnceCell<Arc<AccountStore>>,
}

impl Repositories {
    /// Create a wrapper with its own context over `db`
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            context: Arc::new(RepositoryContext::new(db)),
            owner: OnceCell::new(),
            account: OnceCell::new(),
        }
    }

    /// Context shared by this wrapper's repositories
    pub fn context(&self) -> &Arc<RepositoryContext> {
        &self.context
    }
}

#[async_trait]
impl RepositoryWrapper for Repositories {
    fn owner(&self) -> Arc<dyn OwnerRepository> {
        self.owner
            .get_or_init(|| Arc::new(OwnerStore::new(self.context.clone())))
            .clone()
    }

    fn account(&self) -> Arc<dyn AccountRepository> {
        self.account
            .get_or_init(|| Arc::new(AccountStore::new(self.context.clone())))
            .clone()
    }

    async fn save(&self) -> AppResult<()> {
        self.context.save_changes().await?;
        Ok(())
    }
}

impl RepositoryScope for Database {
    fn begin_scope(&self) -> Arc<dyn RepositoryWrapper> {
        Arc::new(Repositories::new(self.get_connection()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::{Account, Owner};
    use crate::errors::AppError;

    async fn scope() -> Repositories {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        Repositories::new(db.get_connection())
    }

    #[tokio::test]
    async fn sub_repositories_are_cached() {
        let repos = scope().await;

        assert!(Arc::ptr_eq(&repos.owner(), &repos.owner()));
        assert!(Arc::ptr_eq(&repos.account(), &repos.account()));
    }

    #[tokio::test]
    async fn staged_changes_are_invisible_until_saved() {
        let repos = scope().await;
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        repos
            .owner()
            .create_owner(Owner::new("1", "Alice", created))
            .await
            .unwrap();
        assert_eq!(repos.context().pending_count().await, 1);
        assert!(repos.owner().get_owner_by_id("1").await.unwrap().is_none());

        repos.save().await.unwrap();

        assert_eq!(repos.context().pending_count().await, 0);
        let owner = repos.owner().get_owner_by_id("1").await.unwrap().unwrap();
        assert_eq!(owner.name, "Alice");
    }

    #[tokio::test]
    async fn mutations_across_repositories_commit_together() {
        let repos = scope().await;
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        repos
            .owner()
            .create_owner(Owner::new("1", "Alice", created))
            .await
            .unwrap();
        repos
            .account()
            .create_account(Account::new("a1", "1", "Domestic", created))
            .await
            .unwrap();
        repos.save().await.unwrap();

        let owner = repos
            .owner()
            .get_owner_with_details("1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(owner.account_count(), 1);
    }

    #[tokio::test]
    async fn invalid_owner_is_rejected_before_staging() {
        let repos = scope().await;

        let err = repos
            .owner()
            .create_owner(Owner::new("1", "", Utc::now()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Name is required"));
        assert_eq!(repos.context().pending_count().await, 0);
    }

    #[tokio::test]
    async fn save_without_changes_is_a_no_op() {
        let repos = scope().await;
        assert!(repos.save().await.is_ok());
    }
}

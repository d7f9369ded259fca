//! Owner repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, QueryOrder};
use validator::Validate;

use super::base::{ReadRepository, WriteRepository};
use super::context::RepositoryContext;
use super::entities::account::Entity as AccountEntity;
use super::entities::owner::{self, ActiveModel, Entity as OwnerEntity};
use crate::domain::{Account, Owner};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Owner repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// All owners, ordered by name
    async fn get_all_owners(&self) -> AppResult<Vec<Owner>>;

    /// Owner by id, accounts not loaded
    async fn get_owner_by_id(&self, id: &str) -> AppResult<Option<Owner>>;

    /// Owner by id with its accounts loaded in the same query
    async fn get_owner_with_details(&self, id: &str) -> AppResult<Option<Owner>>;

    /// Validate and stage a new owner
    async fn create_owner(&self, owner: Owner) -> AppResult<()>;

    /// Validate and stage an update of every owner column
    async fn update_owner(&self, owner: Owner) -> AppResult<()>;

    /// Stage removal of the owner (its accounts cascade)
    async fn delete_owner(&self, owner: Owner) -> AppResult<()>;
}

/// Concrete implementation of OwnerRepository
pub struct OwnerStore {
    context: Arc<RepositoryContext>,
}

impl OwnerStore {
    /// Create new repository instance
    pub fn new(context: Arc<RepositoryContext>) -> Self {
        Self { context }
    }
}

impl ReadRepository<OwnerEntity> for OwnerStore {
    fn context(&self) -> &RepositoryContext {
        &self.context
    }
}

impl WriteRepository<OwnerEntity, ActiveModel> for OwnerStore {}

#[async_trait]
impl OwnerRepository for OwnerStore {
    async fn get_all_owners(&self) -> AppResult<Vec<Owner>> {
        let models = self
            .find_all()
            .order_by_asc(owner::Column::Name)
            .all(self.db())
            .await?;

        Ok(models.into_iter().map(Owner::from).collect())
    }

    async fn get_owner_by_id(&self, id: &str) -> AppResult<Option<Owner>> {
        let result = self
            .find_by_condition(owner::Column::Id.eq(id))
            .one(self.db())
            .await?;

        Ok(result.map(Owner::from))
    }

    async fn get_owner_with_details(&self, id: &str) -> AppResult<Option<Owner>> {
        // One LEFT JOIN; an owner without accounts still comes back
        let rows = self
            .find_by_condition(owner::Column::Id.eq(id))
            .find_with_related(AccountEntity)
            .all(self.db())
            .await?;

        Ok(rows.into_iter().next().map(|(model, accounts)| {
            Owner::from(model).with_accounts(accounts.into_iter().map(Account::from).collect())
        }))
    }

    async fn create_owner(&self, owner: Owner) -> AppResult<()> {
        owner.validate()?;
        self.create(ActiveModel::from(&owner)).await;
        Ok(())
    }

    async fn update_owner(&self, owner: Owner) -> AppResult<()> {
        owner.validate()?;
        self.update(ActiveModel::from(&owner)).await;
        Ok(())
    }

    async fn delete_owner(&self, owner: Owner) -> AppResult<()> {
        self.delete(ActiveModel::from(&owner)).await;
        Ok(())
    }
}

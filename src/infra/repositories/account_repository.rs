//! Account repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, QueryOrder};
use validator::Validate;

use super::base::{ReadRepository, WriteRepository};
use super::context::RepositoryContext;
use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use crate::domain::Account;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Accounts of one owner, oldest first
    async fn get_accounts_by_owner(&self, owner_id: &str) -> AppResult<Vec<Account>>;

    /// Validate and stage a new account
    async fn create_account(&self, account: Account) -> AppResult<()>;

    /// Validate and stage an update of every account column
    async fn update_account(&self, account: Account) -> AppResult<()>;

    /// Stage removal of the account
    async fn delete_account(&self, account: Account) -> AppResult<()>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    context: Arc<RepositoryContext>,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(context: Arc<RepositoryContext>) -> Self {
        Self { context }
    }
}

impl ReadRepository<AccountEntity> for AccountStore {
    fn context(&self) -> &RepositoryContext {
        &self.context
    }
}

impl WriteRepository<AccountEntity, ActiveModel> for AccountStore {}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn get_accounts_by_owner(&self, owner_id: &str) -> AppResult<Vec<Account>> {
        let models = self
            .find_by_condition(account::Column::OwnerId.eq(owner_id))
            .order_by_asc(account::Column::DateCreated)
            .order_by_asc(account::Column::AccountId)
            .all(self.db())
            .await?;

        Ok(models.into_iter().map(Account::from).collect())
    }

    async fn create_account(&self, account: Account) -> AppResult<()> {
        account.validate()?;
        self.create(ActiveModel::from(&account)).await;
        Ok(())
    }

    async fn update_account(&self, account: Account) -> AppResult<()> {
        account.validate()?;
        self.update(ActiveModel::from(&account)).await;
        Ok(())
    }

    async fn delete_account(&self, account: Account) -> AppResult<()> {
        self.delete(ActiveModel::from(&account)).await;
        Ok(())
    }
}

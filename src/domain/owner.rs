//! Owner domain entity and its DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::account::{Account, AccountDto};

/// Owner domain entity
///
/// `accounts` is `None` unless the repository was asked to load them.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Owner {
    pub id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub accounts: Option<Vec<Account>>,
}

impl Owner {
    /// Create an owner without loaded accounts
    pub fn new(id: impl Into<String>, name: impl Into<String>, date_created: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_created,
            accounts: None,
        }
    }

    /// Attach eagerly loaded accounts
    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    /// Number of loaded accounts (0 when not loaded)
    pub fn account_count(&self) -> usize {
        self.accounts.as_ref().map_or(0, Vec::len)
    }
}

/// Owner response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    /// Owner identifier
    #[schema(example = "1")]
    pub id: String,
    /// Owner display name
    #[schema(example = "Alice")]
    pub name: String,
    /// Creation timestamp
    pub date_created: DateTime<Utc>,
    /// Accounts, present only when requested with details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<AccountDto>>,
}

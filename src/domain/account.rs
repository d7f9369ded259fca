//! Account domain entity and its DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Account domain entity, always owned by exactly one owner
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Account {
    pub account_id: String,
    pub date_created: DateTime<Utc>,
    #[validate(length(min = 1, message = "Account type is required"))]
    pub account_type: String,
    #[validate(length(min = 1, message = "Owner id is required"))]
    pub owner_id: String,
}

impl Account {
    pub fn new(
        account_id: impl Into<String>,
        owner_id: impl Into<String>,
        account_type: impl Into<String>,
        date_created: DateTime<Utc>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            date_created,
            account_type: account_type.into(),
            owner_id: owner_id.into(),
        }
    }
}

/// Account response
///
/// Carries the owner's id but never the owner itself, so nested
/// serialization under an `OwnerDto` cannot recurse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    #[schema(example = "a1")]
    pub account_id: String,
    pub date_created: DateTime<Utc>,
    #[schema(example = "Domestic")]
    pub account_type: String,
    #[schema(example = "1")]
    pub owner_id: String,
}

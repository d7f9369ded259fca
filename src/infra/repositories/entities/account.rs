//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Account;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: String,
    pub date_created: DateTimeUtc,
    pub account_type: String,
    pub owner_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            account_id: model.account_id,
            date_created: model.date_created,
            account_type: model.account_type,
            owner_id: model.owner_id,
        }
    }
}

impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        ActiveModel {
            account_id: Set(account.account_id.clone()),
            date_created: Set(account.date_created),
            account_type: Set(account.account_type.clone()),
            owner_id: Set(account.owner_id.clone()),
        }
    }
}

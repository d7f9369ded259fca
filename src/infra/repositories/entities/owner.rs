//! Owner database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Owner;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub date_created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account::Entity")]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity (accounts not loaded)
impl From<Model> for Owner {
    fn from(model: Model) -> Self {
        Owner::new(model.id, model.name, model.date_created)
    }
}

/// Convert domain entity to an active model with every column set
impl From<&Owner> for ActiveModel {
    fn from(owner: &Owner) -> Self {
        ActiveModel {
            id: Set(owner.id.clone()),
            name: Set(owner.name.clone()),
            date_created: Set(owner.date_created),
        }
    }
}

//! Migration: Create owner table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Owner::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Owner::Name).string().not_null())
                    .col(
                        ColumnDef::new(Owner::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Owners are listed ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_owner_name")
                    .table(Owner::Table)
                    .col(Owner::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Owner {
    Table,
    Id,
    Name,
    DateCreated,
}

//! Create `owner` table.
//!
//! Root of the ownership chain; properties reference it.
use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(pk_auto(Owner::Id))
                    .col(string_len(Owner::Name, 256).not_null())
                    .col(string_len(Owner::Address, 512).not_null())
                    .col(date(Owner::Birthday).not_null())
                    .col(ColumnDef::new(Owner::Photo).blob().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Owner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Owner { Table, Id, Name, Address, Birthday, Photo }

//! Create `property` table.
//!
//! Each property belongs to exactly one owner and is removed with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(string_len(Property::Name, 256).not_null())
                    .col(string_len(Property::Address, 512).not_null())
                    .col(integer(Property::Price).not_null())
                    .col(string_len(Property::CodeInternal, 64).not_null())
                    .col(integer(Property::Year).not_null())
                    .col(integer(Property::OwnerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_owner")
                            .from(Property::Table, Property::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Property::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Property {
    Table,
    Id,
    Name,
    Address,
    Price,
    CodeInternal,
    Year,
    OwnerId,
}

#[derive(DeriveIden)]
enum Owner { Table, Id }

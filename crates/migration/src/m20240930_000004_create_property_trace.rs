//! Create `property_trace` table.
//!
//! Sale history of a property: date, value and tax per transaction.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyTrace::Table)
                    .if_not_exists()
                    .col(pk_auto(PropertyTrace::Id))
                    .col(date(PropertyTrace::DateSale).not_null())
                    .col(string_len(PropertyTrace::Name, 256).not_null())
                    .col(integer(PropertyTrace::Value).not_null())
                    .col(integer(PropertyTrace::Tax).not_null())
                    .col(integer(PropertyTrace::PropertyId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_trace_property")
                            .from(PropertyTrace::Table, PropertyTrace::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PropertyTrace::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PropertyTrace { Table, Id, DateSale, Name, Value, Tax, PropertyId }

#[derive(DeriveIden)]
enum Property { Table, Id }

//! Create `property_image` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyImage::Table)
                    .if_not_exists()
                    .col(pk_auto(PropertyImage::Id))
                    .col(ColumnDef::new(PropertyImage::File).blob().null())
                    .col(boolean(PropertyImage::Enabled).not_null())
                    .col(integer(PropertyImage::PropertyId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_image_property")
                            .from(PropertyImage::Table, PropertyImage::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PropertyImage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PropertyImage { Table, Id, File, Enabled, PropertyId }

#[derive(DeriveIden)]
enum Property { Table, Id }

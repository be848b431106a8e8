use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Property: FK lookups when cascading from owner
        manager
            .create_index(
                Index::create()
                    .name("idx_property_owner")
                    .table(Property::Table)
                    .col(Property::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Property: range filter on price, equality on year
        manager
            .create_index(
                Index::create()
                    .name("idx_property_year_price")
                    .table(Property::Table)
                    .col(Property::Year)
                    .col(Property::Price)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_image_property")
                    .table(PropertyImage::Table)
                    .col(PropertyImage::PropertyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_trace_property")
                    .table(PropertyTrace::Table)
                    .col(PropertyTrace::PropertyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_property_trace_property").table(PropertyTrace::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_property_image_property").table(PropertyImage::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_property_year_price").table(Property::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_property_owner").table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Property { Table, OwnerId, Year, Price }

#[derive(DeriveIden)]
enum PropertyImage { Table, PropertyId }

#[derive(DeriveIden)]
enum PropertyTrace { Table, PropertyId }

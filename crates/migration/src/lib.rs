//! Migrator registering entity-specific migrations in dependency order.
//! Parents are created before children; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240930_000001_create_owner;
mod m20240930_000002_create_property;
mod m20240930_000003_create_property_image;
mod m20240930_000004_create_property_trace;
mod m20240930_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240930_000001_create_owner::Migration),
            Box::new(m20240930_000002_create_property::Migration),
            Box::new(m20240930_000003_create_property_image::Migration),
            Box::new(m20240930_000004_create_property_trace::Migration),
            // Indexes should always be applied last
            Box::new(m20240930_000005_add_indexes::Migration),
        ]
    }
}

use std::sync::Arc;

use chrono::NaiveDate;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use service::domain::{OwnerInput, PropertyInput, PropertyTraceInput};
use service::{MemoryCatalogStore, SeaOrmCatalogStore};
use tempfile::NamedTempFile;

/// SQLite-backed store plus the temp file that holds it.
pub struct SqliteStore {
    pub store: Arc<SeaOrmCatalogStore>,
    _file: NamedTempFile,
}

pub async fn sqlite_store() -> anyhow::Result<SqliteStore> {
    let file = NamedTempFile::new()?;
    let url = format!("sqlite://{}?mode=rwc", file.path().display());
    let cfg = DatabaseConfig { url, max_connections: 4, ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(SqliteStore { store: Arc::new(SeaOrmCatalogStore::new(db)), _file: file })
}

pub fn memory_store() -> Arc<MemoryCatalogStore> {
    Arc::new(MemoryCatalogStore::new())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn owner(name: &str) -> OwnerInput {
    OwnerInput { name: name.into(), address: "123 Elm Street".into(), birthday: date(1975, 8, 15) }
}

pub fn property(owner_id: i32, name: &str, price: i32, year: i32) -> PropertyInput {
    PropertyInput {
        name: name.into(),
        address: "789 Pine Road".into(),
        price,
        code_internal: format!("{}{price}", name.chars().take(4).collect::<String>().to_uppercase()),
        year,
        owner_id,
    }
}

pub fn trace(property_id: i32) -> PropertyTraceInput {
    PropertyTraceInput { date_sale: date(2020, 7, 15), name: "Initial Sale".into(), value: 450000, tax: 45000, property_id }
}

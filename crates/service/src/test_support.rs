#![cfg(test)]
use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Migrated SQLite database in a temp file; the file lives as long as this value.
pub struct TestDb {
    pub db: DatabaseConnection,
    _file: NamedTempFile,
}

pub async fn get_db() -> Result<TestDb, anyhow::Error> {
    let file = NamedTempFile::new()?;
    let url = format!("sqlite://{}?mode=rwc", file.path().display());
    let cfg = DatabaseConfig { url, max_connections: 4, ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(TestDb { db, _file: file })
}

/// Schema, connection and seed tests
pub mod db_tests;


use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;

use crate::db::{connect_with_config, migrate, DatabaseConfig};

/// Migrated SQLite database living in a temp file for the duration of a test.
pub struct TestDb {
    pub db: DatabaseConnection,
    _file: NamedTempFile,
}

pub async fn setup_test_db() -> anyhow::Result<TestDb> {
    let file = NamedTempFile::new()?;
    let url = format!("sqlite://{}?mode=rwc", file.path().display());
    let cfg = DatabaseConfig { url, max_connections: 4, ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(TestDb { db, _file: file })
}

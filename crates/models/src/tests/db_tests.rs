use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::db::test_connection;
use crate::{owner, property, property_image, property_trace, seed};

#[tokio::test]
async fn test_connection_round_trip() -> Result<()> {
    let t = setup_test_db().await?;
    test_connection(&t.db).await?;
    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let t = setup_test_db().await?;
    crate::db::migrate(&t.db).await?;
    assert_eq!(owner::Entity::find().count(&t.db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_seed_populates_empty_catalog_once() -> Result<()> {
    let t = setup_test_db().await?;

    assert!(seed::seed_catalog(&t.db).await?);
    assert_eq!(owner::Entity::find().count(&t.db).await?, 2);
    assert_eq!(property::Entity::find().count(&t.db).await?, 2);
    assert_eq!(property_image::Entity::find().count(&t.db).await?, 2);
    assert_eq!(property_trace::Entity::find().count(&t.db).await?, 2);

    // second run is a no-op
    assert!(!seed::seed_catalog(&t.db).await?);
    assert_eq!(owner::Entity::find().count(&t.db).await?, 2);

    let villa = property::Entity::find()
        .all(&t.db)
        .await?
        .into_iter()
        .find(|p| p.code_internal == "MODV123")
        .expect("seeded villa");
    assert_eq!(villa.price, 500_000);
    assert_eq!(villa.year, 2015);
    Ok(())
}

use std::sync::Arc;

use configs::CatalogConfig;
use sea_orm::DatabaseConnection;
use service::{OwnerService, PropertyImageService, PropertyService, PropertyTraceService, SeaOrmCatalogStore};

/// Shared handler state: one service per entity over a single store.
#[derive(Clone)]
pub struct ServerState {
    pub owners: OwnerService<SeaOrmCatalogStore>,
    pub properties: PropertyService<SeaOrmCatalogStore>,
    pub images: PropertyImageService<SeaOrmCatalogStore>,
    pub traces: PropertyTraceService<SeaOrmCatalogStore>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, catalog: &CatalogConfig) -> Self {
        let store = Arc::new(SeaOrmCatalogStore::new(db));
        Self {
            owners: OwnerService::new(store.clone()),
            properties: PropertyService::new(store.clone(), catalog.name_match),
            images: PropertyImageService::new(store.clone()),
            traces: PropertyTraceService::new(store),
        }
    }
}

use async_trait::async_trait;
use configs::NameMatch;
use sea_orm::DatabaseConnection;
use models::{owner, property, property_image, property_trace};

use crate::db::{owner_service, property_image_service, property_service, property_trace_service};
use crate::domain::{OwnerInput, PropertyImageInput, PropertyImageUpdate, PropertyInput, PropertyTraceInput};
use crate::errors::ServiceError;
use crate::owner::OwnerRepository;
use crate::property::{PropertyFilter, PropertyRepository};
use crate::property_image::PropertyImageRepository;
use crate::property_trace::PropertyTraceRepository;

/// SeaORM-backed catalog store (SQLite or PostgreSQL).
#[derive(Clone)]
pub struct SeaOrmCatalogStore {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepository for SeaOrmCatalogStore {
    async fn list_owners(&self) -> Result<Vec<owner::Model>, ServiceError> {
        owner_service::list_owners(&self.db).await
    }

    async fn get_owner(&self, id: i32) -> Result<Option<owner::Model>, ServiceError> {
        owner_service::get_owner(&self.db, id).await
    }

    async fn insert_owner(&self, input: OwnerInput, photo: Option<Vec<u8>>) -> Result<owner::Model, ServiceError> {
        owner_service::create_owner(&self.db, input, photo).await
    }

    async fn update_owner(&self, id: i32, input: &OwnerInput) -> Result<Option<owner::Model>, ServiceError> {
        owner_service::update_owner(&self.db, id, input).await
    }

    async fn replace_owner_photo(&self, id: i32, photo: Option<Vec<u8>>) -> Result<Option<owner::Model>, ServiceError> {
        owner_service::replace_owner_photo(&self.db, id, photo).await
    }

    async fn delete_owner(&self, id: i32) -> Result<bool, ServiceError> {
        owner_service::delete_owner(&self.db, id).await
    }
}

#[async_trait]
impl PropertyRepository for SeaOrmCatalogStore {
    async fn list_properties(&self) -> Result<Vec<property::Model>, ServiceError> {
        property_service::list_properties(&self.db).await
    }

    async fn get_property(&self, id: i32) -> Result<Option<property::Model>, ServiceError> {
        property_service::get_property(&self.db, id).await
    }

    async fn insert_property(&self, input: PropertyInput) -> Result<property::Model, ServiceError> {
        property_service::create_property(&self.db, input).await
    }

    async fn update_property(&self, id: i32, input: &PropertyInput) -> Result<Option<property::Model>, ServiceError> {
        property_service::update_property(&self.db, id, input).await
    }

    async fn delete_property(&self, id: i32) -> Result<bool, ServiceError> {
        property_service::delete_property(&self.db, id).await
    }

    async fn list_properties_by_owner(&self, owner_id: i32) -> Result<Vec<property::Model>, ServiceError> {
        property_service::list_properties_by_owner(&self.db, owner_id).await
    }

    async fn filter_properties(&self, filter: &PropertyFilter, mode: NameMatch) -> Result<Vec<property::Model>, ServiceError> {
        property_service::filter_properties(&self.db, filter, mode).await
    }
}

#[async_trait]
impl PropertyImageRepository for SeaOrmCatalogStore {
    async fn list_images(&self) -> Result<Vec<property_image::Model>, ServiceError> {
        property_image_service::list_images(&self.db).await
    }

    async fn get_image(&self, id: i32) -> Result<Option<property_image::Model>, ServiceError> {
        property_image_service::get_image(&self.db, id).await
    }

    async fn insert_image(&self, input: PropertyImageInput, file: Option<Vec<u8>>) -> Result<property_image::Model, ServiceError> {
        property_image_service::create_image(&self.db, input, file).await
    }

    async fn update_image(&self, id: i32, update: PropertyImageUpdate) -> Result<Option<property_image::Model>, ServiceError> {
        property_image_service::update_image(&self.db, id, update).await
    }

    async fn replace_image_file(&self, id: i32, file: Option<Vec<u8>>) -> Result<Option<property_image::Model>, ServiceError> {
        property_image_service::replace_image_file(&self.db, id, file).await
    }

    async fn delete_image(&self, id: i32) -> Result<bool, ServiceError> {
        property_image_service::delete_image(&self.db, id).await
    }

    async fn list_images_by_property(&self, property_id: i32) -> Result<Vec<property_image::Model>, ServiceError> {
        property_image_service::list_images_by_property(&self.db, property_id).await
    }
}

#[async_trait]
impl PropertyTraceRepository for SeaOrmCatalogStore {
    async fn list_traces(&self) -> Result<Vec<property_trace::Model>, ServiceError> {
        property_trace_service::list_traces(&self.db).await
    }

    async fn get_trace(&self, id: i32) -> Result<Option<property_trace::Model>, ServiceError> {
        property_trace_service::get_trace(&self.db, id).await
    }

    async fn insert_trace(&self, input: PropertyTraceInput) -> Result<property_trace::Model, ServiceError> {
        property_trace_service::create_trace(&self.db, input).await
    }

    async fn update_trace(&self, id: i32, input: &PropertyTraceInput) -> Result<Option<property_trace::Model>, ServiceError> {
        property_trace_service::update_trace(&self.db, id, input).await
    }

    async fn delete_trace(&self, id: i32) -> Result<bool, ServiceError> {
        property_trace_service::delete_trace(&self.db, id).await
    }

    async fn list_traces_by_property(&self, property_id: i32) -> Result<Vec<property_trace::Model>, ServiceError> {
        property_trace_service::list_traces_by_property(&self.db, property_id).await
    }
}

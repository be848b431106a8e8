use async_trait::async_trait;
use models::property_image;

use crate::domain::{PropertyImageInput, PropertyImageUpdate};
use crate::errors::ServiceError;

#[async_trait]
pub trait PropertyImageRepository: Send + Sync {
    async fn list_images(&self) -> Result<Vec<property_image::Model>, ServiceError>;
    async fn get_image(&self, id: i32) -> Result<Option<property_image::Model>, ServiceError>;
    async fn insert_image(&self, input: PropertyImageInput, file: Option<Vec<u8>>) -> Result<property_image::Model, ServiceError>;
    async fn update_image(&self, id: i32, update: PropertyImageUpdate) -> Result<Option<property_image::Model>, ServiceError>;
    async fn replace_image_file(&self, id: i32, file: Option<Vec<u8>>) -> Result<Option<property_image::Model>, ServiceError>;
    async fn delete_image(&self, id: i32) -> Result<bool, ServiceError>;
    async fn list_images_by_property(&self, property_id: i32) -> Result<Vec<property_image::Model>, ServiceError>;
}

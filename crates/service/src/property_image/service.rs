use std::sync::Arc;

use models::property_image;
use tracing::{info, instrument};

use super::repository::PropertyImageRepository;
use crate::domain::{PropertyImageInput, PropertyImageUpdate};
use crate::errors::{ServiceError, WriteOutcome};
use crate::property::PropertyRepository;

/// Photos attached to properties, with their enabled flag and raw bytes.
pub struct PropertyImageService<S> {
    store: Arc<S>,
}

impl<S> Clone for PropertyImageService<S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<S: PropertyImageRepository + PropertyRepository> PropertyImageService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<property_image::Model>, ServiceError> {
        self.store.list_images().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<property_image::Model>, ServiceError> {
        self.store.get_image(id).await
    }

    #[instrument(skip(self, file), fields(property_id = input.property_id, file_bytes = file.as_ref().map_or(0, Vec::len)))]
    pub async fn create(&self, input: PropertyImageInput, file: Option<Vec<u8>>) -> Result<WriteOutcome<property_image::Model>, ServiceError> {
        if self.store.get_property(input.property_id).await?.is_none() {
            return Ok(WriteOutcome::MissingParent("property"));
        }
        let created = self.store.insert_image(input, file).await?;
        info!(image_id = created.id, "property_image_created");
        Ok(WriteOutcome::Written(created))
    }

    /// Only `enabled` changes; the owning property is fixed at creation.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, update: PropertyImageUpdate) -> Result<WriteOutcome<property_image::Model>, ServiceError> {
        let outcome = WriteOutcome::from(self.store.update_image(id, update).await?);
        if outcome.is_written() {
            info!(image_id = id, enabled = update.enabled, "property_image_updated");
        }
        Ok(outcome)
    }

    #[instrument(skip(self, file))]
    pub async fn replace_file(&self, id: i32, file: Option<Vec<u8>>) -> Result<Option<property_image::Model>, ServiceError> {
        let updated = self.store.replace_image_file(id, file).await?;
        if updated.is_some() {
            info!(image_id = id, "property_image_file_replaced");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.store.delete_image(id).await?;
        if deleted {
            info!(image_id = id, "property_image_deleted");
        }
        Ok(deleted)
    }
}

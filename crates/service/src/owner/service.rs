use std::sync::Arc;

use models::{owner, property};
use tracing::{info, instrument};

use super::repository::OwnerRepository;
use crate::domain::OwnerInput;
use crate::errors::{ServiceError, WriteOutcome};
use crate::property::PropertyRepository;

/// Owner records and the properties hanging off them.
pub struct OwnerService<S> {
    store: Arc<S>,
}

impl<S> Clone for OwnerService<S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<S: OwnerRepository + PropertyRepository> OwnerService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<owner::Model>, ServiceError> {
        self.store.list_owners().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<owner::Model>, ServiceError> {
        self.store.get_owner(id).await
    }

    /// Create an owner, optionally with a photo.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{MemoryCatalogStore, OwnerService};
    /// use service::domain::OwnerInput;
    /// let svc = OwnerService::new(Arc::new(MemoryCatalogStore::new()));
    /// let input = OwnerInput {
    ///     name: "John Doe".into(),
    ///     address: "123 Elm Street".into(),
    ///     birthday: chrono::NaiveDate::from_ymd_opt(1975, 8, 15).unwrap(),
    /// };
    /// let owner = tokio_test::block_on(svc.create(input, None)).unwrap();
    /// let found = tokio_test::block_on(svc.get(owner.id)).unwrap();
    /// assert_eq!(found, Some(owner));
    /// ```
    #[instrument(skip(self, input, photo), fields(name = %input.name, photo_bytes = photo.as_ref().map_or(0, Vec::len)))]
    pub async fn create(&self, input: OwnerInput, photo: Option<Vec<u8>>) -> Result<owner::Model, ServiceError> {
        input.validate()?;
        let created = self.store.insert_owner(input, photo).await?;
        info!(owner_id = created.id, "owner_created");
        Ok(created)
    }

    /// Overwrite name, address and birthday. The photo is kept.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: OwnerInput) -> Result<WriteOutcome<owner::Model>, ServiceError> {
        input.validate()?;
        let outcome = WriteOutcome::from(self.store.update_owner(id, &input).await?);
        if outcome.is_written() {
            info!(owner_id = id, "owner_updated");
        }
        Ok(outcome)
    }

    /// Replace or clear the photo; `None` when the owner does not exist.
    #[instrument(skip(self, photo))]
    pub async fn replace_photo(&self, id: i32, photo: Option<Vec<u8>>) -> Result<Option<owner::Model>, ServiceError> {
        let updated = self.store.replace_owner_photo(id, photo).await?;
        if updated.is_some() {
            info!(owner_id = id, "owner_photo_replaced");
        }
        Ok(updated)
    }

    /// Delete the owner together with its properties and their images and traces.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.store.delete_owner(id).await?;
        if deleted {
            info!(owner_id = id, "owner_deleted");
        }
        Ok(deleted)
    }

    /// Properties of an owner; `None` when the owner does not exist.
    pub async fn properties(&self, owner_id: i32) -> Result<Option<Vec<property::Model>>, ServiceError> {
        if self.store.get_owner(owner_id).await?.is_none() {
            return Ok(None);
        }
        Ok(Some(self.store.list_properties_by_owner(owner_id).await?))
    }
}

use std::sync::Arc;

use configs::NameMatch;
use models::{property, property_image, property_trace};
use tracing::{debug, info, instrument};

use super::filter::PropertyFilter;
use super::repository::PropertyRepository;
use crate::domain::PropertyInput;
use crate::errors::{ServiceError, WriteOutcome};
use crate::owner::OwnerRepository;
use crate::property_image::PropertyImageRepository;
use crate::property_trace::PropertyTraceRepository;

/// Property records, search and child listings.
pub struct PropertyService<S> {
    store: Arc<S>,
    name_match: NameMatch,
}

impl<S> Clone for PropertyService<S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), name_match: self.name_match }
    }
}

impl<S> PropertyService<S>
where
    S: PropertyRepository + OwnerRepository + PropertyImageRepository + PropertyTraceRepository,
{
    pub fn new(store: Arc<S>, name_match: NameMatch) -> Self {
        Self { store, name_match }
    }

    pub async fn list(&self) -> Result<Vec<property::Model>, ServiceError> {
        self.store.list_properties().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<property::Model>, ServiceError> {
        self.store.get_property(id).await
    }

    /// Create a property for an existing owner.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{MemoryCatalogStore, PropertyService, WriteOutcome};
    /// use service::domain::PropertyInput;
    /// let svc = PropertyService::new(Arc::new(MemoryCatalogStore::new()), Default::default());
    /// let input = PropertyInput {
    ///     name: "Modern Villa".into(),
    ///     address: "789 Pine Road".into(),
    ///     price: 500000,
    ///     code_internal: "MODV123".into(),
    ///     year: 2015,
    ///     owner_id: 1,
    /// };
    /// let outcome = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(outcome, WriteOutcome::MissingParent("owner"));
    /// ```
    #[instrument(skip(self, input), fields(owner_id = input.owner_id, code = %input.code_internal))]
    pub async fn create(&self, input: PropertyInput) -> Result<WriteOutcome<property::Model>, ServiceError> {
        input.validate()?;
        if self.store.get_owner(input.owner_id).await?.is_none() {
            debug!("owner missing");
            return Ok(WriteOutcome::MissingParent("owner"));
        }
        let created = self.store.insert_property(input).await?;
        info!(property_id = created.id, "property_created");
        Ok(WriteOutcome::Written(created))
    }

    /// Overwrite every field; the (possibly new) owner must exist.
    #[instrument(skip(self, input), fields(owner_id = input.owner_id))]
    pub async fn update(&self, id: i32, input: PropertyInput) -> Result<WriteOutcome<property::Model>, ServiceError> {
        input.validate()?;
        if self.store.get_property(id).await?.is_none() {
            return Ok(WriteOutcome::NotFound);
        }
        if self.store.get_owner(input.owner_id).await?.is_none() {
            return Ok(WriteOutcome::MissingParent("owner"));
        }
        let outcome = WriteOutcome::from(self.store.update_property(id, &input).await?);
        if outcome.is_written() {
            info!(property_id = id, "property_updated");
        }
        Ok(outcome)
    }

    /// Delete the property with its images and traces.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.store.delete_property(id).await?;
        if deleted {
            info!(property_id = id, "property_deleted");
        }
        Ok(deleted)
    }

    /// Properties matching every present predicate of `filter`, id ascending.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{MemoryCatalogStore, PropertyFilter, PropertyService};
    /// let svc = PropertyService::new(Arc::new(MemoryCatalogStore::new()), Default::default());
    /// let all = tokio_test::block_on(svc.filter(&PropertyFilter::default())).unwrap();
    /// assert!(all.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn filter(&self, filter: &PropertyFilter) -> Result<Vec<property::Model>, ServiceError> {
        let rows = self.store.filter_properties(filter, self.name_match).await?;
        debug!(matched = rows.len(), "property_filter");
        Ok(rows)
    }

    /// Images of a property; `None` when the property does not exist.
    pub async fn images(&self, id: i32) -> Result<Option<Vec<property_image::Model>>, ServiceError> {
        if self.store.get_property(id).await?.is_none() {
            return Ok(None);
        }
        Ok(Some(self.store.list_images_by_property(id).await?))
    }

    /// Traces of a property; `None` when the property does not exist.
    pub async fn traces(&self, id: i32) -> Result<Option<Vec<property_trace::Model>>, ServiceError> {
        if self.store.get_property(id).await?.is_none() {
            return Ok(None);
        }
        Ok(Some(self.store.list_traces_by_property(id).await?))
    }
}

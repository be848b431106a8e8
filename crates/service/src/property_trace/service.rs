use std::sync::Arc;

use models::property_trace;
use tracing::{info, instrument};

use super::repository::PropertyTraceRepository;
use crate::domain::PropertyTraceInput;
use crate::errors::{ServiceError, WriteOutcome};
use crate::property::PropertyRepository;

/// Sale history entries of properties.
pub struct PropertyTraceService<S> {
    store: Arc<S>,
}

impl<S> Clone for PropertyTraceService<S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<S: PropertyTraceRepository + PropertyRepository> PropertyTraceService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<property_trace::Model>, ServiceError> {
        self.store.list_traces().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<property_trace::Model>, ServiceError> {
        self.store.get_trace(id).await
    }

    #[instrument(skip(self, input), fields(property_id = input.property_id))]
    pub async fn create(&self, input: PropertyTraceInput) -> Result<WriteOutcome<property_trace::Model>, ServiceError> {
        input.validate()?;
        if self.store.get_property(input.property_id).await?.is_none() {
            return Ok(WriteOutcome::MissingParent("property"));
        }
        let created = self.store.insert_trace(input).await?;
        info!(trace_id = created.id, "property_trace_created");
        Ok(WriteOutcome::Written(created))
    }

    /// Overwrite every field; the (possibly new) property must exist.
    #[instrument(skip(self, input), fields(property_id = input.property_id))]
    pub async fn update(&self, id: i32, input: PropertyTraceInput) -> Result<WriteOutcome<property_trace::Model>, ServiceError> {
        input.validate()?;
        if self.store.get_trace(id).await?.is_none() {
            return Ok(WriteOutcome::NotFound);
        }
        if self.store.get_property(input.property_id).await?.is_none() {
            return Ok(WriteOutcome::MissingParent("property"));
        }
        let outcome = WriteOutcome::from(self.store.update_trace(id, &input).await?);
        if outcome.is_written() {
            info!(trace_id = id, "property_trace_updated");
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.store.delete_trace(id).await?;
        if deleted {
            info!(trace_id = id, "property_trace_deleted");
        }
        Ok(deleted)
    }
}

use async_trait::async_trait;
use configs::NameMatch;
use models::property;

use super::filter::PropertyFilter;
use crate::domain::PropertyInput;
use crate::errors::ServiceError;

/// Persistence for properties. Deleting a property removes its images and traces.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn list_properties(&self) -> Result<Vec<property::Model>, ServiceError>;
    async fn get_property(&self, id: i32) -> Result<Option<property::Model>, ServiceError>;
    async fn insert_property(&self, input: PropertyInput) -> Result<property::Model, ServiceError>;
    async fn update_property(&self, id: i32, input: &PropertyInput) -> Result<Option<property::Model>, ServiceError>;
    async fn delete_property(&self, id: i32) -> Result<bool, ServiceError>;
    async fn list_properties_by_owner(&self, owner_id: i32) -> Result<Vec<property::Model>, ServiceError>;
    /// Properties satisfying every predicate of `filter`, id ascending.
    async fn filter_properties(&self, filter: &PropertyFilter, mode: NameMatch) -> Result<Vec<property::Model>, ServiceError>;
}

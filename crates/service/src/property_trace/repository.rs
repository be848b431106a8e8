use async_trait::async_trait;
use models::property_trace;

use crate::domain::PropertyTraceInput;
use crate::errors::ServiceError;

#[async_trait]
pub trait PropertyTraceRepository: Send + Sync {
    async fn list_traces(&self) -> Result<Vec<property_trace::Model>, ServiceError>;
    async fn get_trace(&self, id: i32) -> Result<Option<property_trace::Model>, ServiceError>;
    async fn insert_trace(&self, input: PropertyTraceInput) -> Result<property_trace::Model, ServiceError>;
    async fn update_trace(&self, id: i32, input: &PropertyTraceInput) -> Result<Option<property_trace::Model>, ServiceError>;
    async fn delete_trace(&self, id: i32) -> Result<bool, ServiceError>;
    async fn list_traces_by_property(&self, property_id: i32) -> Result<Vec<property_trace::Model>, ServiceError>;
}

use async_trait::async_trait;
use models::owner;

use crate::domain::OwnerInput;
use crate::errors::ServiceError;

/// Persistence for owners. Deleting an owner removes its properties and their children.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn list_owners(&self) -> Result<Vec<owner::Model>, ServiceError>;
    async fn get_owner(&self, id: i32) -> Result<Option<owner::Model>, ServiceError>;
    async fn insert_owner(&self, input: OwnerInput, photo: Option<Vec<u8>>) -> Result<owner::Model, ServiceError>;
    async fn update_owner(&self, id: i32, input: &OwnerInput) -> Result<Option<owner::Model>, ServiceError>;
    async fn replace_owner_photo(&self, id: i32, photo: Option<Vec<u8>>) -> Result<Option<owner::Model>, ServiceError>;
    async fn delete_owner(&self, id: i32) -> Result<bool, ServiceError>;
}

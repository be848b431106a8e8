use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use models::{owner, property};

use crate::db::property_service::purge_children;
use crate::domain::OwnerInput;
use crate::errors::ServiceError;

/// List owners, id ascending.
pub async fn list_owners(db: &DatabaseConnection) -> Result<Vec<owner::Model>, ServiceError> {
    Ok(owner::Entity::find().order_by_asc(owner::Column::Id).all(db).await?)
}

/// Get owner by id.
pub async fn get_owner(db: &DatabaseConnection, id: i32) -> Result<Option<owner::Model>, ServiceError> {
    Ok(owner::Entity::find_by_id(id).one(db).await?)
}

/// Create an owner with an optional photo.
pub async fn create_owner(db: &DatabaseConnection, input: OwnerInput, photo: Option<Vec<u8>>) -> Result<owner::Model, ServiceError> {
    Ok(input.into_active_model(photo).insert(db).await?)
}

/// Overwrite name, address and birthday. `None` when the owner does not exist.
pub async fn update_owner(db: &DatabaseConnection, id: i32, input: &OwnerInput) -> Result<Option<owner::Model>, ServiceError> {
    let Some(mut row) = owner::Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    input.apply_to(&mut row);
    let am = owner::ActiveModel::from(row).reset_all();
    Ok(Some(am.update(db).await?))
}

/// Replace (or clear) the photo bytes.
pub async fn replace_owner_photo(db: &DatabaseConnection, id: i32, photo: Option<Vec<u8>>) -> Result<Option<owner::Model>, ServiceError> {
    let Some(found) = owner::Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: owner::ActiveModel = found.into();
    am.photo = Set(photo);
    Ok(Some(am.update(db).await?))
}

/// Delete an owner with its properties, their images and traces, in one transaction.
pub async fn delete_owner(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    if owner::Entity::find_by_id(id).one(&txn).await?.is_none() {
        txn.rollback().await?;
        return Ok(false);
    }
    let property_ids: Vec<i32> = property::Entity::find()
        .select_only()
        .column(property::Column::Id)
        .filter(property::Column::OwnerId.eq(id))
        .into_tuple()
        .all(&txn)
        .await?;
    purge_children(&txn, &property_ids).await?;
    property::Entity::delete_many()
        .filter(property::Column::OwnerId.eq(id))
        .exec(&txn)
        .await?;
    let res = owner::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(res.rows_affected > 0)
}

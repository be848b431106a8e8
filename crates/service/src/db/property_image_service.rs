use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use models::property_image;

use crate::domain::{PropertyImageInput, PropertyImageUpdate};
use crate::errors::ServiceError;

/// List images, id ascending.
pub async fn list_images(db: &DatabaseConnection) -> Result<Vec<property_image::Model>, ServiceError> {
    Ok(property_image::Entity::find().order_by_asc(property_image::Column::Id).all(db).await?)
}

/// Get image by id.
pub async fn get_image(db: &DatabaseConnection, id: i32) -> Result<Option<property_image::Model>, ServiceError> {
    Ok(property_image::Entity::find_by_id(id).one(db).await?)
}

/// Create an image for an existing property.
pub async fn create_image(db: &DatabaseConnection, input: PropertyImageInput, file: Option<Vec<u8>>) -> Result<property_image::Model, ServiceError> {
    Ok(input.into_active_model(file).insert(db).await?)
}

/// Toggle the enabled flag.
pub async fn update_image(db: &DatabaseConnection, id: i32, update: PropertyImageUpdate) -> Result<Option<property_image::Model>, ServiceError> {
    let Some(mut row) = property_image::Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    update.apply_to(&mut row);
    let am = property_image::ActiveModel::from(row).reset_all();
    Ok(Some(am.update(db).await?))
}

/// Replace (or clear) the file bytes.
pub async fn replace_image_file(db: &DatabaseConnection, id: i32, file: Option<Vec<u8>>) -> Result<Option<property_image::Model>, ServiceError> {
    let Some(found) = property_image::Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: property_image::ActiveModel = found.into();
    am.file = Set(file);
    Ok(Some(am.update(db).await?))
}

/// Delete image.
pub async fn delete_image(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = property_image::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Images of one property, id ascending.
pub async fn list_images_by_property(db: &DatabaseConnection, property_id: i32) -> Result<Vec<property_image::Model>, ServiceError> {
    Ok(property_image::Entity::find()
        .filter(property_image::Column::PropertyId.eq(property_id))
        .order_by_asc(property_image::Column::Id)
        .all(db)
        .await?)
}

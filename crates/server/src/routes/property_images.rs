use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::property_image;
use service::domain::{PropertyImageInput, PropertyImageUpdate};

use crate::errors::{written, JsonApiError};
use crate::extract::EntityId;
use crate::openapi::{ErrorDoc, FileUploadDoc, PropertyImageDoc, PropertyImageUpdateDoc, PropertyImageUploadDoc};
use crate::state::ServerState;
use crate::upload::UploadForm;

const FILE_PARTS: &[&str] = &["file", "photo"];

#[utoipa::path(get, path = "/api/property-images", tag = "property-images",
    responses((status = 200, body = [PropertyImageDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<property_image::Model>>, JsonApiError> {
    Ok(Json(state.images.list().await?))
}

#[utoipa::path(get, path = "/api/property-images/{id}", tag = "property-images",
    params(("id" = i32, Path, description = "Image id")),
    responses((status = 200, body = PropertyImageDoc), (status = 404, body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Json<property_image::Model>, JsonApiError> {
    state.images.get(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("property image", id))
}

/// Multipart: `property_id`, optional `enabled` (default false) and an optional `file` part.
#[utoipa::path(post, path = "/api/property-images", tag = "property-images",
    request_body(content = PropertyImageUploadDoc, content_type = "multipart/form-data"),
    responses((status = 201, body = PropertyImageDoc), (status = 400, body = ErrorDoc)))]
pub async fn create(State(state): State<ServerState>, multipart: Multipart) -> Result<(StatusCode, Json<property_image::Model>), JsonApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let input = PropertyImageInput {
        property_id: form.parse("property_id")?,
        enabled: form.parse_or("enabled", false)?,
    };
    let file = form.take_file(FILE_PARTS);
    let outcome = state.images.create(input, file).await?;
    Ok((StatusCode::CREATED, Json(written(outcome, "property image", 0)?)))
}

#[utoipa::path(put, path = "/api/property-images/{id}", tag = "property-images",
    params(("id" = i32, Path, description = "Image id")),
    request_body = PropertyImageUpdateDoc,
    responses((status = 200, body = PropertyImageDoc), (status = 404, body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
    body: Result<Json<PropertyImageUpdate>, JsonRejection>,
) -> Result<Json<property_image::Model>, JsonApiError> {
    let Json(update) = body?;
    let outcome = state.images.update(id, update).await?;
    Ok(Json(written(outcome, "property image", id)?))
}

#[utoipa::path(delete, path = "/api/property-images/{id}", tag = "property-images",
    params(("id" = i32, Path, description = "Image id")),
    responses((status = 204, description = "Deleted"), (status = 404, body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<StatusCode, JsonApiError> {
    if state.images.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("property image", id))
    }
}

#[utoipa::path(get, path = "/api/property-images/{id}/file", tag = "property-images",
    params(("id" = i32, Path, description = "Image id")),
    responses((status = 200, description = "Raw image bytes", content_type = "application/octet-stream"), (status = 404, body = ErrorDoc)))]
pub async fn get_file(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Response, JsonApiError> {
    let found = state.images.get(id).await?.ok_or_else(|| JsonApiError::not_found("property image", id))?;
    let file = found
        .file
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("property image {id} has no file"))))?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], file).into_response())
}

/// Multipart with a `file` part; omitting it clears the file.
#[utoipa::path(put, path = "/api/property-images/{id}/file", tag = "property-images",
    params(("id" = i32, Path, description = "Image id")),
    request_body(content = FileUploadDoc, content_type = "multipart/form-data"),
    responses((status = 200, body = PropertyImageDoc), (status = 404, body = ErrorDoc)))]
pub async fn replace_file(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
    multipart: Multipart,
) -> Result<Json<property_image::Model>, JsonApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let file = form.take_file(FILE_PARTS);
    state
        .images
        .replace_file(id, file)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("property image", id))
}

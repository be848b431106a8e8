use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{owner, property};
use service::domain::OwnerInput;

use crate::errors::{written, JsonApiError};
use crate::extract::EntityId;
use crate::openapi::{ErrorDoc, OwnerDoc, OwnerInputDoc, OwnerUploadDoc, PhotoUploadDoc, PropertyDoc};
use crate::state::ServerState;
use crate::upload::UploadForm;

#[utoipa::path(get, path = "/api/owners", tag = "owners",
    responses((status = 200, description = "All owners, id ascending", body = [OwnerDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<owner::Model>>, JsonApiError> {
    Ok(Json(state.owners.list().await?))
}

#[utoipa::path(get, path = "/api/owners/{id}", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    responses((status = 200, body = OwnerDoc), (status = 404, body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Json<owner::Model>, JsonApiError> {
    state.owners.get(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("owner", id))
}

/// Multipart: `name`, `address`, `birthday` (YYYY-MM-DD) and an optional `photo` part.
#[utoipa::path(post, path = "/api/owners", tag = "owners",
    request_body(content = OwnerUploadDoc, content_type = "multipart/form-data"),
    responses((status = 201, body = OwnerDoc), (status = 400, body = ErrorDoc)))]
pub async fn create(State(state): State<ServerState>, multipart: Multipart) -> Result<(StatusCode, Json<owner::Model>), JsonApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let input = OwnerInput {
        name: form.text("name")?,
        address: form.text("address")?,
        birthday: form.date("birthday")?,
    };
    let photo = form.take_file(&["photo"]);
    let created = state.owners.create(input, photo).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(put, path = "/api/owners/{id}", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    request_body = OwnerInputDoc,
    responses((status = 200, body = OwnerDoc), (status = 400, body = ErrorDoc), (status = 404, body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
    body: Result<Json<OwnerInput>, JsonRejection>,
) -> Result<Json<owner::Model>, JsonApiError> {
    let Json(input) = body?;
    let outcome = state.owners.update(id, input).await?;
    Ok(Json(written(outcome, "owner", id)?))
}

#[utoipa::path(delete, path = "/api/owners/{id}", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    responses((status = 204, description = "Deleted with its properties"), (status = 404, body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<StatusCode, JsonApiError> {
    if state.owners.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("owner", id))
    }
}

#[utoipa::path(get, path = "/api/owners/{id}/photo", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    responses((status = 200, description = "Raw photo bytes", content_type = "application/octet-stream"), (status = 404, body = ErrorDoc)))]
pub async fn get_photo(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Response, JsonApiError> {
    let found = state.owners.get(id).await?.ok_or_else(|| JsonApiError::not_found("owner", id))?;
    let photo = found
        .photo
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("owner {id} has no photo"))))?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], photo).into_response())
}

/// Multipart with a `photo` part; omitting it clears the photo.
#[utoipa::path(put, path = "/api/owners/{id}/photo", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    request_body(content = PhotoUploadDoc, content_type = "multipart/form-data"),
    responses((status = 200, body = OwnerDoc), (status = 404, body = ErrorDoc)))]
pub async fn replace_photo(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
    multipart: Multipart,
) -> Result<Json<owner::Model>, JsonApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let photo = form.take_file(&["photo"]);
    state
        .owners
        .replace_photo(id, photo)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("owner", id))
}

#[utoipa::path(get, path = "/api/owners/{id}/properties", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    responses((status = 200, body = [PropertyDoc]), (status = 404, body = ErrorDoc)))]
pub async fn properties(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Json<Vec<property::Model>>, JsonApiError> {
    state.owners.properties(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("owner", id))
}

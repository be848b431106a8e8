use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use models::{property, property_image, property_trace};
use service::domain::PropertyInput;
use service::PropertyFilter;
use tracing::info;

use crate::errors::{written, JsonApiError};
use crate::extract::{ApiQuery, EntityId};
use crate::openapi::{ErrorDoc, PropertyDoc, PropertyImageDoc, PropertyInputDoc, PropertyTraceDoc};
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/properties", tag = "properties",
    responses((status = 200, description = "All properties, id ascending", body = [PropertyDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<property::Model>>, JsonApiError> {
    Ok(Json(state.properties.list().await?))
}

/// Conjunction of the given predicates; no parameters returns every property.
#[utoipa::path(get, path = "/api/properties/filter", tag = "properties",
    params(
        ("min_price" = Option<i32>, Query, description = "Minimum price, inclusive"),
        ("max_price" = Option<i32>, Query, description = "Maximum price, inclusive"),
        ("year" = Option<i32>, Query, description = "Exact build year"),
        ("name" = Option<String>, Query, description = "Substring of the name; blank is ignored"),
    ),
    responses((status = 200, body = [PropertyDoc]), (status = 400, body = ErrorDoc)))]
pub async fn filter(State(state): State<ServerState>, ApiQuery(filter): ApiQuery<PropertyFilter>) -> Result<Json<Vec<property::Model>>, JsonApiError> {
    let rows = state.properties.filter(&filter).await?;
    info!(matched = rows.len(), "property filter served");
    Ok(Json(rows))
}

#[utoipa::path(get, path = "/api/properties/{id}", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    responses((status = 200, body = PropertyDoc), (status = 404, body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Json<property::Model>, JsonApiError> {
    state.properties.get(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("property", id))
}

#[utoipa::path(post, path = "/api/properties", tag = "properties",
    request_body = PropertyInputDoc,
    responses((status = 201, body = PropertyDoc), (status = 400, body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<PropertyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<property::Model>), JsonApiError> {
    let Json(input) = body?;
    let outcome = state.properties.create(input).await?;
    Ok((StatusCode::CREATED, Json(written(outcome, "property", 0)?)))
}

#[utoipa::path(put, path = "/api/properties/{id}", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    request_body = PropertyInputDoc,
    responses((status = 200, body = PropertyDoc), (status = 400, body = ErrorDoc), (status = 404, body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
    body: Result<Json<PropertyInput>, JsonRejection>,
) -> Result<Json<property::Model>, JsonApiError> {
    let Json(input) = body?;
    let outcome = state.properties.update(id, input).await?;
    Ok(Json(written(outcome, "property", id)?))
}

#[utoipa::path(delete, path = "/api/properties/{id}", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    responses((status = 204, description = "Deleted with its images and traces"), (status = 404, body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<StatusCode, JsonApiError> {
    if state.properties.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("property", id))
    }
}

#[utoipa::path(get, path = "/api/properties/{id}/images", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    responses((status = 200, body = [PropertyImageDoc]), (status = 404, body = ErrorDoc)))]
pub async fn images(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Json<Vec<property_image::Model>>, JsonApiError> {
    state.properties.images(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("property", id))
}

#[utoipa::path(get, path = "/api/properties/{id}/traces", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    responses((status = 200, body = [PropertyTraceDoc]), (status = 404, body = ErrorDoc)))]
pub async fn traces(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Json<Vec<property_trace::Model>>, JsonApiError> {
    state.properties.traces(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("property", id))
}

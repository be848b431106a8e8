use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use models::property_trace;
use service::domain::PropertyTraceInput;

use crate::errors::{written, JsonApiError};
use crate::extract::EntityId;
use crate::openapi::{ErrorDoc, PropertyTraceDoc, PropertyTraceInputDoc};
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/property-traces", tag = "property-traces",
    responses((status = 200, body = [PropertyTraceDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<property_trace::Model>>, JsonApiError> {
    Ok(Json(state.traces.list().await?))
}

#[utoipa::path(get, path = "/api/property-traces/{id}", tag = "property-traces",
    params(("id" = i32, Path, description = "Trace id")),
    responses((status = 200, body = PropertyTraceDoc), (status = 404, body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<Json<property_trace::Model>, JsonApiError> {
    state.traces.get(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("property trace", id))
}

#[utoipa::path(post, path = "/api/property-traces", tag = "property-traces",
    request_body = PropertyTraceInputDoc,
    responses((status = 201, body = PropertyTraceDoc), (status = 400, body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<PropertyTraceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<property_trace::Model>), JsonApiError> {
    let Json(input) = body?;
    let outcome = state.traces.create(input).await?;
    Ok((StatusCode::CREATED, Json(written(outcome, "property trace", 0)?)))
}

#[utoipa::path(put, path = "/api/property-traces/{id}", tag = "property-traces",
    params(("id" = i32, Path, description = "Trace id")),
    request_body = PropertyTraceInputDoc,
    responses((status = 200, body = PropertyTraceDoc), (status = 400, body = ErrorDoc), (status = 404, body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
    body: Result<Json<PropertyTraceInput>, JsonRejection>,
) -> Result<Json<property_trace::Model>, JsonApiError> {
    let Json(input) = body?;
    let outcome = state.traces.update(id, input).await?;
    Ok(Json(written(outcome, "property trace", id)?))
}

#[utoipa::path(delete, path = "/api/property-traces/{id}", tag = "property-traces",
    params(("id" = i32, Path, description = "Trace id")),
    responses((status = 204, description = "Deleted"), (status = 404, body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, EntityId(id): EntityId) -> Result<StatusCode, JsonApiError> {
    if state.traces.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("property trace", id))
    }
}

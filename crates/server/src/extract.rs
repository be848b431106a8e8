//! Path and query extractors whose rejections render as `JsonApiError`.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use axum::{async_trait, RequestPartsExt};
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// Numeric `:id` path segment.
pub struct EntityId(pub i32);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for EntityId {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = parts.extract::<Path<i32>>().await?;
        Ok(EntityId(id))
    }
}

/// Query string deserialized into `T`.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = parts.extract::<Query<T>>().await?;
        Ok(ApiQuery(value))
    }
}

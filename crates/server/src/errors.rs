use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::{ServiceError, WriteOutcome};
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": title, "detail": message}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(detail.into()))
    }

    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("{entity} {id} not found")))
    }

    pub fn missing_parent(parent: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Missing Parent", Some(format!("referenced {parent} does not exist")))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.title, "detail": self.detail}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            }
            ServiceError::ConstraintViolation(_) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Constraint Violation", Some(e.to_string()))
            }
            ServiceError::Db(_) => {
                error!(err = %e, "storage failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        JsonApiError::bad_request(e.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(e: PathRejection) -> Self {
        JsonApiError::bad_request(e.body_text())
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(e: QueryRejection) -> Self {
        JsonApiError::bad_request(e.body_text())
    }
}

/// Turn a write outcome into the record or the matching 404/400.
pub fn written<T>(outcome: WriteOutcome<T>, entity: &str, id: i32) -> Result<T, JsonApiError> {
    match outcome {
        WriteOutcome::Written(v) => Ok(v),
        WriteOutcome::NotFound => Err(JsonApiError::not_found(entity, id)),
        WriteOutcome::MissingParent(parent) => Err(JsonApiError::missing_parent(parent)),
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid bind address: {0}")]
    BindAddr(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

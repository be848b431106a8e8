use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A write referenced a row that does not exist (or broke a unique key).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}

impl ServiceError {
    pub fn missing_parent(entity: &str, id: i32) -> Self {
        Self::ConstraintViolation(format!("{entity} {id} does not exist"))
    }

    /// Validation-class failures the caller can fix by changing its input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ConstraintViolation(_) | Self::Model(_))
    }
}

/// Result of a create/update whose expected negatives are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome<T> {
    Written(T),
    /// The target row does not exist.
    NotFound,
    /// A referenced parent (`"owner"`, `"property"`) does not exist.
    MissingParent(&'static str),
}

impl<T> WriteOutcome<T> {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }

    pub fn written(self) -> Option<T> {
        match self {
            Self::Written(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WriteOutcome<U> {
        match self {
            Self::Written(v) => WriteOutcome::Written(f(v)),
            Self::NotFound => WriteOutcome::NotFound,
            Self::MissingParent(p) => WriteOutcome::MissingParent(p),
        }
    }
}

impl<T> From<Option<T>> for WriteOutcome<T> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::NotFound, Self::Written)
    }
}

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Invalid input: {0}")]
    Validation(String),

    /// A client-supplied foreign key that does not resolve. This is a bad
    /// request, not a missing resource.
    #[error("{resource} {id} does not exist")]
    InvalidReference { resource: &'static str, id: i64 },

    #[error("{0} is required")]
    MissingReference(&'static str),

    #[error("Supplier with tax id '{0}' already exists")]
    DuplicateTaxId(String),

    #[error("{resource} {id} is still referenced by products")]
    InUse { resource: &'static str, id: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl InventoryError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn invalid_reference(resource: &'static str, id: i64) -> Self {
        Self::InvalidReference { resource, id }
    }
}

impl From<DbErr> for InventoryError {
    fn from(err: DbErr) -> Self {
        InventoryError::Internal(format!("Database error: {}", err))
    }
}

impl From<validator::ValidationErrors> for InventoryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        InventoryError::Validation(errors.to_string())
    }
}

/// True when the driver reported a unique index violation.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound { .. } => AppError::NotFound(err.to_string()),
            InventoryError::Validation(msg) => AppError::BadRequest(msg),
            InventoryError::InvalidReference { .. } | InventoryError::MissingReference(_) => {
                AppError::BadRequest(err.to_string())
            }
            InventoryError::DuplicateTaxId(_) | InventoryError::InUse { .. } => {
                AppError::Conflict(err.to_string())
            }
            InventoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

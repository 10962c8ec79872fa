//! Service error types.

use miette::Diagnostic;
use thiserror::Error;
use tracing::warn;

use crate::db::DbError;

/// Errors surfaced by question service operations.
///
/// The variants mirror the HTTP taxonomy: `NotFound` becomes 404,
/// `Unprocessable` becomes 422 and `Database` (a store failure in an
/// operation that does not absorb it) becomes 500.
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    #[error("Not found: {resource}")]
    #[diagnostic(code(trivia::service::not_found))]
    NotFound { resource: String },

    #[error("Unprocessable: {message}")]
    #[diagnostic(code(trivia::service::unprocessable))]
    Unprocessable { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),
}

impl ServiceError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        ServiceError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        ServiceError::Unprocessable {
            message: message.into(),
        }
    }

    /// Adapter for `map_err` that turns any store failure of `operation`
    /// into `Unprocessable`, logging the cause.
    pub(crate) fn absorb(operation: &'static str) -> impl FnOnce(DbError) -> ServiceError {
        move |e| {
            warn!(operation, error = %e, "store failure reported as unprocessable");
            ServiceError::Unprocessable {
                message: format!("{} failed: {}", operation, e),
            }
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

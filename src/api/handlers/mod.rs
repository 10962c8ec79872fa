//! HTTP handlers and the shared error body.

mod categories;
mod questions;
mod quizzes;
mod system;

#[cfg(test)]
mod questions_test;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;
pub use system::*;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::{IntoParams, ToSchema};

use crate::db::Question;
use crate::service::{ServiceError, parse_page};

// =============================================================================
// Shared DTOs
// =============================================================================

/// Error response DTO, identical for every failing request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code
    #[schema(example = 404)]
    pub error: u16,
    /// Short fixed description of the status
    #[schema(example = "resource not found")]
    pub message: String,
}

/// Question response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    #[schema(example = 9)]
    pub id: i64,
    #[schema(example = "What boxer's original name is Cassius Clay?")]
    pub question: String,
    #[schema(example = "Muhammad Ali")]
    pub answer: String,
    /// Category id
    #[schema(example = 4)]
    pub category: i64,
    #[schema(example = 1)]
    pub difficulty: i64,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

pub(crate) fn question_responses(questions: Vec<Question>) -> Vec<QuestionResponse> {
    questions.into_iter().map(QuestionResponse::from).collect()
}

/// `?page=N` query parameter.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page of 10 questions; invalid values mean page 1
    #[param(example = "1")]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

// =============================================================================
// Error mapping
// =============================================================================

pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Build the fixed error body for `status`.
pub fn error_response(status: StatusCode) -> HandlerError {
    let message = match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    };

    (
        status,
        Json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }),
    )
}

/// Map a service error to its status. Details stay in the log.
pub fn service_error(e: ServiceError) -> HandlerError {
    match e {
        ServiceError::NotFound { resource } => {
            debug!(%resource, "not found");
            error_response(StatusCode::NOT_FOUND)
        }
        ServiceError::Unprocessable { message } => {
            debug!(%message, "unprocessable");
            error_response(StatusCode::UNPROCESSABLE_ENTITY)
        }
        ServiceError::Database(e) => {
            error!(error = %e, "store failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Well-formed JSON with the wrong shape is unprocessable; anything that
/// is not JSON at all is a bad request.
pub fn json_rejection(rejection: JsonRejection) -> HandlerError {
    debug!(%rejection, "rejected request body");
    match rejection {
        JsonRejection::JsonDataError(_) => error_response(StatusCode::UNPROCESSABLE_ENTITY),
        _ => error_response(StatusCode::BAD_REQUEST),
    }
}

/// Non-integer ids never match a route.
pub fn path_rejection(rejection: PathRejection) -> HandlerError {
    debug!(%rejection, "rejected path");
    error_response(StatusCode::NOT_FOUND)
}

/// A query string that cannot be decoded, such as a repeated `page`.
pub fn query_rejection(rejection: QueryRejection) -> HandlerError {
    debug!(%rejection, "rejected query string");
    error_response(StatusCode::BAD_REQUEST)
}

/// Fallback for unknown paths.
pub async fn not_found() -> HandlerError {
    error_response(StatusCode::NOT_FOUND)
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed() -> HandlerError {
    error_response(StatusCode::METHOD_NOT_ALLOWED)
}

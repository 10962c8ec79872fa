//! Question management handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{CategoryMap, Database, NewQuestion};
use crate::service;

use super::{
    ErrorResponse, HandlerError, PageQuery, QuestionResponse, json_rejection, path_rejection,
    query_rejection, question_responses, service_error,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// One page of all questions
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
    /// Number of questions in the store
    #[schema(example = 19)]
    pub total_questions: usize,
    /// Categories that have at least one question, id → type
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Remaining questions after a delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub questions: Vec<QuestionResponse>,
}

/// Create question request DTO
///
/// Fields are not validated here; missing values are rejected by the store.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    #[schema(example = "Which country won the first ever soccer World Cup in 1930?")]
    pub question: Option<String>,
    #[schema(example = "Uruguay")]
    pub answer: Option<String>,
    /// Category id, number or numeric string
    #[serde(default, deserialize_with = "crate::serde_utils::lenient_int")]
    #[schema(value_type = Option<i64>, example = 6)]
    pub category: Option<i64>,
    /// Difficulty score, number or numeric string
    #[serde(default, deserialize_with = "crate::serde_utils::lenient_int")]
    #[schema(value_type = Option<i64>, example = 4)]
    pub difficulty: Option<i64>,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

/// Listing after a create
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionResponse {
    pub questions: Vec<QuestionResponse>,
    #[schema(example = 20)]
    pub total_questions: usize,
    /// Category of the submitted question
    #[schema(example = 6)]
    pub current_category: Option<i64>,
}

/// Search request DTO
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    /// Substring to look for, case-insensitive; absent matches everything
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

/// Search results
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
    #[schema(example = 2)]
    pub total_questions: usize,
    /// All categories, id → type. The field name is kept for existing clients.
    #[schema(value_type = Object)]
    pub current_category: CategoryMap,
}

// =============================================================================
// Handlers
// =============================================================================

/// List questions
///
/// Returns one page of 10 questions ordered by id
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponse),
        (status = 404, description = "Page is empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_questions<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, HandlerError> {
    let Query(query) = query.map_err(query_rejection)?;
    let listing = service::list_questions(state.db(), query.page())
        .await
        .map_err(service_error)?;

    Ok(Json(QuestionListResponse {
        questions: question_responses(listing.page.questions),
        total_questions: listing.page.total,
        categories: listing.categories,
    }))
}

/// Delete a question
///
/// Deletes the question and returns the requested page of the remaining ones
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(
        ("id" = i64, Path, description = "Question id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 422, description = "Question missing or store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_question<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<DeleteQuestionResponse>, HandlerError> {
    let Path(id) = id.map_err(path_rejection)?;
    let Query(query) = query.map_err(query_rejection)?;

    let page = service::delete_question(state.db(), id, query.page())
        .await
        .map_err(service_error)?;

    Ok(Json(DeleteQuestionResponse {
        questions: question_responses(page.questions),
    }))
}

/// Create a question
///
/// Inserts the question and returns the requested page of the updated listing
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 422, description = "Question rejected", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_question<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreateQuestionResponse>, HandlerError> {
    let Query(query) = query.map_err(query_rejection)?;
    let Json(req) = payload.map_err(json_rejection)?;
    let new = NewQuestion::from(req);

    let created = service::create_question(state.db(), &new, query.page())
        .await
        .map_err(service_error)?;

    Ok(Json(CreateQuestionResponse {
        questions: question_responses(created.page.questions),
        total_questions: created.page.total,
        current_category: created.current_category,
    }))
}

/// Search questions
///
/// Case-insensitive substring search over the question text
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponse),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 404, description = "No question matches", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn search_questions<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Json<SearchQuestionsResponse>, HandlerError> {
    let Json(req) = payload.map_err(json_rejection)?;
    let term = req.search_term.unwrap_or_default();

    let results = service::search_questions(state.db(), &term)
        .await
        .map_err(service_error)?;

    Ok(Json(SearchQuestionsResponse {
        questions: question_responses(results.questions),
        total_questions: results.total,
        current_category: results.categories,
    }))
}

//! Category handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{CategoryMap, Database};
use crate::service;

use super::{
    ErrorResponse, HandlerError, PageQuery, QuestionResponse, path_rejection, query_rejection,
    question_responses, service_error,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// All categories keyed by id
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// Category id → type
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// One page of a category's questions
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
    /// Questions in the category before pagination
    #[schema(example = 4)]
    pub total_questions: usize,
    /// The requested category id
    #[schema(example = 1)]
    pub current_category: i64,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_categories<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<CategoriesResponse>, HandlerError> {
    let categories = service::list_categories(state.db())
        .await
        .map_err(service_error)?;

    Ok(Json(CategoriesResponse { categories }))
}

/// List questions in a category
///
/// Returns one page of 10 questions whose category equals the path id
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of questions", body = CategoryQuestionsResponse),
        (status = 404, description = "No questions on this page", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_category_questions<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, HandlerError> {
    let Path(category) = id.map_err(path_rejection)?;
    let Query(query) = query.map_err(query_rejection)?;

    let page = service::questions_by_category(state.db(), category, query.page())
        .await
        .map_err(service_error)?;

    Ok(Json(CategoryQuestionsResponse {
        questions: question_responses(page.questions),
        total_questions: page.total,
        current_category: category,
    }))
}

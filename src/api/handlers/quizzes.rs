//! Quiz handlers.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, Id};
use crate::service::{self, QuizCategory, QuizRound, ServiceError};

use super::{
    ErrorResponse, HandlerError, PageQuery, QuestionResponse, json_rejection, query_rejection,
    service_error,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Category selection of a quiz
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategoryRequest {
    /// Category id, `0` for all categories; number or numeric string
    #[serde(default, deserialize_with = "crate::serde_utils::lenient_int")]
    #[schema(value_type = Option<i64>, example = 0)]
    pub id: Option<i64>,
}

/// A previously asked question, by id or as the question object itself
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PreviousQuestion {
    Id(i64),
    Question { id: i64 },
}

impl PreviousQuestion {
    pub fn id(&self) -> Id {
        match self {
            PreviousQuestion::Id(id) | PreviousQuestion::Question { id } => *id,
        }
    }
}

/// Quiz round request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategoryRequest>,
    /// Questions already asked in this quiz
    #[serde(default)]
    pub previous_questions: Vec<PreviousQuestion>,
}

impl QuizRequest {
    fn into_round(self, page: i64) -> Result<QuizRound, ServiceError> {
        let category = self
            .quiz_category
            .ok_or_else(|| ServiceError::unprocessable("quiz_category is required"))?
            .id
            .ok_or_else(|| ServiceError::unprocessable("quiz_category.id is required"))?;

        Ok(QuizRound {
            category: QuizCategory::from(category),
            previous_questions: self
                .previous_questions
                .iter()
                .map(PreviousQuestion::id)
                .collect(),
            page,
        })
    }
}

/// The next quiz question
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub question: QuestionResponse,
}

// =============================================================================
// Handlers
// =============================================================================

/// Play a quiz round
///
/// Returns a random question from the chosen category that is not among
/// the previous questions
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    params(PageQuery),
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question", body = QuizResponse),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 422, description = "No question left or invalid request", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn play_quiz<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, HandlerError> {
    let Query(query) = query.map_err(query_rejection)?;
    let Json(req) = payload.map_err(json_rejection)?;
    let round = req.into_round(query.page()).map_err(service_error)?;

    let question = service::quiz_pick(state.db(), &round, state.quiz_scope(), state.picker())
        .await
        .map_err(service_error)?;

    Ok(Json(QuizResponse {
        question: question.into(),
    }))
}

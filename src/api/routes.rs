//! API route configuration.

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest,
    CreateQuestionResponse, DeleteQuestionResponse, ErrorResponse, HealthResponse,
    PreviousQuestion, QuestionListResponse, QuestionResponse, QuizCategoryRequest, QuizRequest,
    QuizResponse, SearchQuestionsRequest, SearchQuestionsResponse,
};
use super::state::AppState;
use crate::db::Database;

const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Questions, categories and quiz rounds for a trivia game",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_categories,
        handlers::list_category_questions,
        handlers::list_questions,
        handlers::create_question,
        handlers::delete_question,
        handlers::search_questions,
        handlers::play_quiz,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            QuestionResponse,
            CategoriesResponse,
            CategoryQuestionsResponse,
            QuestionListResponse,
            CreateQuestionRequest,
            CreateQuestionResponse,
            DeleteQuestionResponse,
            SearchQuestionsRequest,
            SearchQuestionsResponse,
            QuizCategoryRequest,
            PreviousQuestion,
            QuizRequest,
            QuizResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "categories", description = "Category listing endpoints"),
        (name = "questions", description = "Question management endpoints"),
        (name = "quizzes", description = "Quiz play endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router. `docs` mounts the Scalar UI at `/docs`.
pub fn create_router<D: Database + 'static>(state: AppState<D>, docs: bool) -> Router {
    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(handlers::health));

    // Category routes (generic over Database)
    let category_routes = routes!(D => {
        get "/categories" => handlers::list_categories,
        get "/categories/{id}/questions" => handlers::list_category_questions,
    });

    // Question routes (generic over Database)
    let question_routes = Router::new()
        .route(
            "/questions",
            get(handlers::list_questions::<D>).post(handlers::create_question::<D>),
        )
        .merge(routes!(D => {
            delete "/questions/{id}" => handlers::delete_question,
            post "/questions/search" => handlers::search_questions,
        }));

    let quiz_routes = routes!(D => {
        post "/quizzes" => handlers::play_quiz,
    });

    let mut router = system_routes
        .merge(category_routes)
        .merge(question_routes)
        .merge(quiz_routes);

    if docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .with_state(state)
}

//! Integration tests for question endpoints.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};
use crate::service::{QuizScope, SeededPicker};

/// Create a test app with the sample questions loaded
async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db.seed_sample_questions()
        .await
        .expect("Failed to seed questions");
    let state = AppState::new(db, Arc::new(SeededPicker::new(1)), QuizScope::Full);
    routes::create_router(state, false)
}

/// Create a test app with categories but no questions
async fn empty_app() -> axum::Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    let state = AppState::new(db, Arc::new(SeededPicker::new(1)), QuizScope::Full);
    routes::create_router(state, false)
}

async fn send(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Helper to parse JSON response body
async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("Expected questions array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// GET /questions
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn list_questions_returns_first_page() {
    let app = test_app().await;

    let response = send(app, "GET", "/questions", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["totalQuestions"], 19);
    assert!(body["categories"].is_object());
    assert_eq!(body["categories"]["4"], "History");

    let first = &body["questions"][0];
    for field in ["id", "question", "answer", "category", "difficulty"] {
        assert!(!first[field].is_null(), "missing field {}", field);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn list_questions_second_page_holds_the_rest() {
    let app = test_app().await;

    let response = send(app, "GET", "/questions?page=2", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 9);
    assert_eq!(body["totalQuestions"], 19);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_questions_beyond_data_is_not_found() {
    let app = test_app().await;

    let response = send(app, "GET", "/questions?page=1000", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn list_questions_invalid_page_means_first_page() {
    let app = test_app().await;

    let response = send(app, "GET", "/questions?page=abc", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&json_body(response).await)[0], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_page_parameter_is_bad_request() {
    let app = test_app().await;

    let response = send(app.clone(), "GET", "/questions?page=1&page=2", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "error": 400, "message": "bad request"})
    );

    let response = send(app, "DELETE", "/questions/1?page=1&page=2", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_questions_only_reports_categories_in_use() {
    let app = empty_app().await;

    let created = send(
        app.clone(),
        "POST",
        "/questions",
        Some(json!({"question": "Q", "answer": "A", "category": 2, "difficulty": 1})),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);

    let response = send(app, "GET", "/questions", None).await;
    let body = json_body(response).await;
    assert_eq!(body["categories"], json!({"2": "Art"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_questions_on_empty_store_is_not_found() {
    let app = empty_app().await;

    let response = send(app, "GET", "/questions", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// DELETE /questions/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn delete_question_removes_it() {
    let app = test_app().await;

    let response = send(app.clone(), "DELETE", "/questions/5", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let remaining = ids(&body);
    assert_eq!(remaining.len(), 10);
    assert!(!remaining.contains(&5));

    let again = send(app.clone(), "DELETE", "/questions/5", None).await;
    assert_eq!(again.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(again).await,
        json!({"success": false, "error": 422, "message": "unprocessable"})
    );

    let listing = json_body(send(app, "GET", "/questions", None).await).await;
    assert_eq!(listing["totalQuestions"], 18);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_question_is_unprocessable() {
    let app = test_app().await;

    let response = send(app, "DELETE", "/questions/2000", None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_non_integer_id_is_not_found() {
    let app = test_app().await;

    let response = send(app, "DELETE", "/questions/abc", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_requested_page() {
    let app = test_app().await;

    let response = send(app, "DELETE", "/questions/1?page=2", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(ids(&body), (12..=19).collect::<Vec<_>>());
}

// =============================================================================
// POST /questions
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn create_question_adds_one() {
    let app = test_app().await;

    let response = send(
        app.clone(),
        "POST",
        "/questions",
        Some(json!({
            "question": "Which planet has the most moons?",
            "answer": "Saturn",
            "category": 1,
            "difficulty": 3
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalQuestions"], 20);
    assert_eq!(body["currentCategory"], 1);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);

    let search = send(
        app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "most moons"})),
    )
    .await;
    assert_eq!(search.status(), StatusCode::OK);
    let found = json_body(search).await;
    assert_eq!(found["totalQuestions"], 1);
    assert_eq!(found["questions"][0]["answer"], "Saturn");
    assert_eq!(found["questions"][0]["id"], 20);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_accepts_numeric_strings() {
    let app = empty_app().await;

    let response = send(
        app,
        "POST",
        "/questions",
        Some(json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "category": "2",
            "difficulty": "1"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["currentCategory"], 2);
    assert_eq!(body["questions"][0]["category"], 2);
    assert_eq!(body["questions"][0]["difficulty"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_missing_field_is_unprocessable() {
    let app = test_app().await;

    let response = send(
        app.clone(),
        "POST",
        "/questions",
        Some(json!({"question": "No answer", "category": 1, "difficulty": 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let listing = json_body(send(app, "GET", "/questions", None).await).await;
    assert_eq!(listing["totalQuestions"], 19);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_unknown_category_is_unprocessable() {
    let app = test_app().await;

    let response = send(
        app,
        "POST",
        "/questions",
        Some(json!({"question": "Q", "answer": "A", "category": 99, "difficulty": 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_wrong_types_are_unprocessable() {
    let app = test_app().await;

    let response = send(
        app,
        "POST",
        "/questions",
        Some(json!({"question": "Q", "answer": "A", "category": "science", "difficulty": 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_malformed_body_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/questions")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "error": 400, "message": "bad request"})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_without_content_type_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/questions")
                .body(Body::from(r#"{"question": "Q"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// POST /questions/search
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn search_is_case_insensitive() {
    let app = test_app().await;

    let response = send(
        app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "TITLE"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalQuestions"], 2);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    assert_eq!(body["currentCategory"]["1"], "Science");
    assert_eq!(body["currentCategory"].as_object().unwrap().len(), 6);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_search_term_matches_everything() {
    let app = test_app().await;

    let response = send(
        app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": ""})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalQuestions"], 19);
    assert_eq!(body["questions"].as_array().unwrap().len(), 19);
}

#[tokio::test(flavor = "multi_thread")]
async fn absent_search_term_matches_everything() {
    let app = test_app().await;

    let response = send(app, "POST", "/questions/search", Some(json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["totalQuestions"], 19);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_without_match_is_not_found() {
    let app = test_app().await;

    let response = send(
        app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "applejacks"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_treats_wildcards_literally() {
    let app = test_app().await;

    let response = send(
        app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "%"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_ignores_case_of_non_ascii_letters() {
    let app = empty_app().await;

    let created = send(
        app.clone(),
        "POST",
        "/questions",
        Some(json!({"question": "Was ist über dem Meer?", "answer": "Der Himmel", "category": 3, "difficulty": 1})),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);

    for term in ["über", "ÜBER", "Über"] {
        let response = send(
            app.clone(),
            "POST",
            "/questions/search",
            Some(json!({"searchTerm": term})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "term {}", term);
        assert_eq!(json_body(response).await["totalQuestions"], 1);
    }
}

use crate::cli::api_client::ApiClient;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionPageResponse {
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Serialize)]
struct SearchQuestionsRequest<'a> {
    #[serde(rename = "searchTerm")]
    search_term: &'a str,
}

#[derive(Tabled)]
struct QuestionDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Question")]
    question: String,
    #[tabled(rename = "Answer")]
    answer: String,
    #[tabled(rename = "Category")]
    category: i64,
    #[tabled(rename = "Difficulty")]
    difficulty: i64,
}

impl From<&Question> for QuestionDisplay {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: truncate_with_ellipsis(&q.question, 60),
            answer: truncate_with_ellipsis(&q.answer, 30),
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// List one page of questions, optionally limited to a category
pub async fn list_questions(
    api_client: &ApiClient,
    page: Option<u32>,
    category: Option<i64>,
    format: &str,
) -> CliResult<String> {
    let mut request = match category {
        Some(id) => api_client.get(&format!("/categories/{}/questions", id)),
        None => api_client.get("/questions"),
    };
    if let Some(p) = page {
        request = request.query(&[("page", p.to_string())]);
    }

    let response: QuestionPageResponse = ApiClient::handle_response(request.send().await?).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&response.questions)?),
        _ => Ok(format!(
            "{}\nShowing {} of {} questions",
            format_table(&response.questions),
            response.questions.len(),
            response.total_questions
        )),
    }
}

/// Search questions by substring
pub async fn search_questions(api_client: &ApiClient, term: &str, format: &str) -> CliResult<String> {
    let response = api_client
        .post("/questions/search")
        .json(&SearchQuestionsRequest { search_term: term })
        .send()
        .await?;

    let response: QuestionPageResponse = match ApiClient::handle_response(response).await {
        Err(CliError::ApiError { status: 404, .. }) => {
            return Ok(match format {
                "json" => "[]".to_string(),
                _ => format!("No questions match '{}'.", term),
            });
        }
        other => other?,
    };

    match format {
        "json" => Ok(serde_json::to_string_pretty(&response.questions)?),
        _ => Ok(format_table(&response.questions)),
    }
}

/// Create a new question
pub async fn add_question(
    api_client: &ApiClient,
    request: CreateQuestionRequest,
) -> CliResult<String> {
    let response = api_client.post("/questions").json(&request).send().await?;

    let listing: QuestionPageResponse = ApiClient::handle_response(response).await?;
    Ok(format!(
        "✓ Created question in category {} ({} questions total)",
        request.category, listing.total_questions
    ))
}

/// Delete a question (requires --force flag for safety)
pub async fn delete_question(api_client: &ApiClient, id: i64, force: bool) -> CliResult<String> {
    if !force {
        return Err(CliError::ForceRequired);
    }

    let response = api_client
        .delete(&format!("/questions/{}", id))
        .send()
        .await?;

    let _: IgnoredAny = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Deleted question: {}", id))
}

fn format_table(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions found.".to_string();
    }

    let rows: Vec<QuestionDisplay> = questions.iter().map(|q| q.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

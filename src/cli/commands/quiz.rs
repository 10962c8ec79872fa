//! Terminal quiz: ask questions from the API until the rounds or the
//! questions run out.

use std::io::{BufRead, Write};

use crate::cli::api_client::ApiClient;
use crate::cli::commands::question::Question;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::answer_matches;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROUNDS: usize = 5;

#[derive(Debug, Serialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Debug, Serialize)]
struct QuizRequest<'a> {
    quiz_category: QuizCategory,
    previous_questions: &'a [i64],
}

#[derive(Debug, Deserialize)]
struct QuizResponse {
    question: Question,
}

#[derive(Debug, Deserialize)]
struct QuestionTotal {
    #[serde(rename = "totalQuestions")]
    total_questions: usize,
}

/// Outcome of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub asked: usize,
}

/// Fetch the next unseen question, or `None` once the category is exhausted.
pub async fn next_question(
    api_client: &ApiClient,
    category: i64,
    previous: &[i64],
) -> CliResult<Option<Question>> {
    let response = api_client
        .post("/quizzes")
        .json(&QuizRequest {
            quiz_category: QuizCategory { id: category },
            previous_questions: previous,
        })
        .send()
        .await?;

    match ApiClient::handle_response::<QuizResponse>(response).await {
        Ok(body) => Ok(Some(body.question)),
        Err(CliError::ApiError {
            status: 422,
            message,
        }) => {
            // The server answers 422 for both an exhausted pool and a store
            // failure; only the former ends the quiz quietly.
            if questions_in_category(api_client, category).await? <= previous.len() {
                Ok(None)
            } else {
                Err(CliError::ApiError {
                    status: 422,
                    message: format!("server could not pick another question: {}", message),
                })
            }
        }
        Err(e) => Err(e),
    }
}

/// Number of questions in `category` (`0` for all); an empty category is 0.
async fn questions_in_category(api_client: &ApiClient, category: i64) -> CliResult<usize> {
    let request = if category == 0 {
        api_client.get("/questions")
    } else {
        api_client.get(&format!("/categories/{}/questions", category))
    };

    match ApiClient::handle_response::<QuestionTotal>(request.send().await?).await {
        Ok(body) => Ok(body.total_questions),
        Err(CliError::ApiError { status: 404, .. }) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Play up to `rounds` questions of `category` (`0` for all), reading
/// answers from `input` and writing prompts to `output`.
pub async fn play<R: BufRead, W: Write>(
    api_client: &ApiClient,
    category: i64,
    rounds: usize,
    mut input: R,
    mut output: W,
) -> CliResult<QuizScore> {
    let mut previous: Vec<i64> = Vec::new();
    let mut correct = 0;

    while previous.len() < rounds {
        let Some(question) = next_question(api_client, category, &previous).await? else {
            writeln!(output, "No more questions in this category.")?;
            break;
        };
        previous.push(question.id);

        writeln!(output, "\nQuestion {}: {}", previous.len(), question.question)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        if answer_matches(&line, &question.answer) {
            correct += 1;
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "The answer was: {}", question.answer)?;
        }
    }

    Ok(QuizScore {
        correct,
        asked: previous.len(),
    })
}

/// Play on the terminal and return the final score line.
pub async fn play_quiz(api_client: &ApiClient, category: i64, rounds: usize) -> CliResult<String> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let score = play(api_client, category, rounds, stdin.lock(), stdout.lock()).await?;

    Ok(format!("Score: {}/{}", score.correct, score.asked))
}

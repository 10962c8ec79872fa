//! SQLite QuestionRepository implementation.

use sqlx::SqlitePool;

use super::helpers::{contains_folded, question_from_row};
use crate::db::{DbError, DbResult, Id, NewQuestion, Question, QuestionRepository};

const SELECT_QUESTION: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// SQLx-backed question repository.
pub struct SqliteQuestionRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> QuestionRepository for SqliteQuestionRepository<'a> {
    async fn create(&self, question: &NewQuestion) -> DbResult<Question> {
        let row = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?) \
             RETURNING id, question, answer, category, difficulty",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(question_from_row(&row))
    }

    async fn get(&self, id: Id) -> DbResult<Question> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_QUESTION))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(|r| question_from_row(&r))
            .ok_or_else(|| DbError::NotFound {
                entity_type: "Question".to_string(),
                id: id.to_string(),
            })
    }

    async fn list(&self) -> DbResult<Vec<Question>> {
        let rows = sqlx::query(&format!("{} ORDER BY id ASC", SELECT_QUESTION))
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn list_by_category(&self, category: Id) -> DbResult<Vec<Question>> {
        let rows = sqlx::query(&format!(
            "{} WHERE category = ? ORDER BY id ASC",
            SELECT_QUESTION
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn search(&self, term: &str) -> DbResult<Vec<Question>> {
        // Matched in Rust: SQLite only folds ASCII case.
        let folded = term.to_lowercase();
        let questions = self.list().await?;

        Ok(questions
            .into_iter()
            .filter(|q| contains_folded(&q.question, &folded))
            .collect())
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Question".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

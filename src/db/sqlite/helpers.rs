//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{Category, Question};

/// Whether `text` contains `folded_term`, ignoring case.
///
/// `folded_term` must already be lowercased. Folding uses Unicode
/// lowercase mapping, so `ÜBER` matches `über`; SQLite's `LIKE` and
/// `lower()` only fold ASCII.
pub fn contains_folded(text: &str, folded_term: &str) -> bool {
    folded_term.is_empty() || text.to_lowercase().contains(folded_term)
}

/// Map a `questions` row to a `Question`.
pub fn question_from_row(row: &SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

/// Map a `categories` row to a `Category`.
pub fn category_from_row(row: &SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}

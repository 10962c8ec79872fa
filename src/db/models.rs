//! Domain models for the trivia database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Integer ID type assigned by the store.
pub type Id = i64;

/// A trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Id,
    pub question: String,
    pub answer: String,
    /// References `Category::id`.
    pub category: Id,
    pub difficulty: i64,
}

/// Insert payload for a question.
///
/// Every field is optional here; presence is enforced by the store's
/// `NOT NULL` constraints, not by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<Id>,
    pub difficulty: Option<i64>,
}

/// A question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category id to category label, ordered by id.
pub type CategoryMap = BTreeMap<Id, String>;

/// Collapse a list of categories into the id → type mapping clients expect.
pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Methods return `Send` futures so handlers generic over `Database`
//! can be served by axum.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Category, Id, NewQuestion, Question},
};

/// Repository for Question operations.
pub trait QuestionRepository: Send + Sync {
    /// Insert a new question and return it with its store-assigned id.
    fn create(&self, question: &NewQuestion) -> impl Future<Output = DbResult<Question>> + Send;

    /// Get a question by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Question>> + Send;

    /// Get all questions ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Question>>> + Send;

    /// Get all questions in a category ordered by id.
    fn list_by_category(
        &self,
        category: Id,
    ) -> impl Future<Output = DbResult<Vec<Question>>> + Send;

    /// Case-insensitive substring search over the question text.
    fn search(&self, term: &str) -> impl Future<Output = DbResult<Vec<Question>>> + Send;

    /// Delete a question by ID.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Category operations.
pub trait CategoryRepository: Send + Sync {
    /// Get all categories ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Category>>> + Send;

    /// Get the categories referenced by at least one question.
    fn list_in_use(&self) -> impl Future<Output = DbResult<Vec<Category>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Questions<'a>: QuestionRepository
    where
        Self: 'a;
    type Categories<'a>: CategoryRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the question repository.
    fn questions(&self) -> Self::Questions<'_>;

    /// Get the category repository.
    fn categories(&self) -> Self::Categories<'_>;
}

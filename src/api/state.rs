//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::service::{QuestionPicker, QuizScope};

/// Shared application state.
///
/// Generic over `D: Database` so handlers work against any store; the
/// quiz picker is injected so tests can substitute a seeded or mocked one.
pub struct AppState<D: Database> {
    db: Arc<D>,
    picker: Arc<dyn QuestionPicker>,
    quiz_scope: QuizScope,
}

// Manual Clone impl - we only need the Arcs to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            picker: Arc::clone(&self.picker),
            quiz_scope: self.quiz_scope,
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState with the given database, quiz picker and scope.
    pub fn new(db: D, picker: Arc<dyn QuestionPicker>, quiz_scope: QuizScope) -> Self {
        Self {
            db: Arc::new(db),
            picker,
            quiz_scope,
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a reference to the quiz picker.
    pub fn picker(&self) -> &dyn QuestionPicker {
        self.picker.as_ref()
    }

    /// Which questions form the quiz pool.
    pub fn quiz_scope(&self) -> QuizScope {
        self.quiz_scope
    }
}

//! Quiz rounds: pick one question the player has not seen yet.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use super::error::{ServiceError, ServiceResult};
use super::pagination::paginate;
use crate::db::{Database, Id, Question, QuestionRepository};

/// Which slice of the in-scope questions forms the quiz pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizScope {
    /// Every question in the chosen category.
    #[default]
    Full,
    /// Only the requested page of the chosen category.
    FirstPage,
}

impl fmt::Display for QuizScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizScope::Full => write!(f, "full"),
            QuizScope::FirstPage => write!(f, "first-page"),
        }
    }
}

impl FromStr for QuizScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(QuizScope::Full),
            "first-page" | "first_page" => Ok(QuizScope::FirstPage),
            _ => Err(format!("Unknown quiz scope: {} (expected full or first-page)", s)),
        }
    }
}

/// Category filter of a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Any,
    Only(Id),
}

impl From<Id> for QuizCategory {
    /// Category id `0` means "any category".
    fn from(id: Id) -> Self {
        if id == 0 {
            QuizCategory::Any
        } else {
            QuizCategory::Only(id)
        }
    }
}

/// Caller-held state of one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub category: QuizCategory,
    /// Ids of questions already asked.
    pub previous_questions: Vec<Id>,
    /// Page used when the scope is `FirstPage`.
    pub page: i64,
}

/// Source of the random choice among quiz candidates.
#[cfg_attr(test, mockall::automock)]
pub trait QuestionPicker: Send + Sync {
    /// Return an index in `0..candidates`. Only called with `candidates > 0`.
    fn pick(&self, candidates: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick(&self, candidates: usize) -> usize {
        rand::thread_rng().gen_range(0..candidates)
    }
}

/// Uniform choice from a seeded RNG, for reproducible sessions and tests.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuestionPicker for SeededPicker {
    fn pick(&self, candidates: usize) -> usize {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..candidates)
    }
}

/// Pick a random question in scope that is not in `previous_questions`.
///
/// An exhausted pool or any store failure is `Unprocessable`.
#[instrument(skip(db, picker))]
pub async fn quiz_pick<D: Database>(
    db: &D,
    round: &QuizRound,
    scope: QuizScope,
    picker: &dyn QuestionPicker,
) -> ServiceResult<Question> {
    let questions = db.questions();

    let in_scope = match round.category {
        QuizCategory::Any => questions.list().await,
        QuizCategory::Only(id) => questions.list_by_category(id).await,
    }
    .map_err(ServiceError::absorb("quiz question listing"))?;

    let pool: &[Question] = match scope {
        QuizScope::Full => &in_scope,
        QuizScope::FirstPage => paginate(&in_scope, round.page),
    };

    let candidates: Vec<&Question> = pool
        .iter()
        .filter(|q| !round.previous_questions.contains(&q.id))
        .collect();
    debug!(
        in_scope = in_scope.len(),
        candidates = candidates.len(),
        "quiz pool built"
    );

    if candidates.is_empty() {
        return Err(ServiceError::unprocessable("no quiz questions remain"));
    }

    let index = picker.pick(candidates.len());
    candidates
        .get(index)
        .map(|q| (*q).clone())
        .ok_or_else(|| {
            ServiceError::unprocessable(format!(
                "picker returned index {} for {} candidates",
                index,
                candidates.len()
            ))
        })
}

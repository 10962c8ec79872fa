//! Question listing, creation, deletion and search.

use tracing::{debug, instrument};

use super::error::{ServiceError, ServiceResult};
use super::pagination::paginate;
use crate::db::{
    CategoryMap, CategoryRepository, Database, Id, NewQuestion, Question, QuestionRepository,
    category_map,
};

/// A page of questions plus the size of the full result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Count before pagination.
    pub total: usize,
}

impl QuestionPage {
    fn slice(all: &[Question], page: i64) -> Self {
        Self {
            questions: paginate(all, page).to_vec(),
            total: all.len(),
        }
    }
}

/// The paged question listing with the categories that are in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub page: QuestionPage,
    /// Only categories referenced by at least one question.
    pub categories: CategoryMap,
}

/// Result of creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub question: Question,
    /// The requested page of the listing after the insert.
    pub page: QuestionPage,
    /// Category as submitted by the caller.
    pub current_category: Option<Id>,
}

/// Search matches with every known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total: usize,
    pub categories: CategoryMap,
}

/// All categories as an id → type mapping.
#[instrument(skip(db))]
pub async fn list_categories<D: Database>(db: &D) -> ServiceResult<CategoryMap> {
    let categories = db.categories().list().await?;
    Ok(category_map(categories))
}

/// One page of all questions ordered by id.
///
/// An empty page is `NotFound`.
#[instrument(skip(db))]
pub async fn list_questions<D: Database>(db: &D, page: i64) -> ServiceResult<QuestionListing> {
    let all = db.questions().list().await?;
    let page_result = QuestionPage::slice(&all, page);

    if page_result.questions.is_empty() {
        return Err(ServiceError::not_found(format!("questions page {}", page)));
    }

    let categories = db.categories().list_in_use().await?;

    Ok(QuestionListing {
        page: page_result,
        categories: category_map(categories),
    })
}

/// Delete a question and return the requested page of what remains.
///
/// Every failure, a missing id included, is `Unprocessable`.
#[instrument(skip(db))]
pub async fn delete_question<D: Database>(db: &D, id: Id, page: i64) -> ServiceResult<QuestionPage> {
    let questions = db.questions();

    let existing = questions
        .get(id)
        .await
        .map_err(ServiceError::absorb("question lookup"))?;
    questions
        .delete(existing.id)
        .await
        .map_err(ServiceError::absorb("question delete"))?;
    debug!(id, "question deleted");

    let all = questions
        .list()
        .await
        .map_err(ServiceError::absorb("question listing"))?;

    Ok(QuestionPage::slice(&all, page))
}

/// Insert a question and return the requested page of the updated listing.
///
/// No presence or foreign-key checks happen here; the store rejects
/// incomplete rows and unknown categories, which surfaces as `Unprocessable`.
#[instrument(skip(db))]
pub async fn create_question<D: Database>(
    db: &D,
    new: &NewQuestion,
    page: i64,
) -> ServiceResult<CreatedQuestion> {
    let questions = db.questions();

    let created = questions
        .create(new)
        .await
        .map_err(ServiceError::absorb("question insert"))?;
    debug!(id = created.id, "question created");

    let all = questions
        .list()
        .await
        .map_err(ServiceError::absorb("question listing"))?;

    Ok(CreatedQuestion {
        question: created,
        page: QuestionPage::slice(&all, page),
        current_category: new.category,
    })
}

/// Case-insensitive substring search over question text. Not paginated.
///
/// Zero matches is `NotFound`; store failures are `Unprocessable`.
#[instrument(skip(db))]
pub async fn search_questions<D: Database>(db: &D, term: &str) -> ServiceResult<SearchResults> {
    let matches = db
        .questions()
        .search(term)
        .await
        .map_err(ServiceError::absorb("question search"))?;

    if matches.is_empty() {
        return Err(ServiceError::not_found(format!(
            "questions matching '{}'",
            term
        )));
    }

    let categories = db
        .categories()
        .list()
        .await
        .map_err(ServiceError::absorb("category listing"))?;

    Ok(SearchResults {
        total: matches.len(),
        questions: matches,
        categories: category_map(categories),
    })
}

/// One page of the questions in `category`.
///
/// An empty page is `NotFound`.
#[instrument(skip(db))]
pub async fn questions_by_category<D: Database>(
    db: &D,
    category: Id,
    page: i64,
) -> ServiceResult<QuestionPage> {
    let all = db.questions().list_by_category(category).await?;
    let result = QuestionPage::slice(&all, page);

    if result.questions.is_empty() {
        return Err(ServiceError::not_found(format!(
            "questions page {} in category {}",
            page, category
        )));
    }

    Ok(result)
}

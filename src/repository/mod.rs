use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::question::{NewQuestion, Question};

pub mod category;
pub mod errors;
pub mod question;

use errors::RepositoryResult;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionListQuery {
    /// Restrict to questions belonging to a category.
    pub category: Option<i32>,
    /// Case-insensitive substring match on the question text.
    pub search: Option<String>,
}

impl QuestionListQuery {
    pub fn category(mut self, category: i32) -> Self {
        self.category = Some(category);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Read access to categories.
pub trait CategoryReader {
    /// All categories, ordered by ascending id.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
}

/// Read access to questions.
pub trait QuestionReader {
    /// Questions matching `query`, ordered by ascending id.
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<Vec<Question>>;
    fn get_question_by_id(&self, id: i32) -> RepositoryResult<Option<Question>>;
}

/// Write access to questions.
pub trait QuestionWriter {
    /// Insert a question, returning the stored row with its assigned id.
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question>;
    /// Delete a question by id, returning the number of affected rows.
    fn delete_question(&self, id: i32) -> RepositoryResult<usize>;
}

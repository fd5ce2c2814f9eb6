use diesel::prelude::*;

use crate::domain::question::{NewQuestion, Question};
use crate::models::question::{NewQuestion as DbNewQuestion, Question as DbQuestion};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, QuestionListQuery, QuestionReader, QuestionWriter};

impl QuestionReader for DieselRepository {
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<Vec<Question>> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let mut items = questions::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = query.category {
            items = items.filter(questions::category.eq(category));
        }

        if let Some(search) = &query.search {
            // SQLite LIKE is case-insensitive for ASCII text.
            items = items.filter(questions::question.like(format!("%{search}%")));
        }

        let items = items
            .order(questions::id.asc())
            .load::<DbQuestion>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_question_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let question = questions::table
            .filter(questions::id.eq(id))
            .first::<DbQuestion>(&mut conn)
            .optional()?;

        Ok(question.map(Into::into))
    }
}

impl QuestionWriter for DieselRepository {
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        use crate::schema::questions;

        let mut conn = self.conn()?;
        let db_question: DbNewQuestion = question.clone().into();

        let created = diesel::insert_into(questions::table)
            .values(db_question)
            .get_result::<DbQuestion>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_question(&self, id: i32) -> RepositoryResult<usize> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let affected = diesel::delete(questions::table.filter(questions::id.eq(id)))
            .execute(&mut conn)?;

        Ok(affected)
    }
}

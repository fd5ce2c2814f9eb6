use diesel::prelude::*;

use crate::domain::question::{NewQuestion as DomainNewQuestion, Question as DomainQuestion};

/// Diesel model representing the `questions` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::questions)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Insertable form of [`Question`]; the id is assigned by the store.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<Question> for DomainQuestion {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

impl From<DomainNewQuestion> for NewQuestion {
    fn from(question: DomainNewQuestion) -> Self {
        Self {
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

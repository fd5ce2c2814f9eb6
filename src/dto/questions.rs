use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::question::Question;

/// Response for `GET /questions` and the search branch of `POST /questions`.
///
/// `totalQuestions` reports the full match count, not the page size; the UI
/// derives its page controls from it.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Response for the create branch of `POST /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i32,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

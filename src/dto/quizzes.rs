use serde::Serialize;

use crate::domain::question::Question;

/// Response for `POST /quizzes`.
#[derive(Debug, Serialize)]
pub struct QuizQuestionResponse {
    pub success: bool,
    pub question: Question,
}

use serde::Deserialize;

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizForm {
    /// Ids of questions already asked this round. The server keeps no quiz
    /// state; the client resends the full history every turn.
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

/// Category scope for a quiz round; id 0 means any category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Option<i32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

use serde::{Deserialize, Serialize};

/// A single trivia prompt with its answer, difficulty rating and owning
/// category.
///
/// `category` references a category id but is not validated at this layer; a
/// dangling reference is stored and served as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Data required to insert a new [`Question`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

use serde::{Deserialize, Deserializer};

/// Body of `POST /questions`, a single endpoint that either creates a
/// question or runs a search depending on `searchTerm`.
///
/// `difficulty` and `category` are passthroughs with no range or existence
/// checks; dangling category references are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionPostForm {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub category: Option<i32>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Accept JSON numbers as well as numeric strings; the trivia web client
/// submits category ids as strings. Empty strings count as absent.
fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

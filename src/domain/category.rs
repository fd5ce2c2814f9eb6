use serde::{Deserialize, Serialize};

/// A labeled grouping (e.g. "Science") that questions belong to.
///
/// Categories are seed data; the API never creates, updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::category::Category;

/// Response for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

impl CategoryListResponse {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            success: true,
            categories: category_map(categories),
        }
    }
}

/// Collapse category rows into the id→type lookup map embedded in several
/// responses. Serialized as a JSON object keyed by the id.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

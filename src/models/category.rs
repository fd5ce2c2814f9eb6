use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub type_: String,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            kind: category.type_,
        }
    }
}

use diesel::prelude::*;

use crate::domain::category::Category;
use crate::models::category::Category as DbCategory;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }
}

//! SQLite CategoryRepository implementation.

use sqlx::SqlitePool;

use super::helpers::category_from_row;
use crate::db::{Category, CategoryRepository, DbResult};

/// SQLx-backed category repository.
pub struct SqliteCategoryRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> CategoryRepository for SqliteCategoryRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    async fn list_in_use(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query(
            "SELECT DISTINCT c.id, c.type FROM categories c \
             JOIN questions q ON q.category = c.id \
             ORDER BY c.id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }
}

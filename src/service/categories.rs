//! Category queries.

use crate::error::ApiError;
use crate::models::Category;
use crate::response::CategoryMap;
use sqlx::PgPool;

pub struct CategoryService;

impl CategoryService {
    /// Build the id -> name mapping from every stored category.
    pub async fn mapping(pool: &PgPool) -> Result<CategoryMap, ApiError> {
        let rows: Vec<Category> = sqlx::query_as("SELECT id, type FROM categories")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
    }
}

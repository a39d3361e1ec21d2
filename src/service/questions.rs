//! Question queries.

use crate::error::ApiError;
use crate::models::{NewQuestion, Question};
use sqlx::PgPool;

const COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct QuestionService;

impl QuestionService {
    /// All questions ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, ApiError> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Case-insensitive substring match over the question text. An empty term
    /// matches every question with non-null text.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, ApiError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE question ILIKE $1 ORDER BY id",
            COLUMNS
        );
        tracing::debug!(sql = %sql, term = %term, "query");
        let rows = sqlx::query_as(&sql)
            .bind(format!("%{}%", term))
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// All questions in one category, ordered by id.
    pub async fn by_category(pool: &PgPool, category_id: i32) -> Result<Vec<Question>, ApiError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            COLUMNS
        );
        tracing::debug!(sql = %sql, category_id, "query");
        let rows = sqlx::query_as(&sql).bind(category_id).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one question by primary key.
    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Question>, ApiError> {
        let sql = format!("SELECT {} FROM questions WHERE id = $1", COLUMNS);
        let row = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Delete one question by primary key. Existence is checked by the caller.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Insert a new question; missing fields are stored as NULL.
    pub async fn insert(pool: &PgPool, new: &NewQuestion) -> Result<(), ApiError> {
        sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Count of questions whose category equals `category_id`.
    pub async fn count_in_category(pool: &PgPool, category_id: i32) -> Result<i64, ApiError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions WHERE category = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Questions in a category excluding the already-asked ids.
    pub async fn quiz_candidates(
        pool: &PgPool,
        category_id: i32,
        exclude: &[i32],
    ) -> Result<Vec<Question>, ApiError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 AND NOT (id = ANY($2)) ORDER BY id",
            COLUMNS
        );
        tracing::debug!(sql = %sql, category_id, excluded = exclude.len(), "query");
        let rows = sqlx::query_as(&sql)
            .bind(category_id)
            .bind(exclude.to_vec())
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}

//! Repository for the `categories` table.

use sqlx::PgPool;
use taskdeck_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name, user_id, created_at";

/// Provides owner-scoped operations on categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List a user's categories, ordered by name ascending.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE user_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a category by exact name within one user's categories.
    pub async fn find_by_name(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE user_id = $1 AND name = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Whether `id` exists and belongs to `user_id`.
    pub async fn exists_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a category. Fails with a `uq_categories_user_name` violation on duplicates.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (user_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a category owned by `user_id`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

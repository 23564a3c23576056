//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskdeck_core::types::DbId;

use crate::models::task::{Task, TaskFields};

const COLUMNS: &str = "id, user_id, category_id, status_id, priority_id, title, description, \
                       due_date, created_at, updated_at";

/// Provides owner-scoped CRUD for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List a user's tasks, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one task by id within a user's tasks.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a task, returning the created row.
    pub async fn create(pool: &PgPool, input: &TaskFields) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (user_id, category_id, status_id, priority_id, title, description, due_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of a task and stamp `updated_at`.
    ///
    /// Returns `None` if no task with `id` belongs to `input.user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TaskFields,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                category_id = $3,
                status_id = $4,
                priority_id = $5,
                title = $6,
                description = $7,
                due_date = $8,
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's task. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repositories for the `statuses` and `priorities` tables.

use sqlx::PgPool;
use taskdeck_core::types::DbId;

use crate::models::lookup::{Priority, Status};

const COLUMNS: &str = "id, user_id, name, created_at";

/// Read access to statuses plus default seeding.
pub struct StatusRepo;

impl StatusRepo {
    /// Whether status `id` exists and belongs to `user_id`.
    pub async fn exists_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM statuses WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// List a user's statuses in creation order.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Status>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM statuses WHERE user_id = $1 ORDER BY created_at, name");
        sqlx::query_as::<_, Status>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert the named statuses for a user inside `tx`, skipping names that
    /// already exist.
    pub async fn seed(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: DbId,
        names: &[&str],
    ) -> Result<(), sqlx::Error> {
        for name in names {
            sqlx::query(
                "INSERT INTO statuses (user_id, name) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_statuses_user_name DO NOTHING",
            )
            .bind(user_id)
            .bind(*name)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}

/// Read access to priorities plus default seeding.
pub struct PriorityRepo;

impl PriorityRepo {
    /// Whether priority `id` exists and belongs to `user_id`.
    pub async fn exists_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM priorities WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// List a user's priorities in creation order.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Priority>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM priorities WHERE user_id = $1 ORDER BY created_at, name");
        sqlx::query_as::<_, Priority>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert the named priorities for a user inside `tx`, skipping names that
    /// already exist.
    pub async fn seed(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: DbId,
        names: &[&str],
    ) -> Result<(), sqlx::Error> {
        for name in names {
            sqlx::query(
                "INSERT INTO priorities (user_id, name) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_priorities_user_name DO NOTHING",
            )
            .bind(user_id)
            .bind(*name)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}

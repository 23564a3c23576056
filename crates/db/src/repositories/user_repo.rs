//! Repository for the `users` table.

use sqlx::PgPool;
use taskdeck_core::types::DbId;

use crate::models::lookup::{DEFAULT_PRIORITIES, DEFAULT_STATUSES};
use crate::models::user::{CreateUser, User};
use crate::repositories::{PriorityRepo, StatusRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, created_at";

/// Provides lookups and inserts for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user together with the default statuses and priorities,
    /// returning the created row.
    ///
    /// Runs in one transaction: either the account and its vocabulary both
    /// exist afterwards or neither does.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        StatusRepo::seed(&mut tx, user.id, DEFAULT_STATUSES).await?;
        PriorityRepo::seed(&mut tx, user.id, DEFAULT_PRIORITIES).await?;

        tx.commit().await?;
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email. Callers pass the normalized (lower-cased) form.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}

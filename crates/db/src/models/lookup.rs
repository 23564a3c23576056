//! Per-user workflow vocabulary: statuses and priorities.
//!
//! Both tables share a shape. Task logic only checks existence and ownership;
//! rows are created once per user by [`DEFAULT_STATUSES`] / [`DEFAULT_PRIORITIES`]
//! seeding at registration.

use serde::Serialize;
use sqlx::FromRow;
use taskdeck_core::types::{DbId, Timestamp};

/// Statuses every new account starts with.
pub const DEFAULT_STATUSES: &[&str] = &["Todo", "Doing", "Done"];

/// Priorities every new account starts with.
pub const DEFAULT_PRIORITIES: &[&str] = &["Low", "Medium", "High"];

/// A row from the `statuses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Status {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A row from the `priorities` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Priority {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

//! Task entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskdeck_core::types::{Date, DbId, Timestamp};

/// A row from the `tasks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<DbId>,
    pub status_id: DbId,
    pub priority_id: DbId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Validated task fields, used for both insert and full-replacement update.
///
/// Only built by the task service after ownership checks pass.
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub user_id: DbId,
    pub category_id: Option<DbId>,
    pub status_id: DbId,
    pub priority_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
}

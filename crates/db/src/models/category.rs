//! Category model. Names are unique per owner.

use serde::Serialize;
use sqlx::FromRow;
use taskdeck_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub user_id: DbId,
    pub name: String,
}

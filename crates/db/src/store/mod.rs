//! Store capabilities consumed by the service layer.
//!
//! Services hold `Arc<dyn CredentialStore>` / `Arc<dyn OwnershipStore>` so the
//! relational backend ([`PgStore`]) can be swapped for [`MemoryStore`] in tests.
//! Every per-user method takes the owner id and never returns another user's rows.

use async_trait::async_trait;
use taskdeck_core::types::DbId;

use crate::error::StoreResult;
use crate::models::category::{Category, CreateCategory};
use crate::models::lookup::{Priority, Status};
use crate::models::task::{Task, TaskFields};
use crate::models::user::{CreateUser, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence for user accounts.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>>;

    /// Insert the account and its default statuses and priorities as one
    /// unit; on failure nothing is left behind.
    ///
    /// Fails with `UniqueViolation` when the e-mail is taken.
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User>;

    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// Persistence for everything a user owns.
#[async_trait]
pub trait OwnershipStore: Send + Sync {
    // --- categories ---

    async fn category_owned(&self, category_id: DbId, owner_id: DbId) -> StoreResult<bool>;

    async fn find_category_by_name(&self, owner_id: DbId, name: &str)
        -> StoreResult<Option<Category>>;

    /// Fails with `UniqueViolation` when `(owner, name)` already exists.
    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category>;

    /// Ordered by name.
    async fn list_categories(&self, owner_id: DbId) -> StoreResult<Vec<Category>>;

    /// Tasks referencing the category lose their category. Returns `false`
    /// when nothing matched.
    async fn delete_category(&self, category_id: DbId, owner_id: DbId) -> StoreResult<bool>;

    // --- statuses / priorities ---

    async fn status_exists(&self, status_id: DbId, owner_id: DbId) -> StoreResult<bool>;

    async fn priority_exists(&self, priority_id: DbId, owner_id: DbId) -> StoreResult<bool>;

    async fn list_statuses(&self, owner_id: DbId) -> StoreResult<Vec<Status>>;

    async fn list_priorities(&self, owner_id: DbId) -> StoreResult<Vec<Priority>>;

    // --- tasks ---

    /// Newest first.
    async fn list_tasks(&self, owner_id: DbId) -> StoreResult<Vec<Task>>;

    async fn find_task(&self, task_id: DbId, owner_id: DbId) -> StoreResult<Option<Task>>;

    async fn create_task(&self, input: &TaskFields) -> StoreResult<Task>;

    /// Full replacement scoped to `(task_id, input.user_id)`; `None` when no row matched.
    async fn update_task(&self, task_id: DbId, input: &TaskFields) -> StoreResult<Option<Task>>;

    async fn delete_task(&self, task_id: DbId, owner_id: DbId) -> StoreResult<bool>;
}

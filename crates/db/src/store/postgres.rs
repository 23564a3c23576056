//! PostgreSQL-backed store delegating to the repositories.

use async_trait::async_trait;
use taskdeck_core::types::DbId;

use crate::error::StoreResult;
use crate::models::category::{Category, CreateCategory};
use crate::models::lookup::{Priority, Status};
use crate::models::task::{Task, TaskFields};
use crate::models::user::{CreateUser, User};
use crate::repositories::{CategoryRepo, PriorityRepo, StatusRepo, TaskRepo, UserRepo};
use crate::store::{CredentialStore, OwnershipStore};
use crate::DbPool;

/// Relational implementation of both store capabilities.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(UserRepo::list(&self.pool).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl OwnershipStore for PgStore {
    async fn category_owned(&self, category_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        Ok(CategoryRepo::exists_owned(&self.pool, category_id, owner_id).await?)
    }

    async fn find_category_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> StoreResult<Option<Category>> {
        Ok(CategoryRepo::find_by_name(&self.pool, owner_id, name).await?)
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        Ok(CategoryRepo::create(&self.pool, input).await?)
    }

    async fn list_categories(&self, owner_id: DbId) -> StoreResult<Vec<Category>> {
        Ok(CategoryRepo::list_by_user(&self.pool, owner_id).await?)
    }

    async fn delete_category(&self, category_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        Ok(CategoryRepo::delete(&self.pool, category_id, owner_id).await?)
    }

    async fn status_exists(&self, status_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        Ok(StatusRepo::exists_owned(&self.pool, status_id, owner_id).await?)
    }

    async fn priority_exists(&self, priority_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        Ok(PriorityRepo::exists_owned(&self.pool, priority_id, owner_id).await?)
    }

    async fn list_statuses(&self, owner_id: DbId) -> StoreResult<Vec<Status>> {
        Ok(StatusRepo::list_by_user(&self.pool, owner_id).await?)
    }

    async fn list_priorities(&self, owner_id: DbId) -> StoreResult<Vec<Priority>> {
        Ok(PriorityRepo::list_by_user(&self.pool, owner_id).await?)
    }

    async fn list_tasks(&self, owner_id: DbId) -> StoreResult<Vec<Task>> {
        Ok(TaskRepo::list_by_user(&self.pool, owner_id).await?)
    }

    async fn find_task(&self, task_id: DbId, owner_id: DbId) -> StoreResult<Option<Task>> {
        Ok(TaskRepo::find_by_id(&self.pool, task_id, owner_id).await?)
    }

    async fn create_task(&self, input: &TaskFields) -> StoreResult<Task> {
        Ok(TaskRepo::create(&self.pool, input).await?)
    }

    async fn update_task(&self, task_id: DbId, input: &TaskFields) -> StoreResult<Option<Task>> {
        Ok(TaskRepo::update(&self.pool, task_id, input).await?)
    }

    async fn delete_task(&self, task_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        Ok(TaskRepo::delete(&self.pool, task_id, owner_id).await?)
    }
}

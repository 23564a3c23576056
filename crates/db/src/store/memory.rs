//! In-memory store used by the test suites.
//!
//! Mirrors the relational constraints that matter to the services: unique
//! e-mails, unique `(owner, name)` categories, owner-scoped access, and
//! `ON DELETE SET NULL` for a task's category.

use async_trait::async_trait;
use chrono::Utc;
use taskdeck_core::types::DbId;
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::models::category::{Category, CreateCategory};
use crate::models::lookup::{Priority, Status, DEFAULT_PRIORITIES, DEFAULT_STATUSES};
use crate::models::task::{Task, TaskFields};
use crate::models::user::{CreateUser, User};
use crate::store::{CredentialStore, OwnershipStore};

/// Rows are kept in insertion order.
#[derive(Default)]
struct Tables {
    users: Vec<User>,
    categories: Vec<Category>,
    statuses: Vec<Status>,
    priorities: Vec<Priority>,
    tasks: Vec<Task>,
}

impl Tables {
    /// Same effect as the `ON CONFLICT DO NOTHING` seeding in PostgreSQL.
    fn seed_defaults(&mut self, owner_id: DbId) {
        let now = Utc::now();
        for name in DEFAULT_STATUSES {
            if !self
                .statuses
                .iter()
                .any(|s| s.user_id == owner_id && s.name == *name)
            {
                self.statuses.push(Status {
                    id: DbId::new_v4(),
                    user_id: owner_id,
                    name: (*name).to_string(),
                    created_at: now,
                });
            }
        }
        for name in DEFAULT_PRIORITIES {
            if !self
                .priorities
                .iter()
                .any(|p| p.user_id == owner_id && p.name == *name)
            {
                self.priorities.push(Priority {
                    id: DbId::new_v4(),
                    user_id: owner_id,
                    name: (*name).to_string(),
                    created_at: now,
                });
            }
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories a user owns under `name`. Used to assert upsert idempotence.
    pub async fn count_categories_named(&self, owner_id: DbId, name: &str) -> usize {
        let tables = self.tables.lock().await;
        tables
            .categories
            .iter()
            .filter(|c| c.user_id == owner_id && c.name == name)
            .count()
    }

    /// Insert a status directly, bypassing default seeding.
    pub async fn insert_status(&self, owner_id: DbId, name: &str) -> Status {
        let status = Status {
            id: DbId::new_v4(),
            user_id: owner_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.tables.lock().await.statuses.push(status.clone());
        status
    }

    /// Insert a priority directly, bypassing default seeding.
    pub async fn insert_priority(&self, owner_id: DbId, name: &str) -> Priority {
        let priority = Priority {
            id: DbId::new_v4(),
            user_id: owner_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.tables.lock().await.priorities.push(priority.clone());
        priority
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut tables = self.tables.lock().await;
        if tables.users.iter().any(|u| u.email == input.email) {
            return Err(StoreError::UniqueViolation("uq_users_email".into()));
        }
        let user = User {
            id: DbId::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        tables.seed_defaults(user.id);
        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().rev().cloned().collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl OwnershipStore for MemoryStore {
    async fn category_owned(&self, category_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables
            .categories
            .iter()
            .any(|c| c.id == category_id && c.user_id == owner_id))
    }

    async fn find_category_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> StoreResult<Option<Category>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .categories
            .iter()
            .find(|c| c.user_id == owner_id && c.name == name)
            .cloned())
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        let mut tables = self.tables.lock().await;
        if tables
            .categories
            .iter()
            .any(|c| c.user_id == input.user_id && c.name == input.name)
        {
            return Err(StoreError::UniqueViolation("uq_categories_user_name".into()));
        }
        let category = Category {
            id: DbId::new_v4(),
            name: input.name.clone(),
            user_id: input.user_id,
            created_at: Utc::now(),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn list_categories(&self, owner_id: DbId) -> StoreResult<Vec<Category>> {
        let tables = self.tables.lock().await;
        let mut categories: Vec<Category> = tables
            .categories
            .iter()
            .filter(|c| c.user_id == owner_id)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn delete_category(&self, category_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.categories.len();
        tables
            .categories
            .retain(|c| !(c.id == category_id && c.user_id == owner_id));
        if tables.categories.len() == before {
            return Ok(false);
        }
        for task in tables.tasks.iter_mut() {
            if task.category_id == Some(category_id) {
                task.category_id = None;
            }
        }
        Ok(true)
    }

    async fn status_exists(&self, status_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables
            .statuses
            .iter()
            .any(|s| s.id == status_id && s.user_id == owner_id))
    }

    async fn priority_exists(&self, priority_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables
            .priorities
            .iter()
            .any(|p| p.id == priority_id && p.user_id == owner_id))
    }

    async fn list_statuses(&self, owner_id: DbId) -> StoreResult<Vec<Status>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .statuses
            .iter()
            .filter(|s| s.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_priorities(&self, owner_id: DbId) -> StoreResult<Vec<Priority>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .priorities
            .iter()
            .filter(|p| p.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_tasks(&self, owner_id: DbId) -> StoreResult<Vec<Task>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .tasks
            .iter()
            .rev()
            .filter(|t| t.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_task(&self, task_id: DbId, owner_id: DbId) -> StoreResult<Option<Task>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .tasks
            .iter()
            .find(|t| t.id == task_id && t.user_id == owner_id)
            .cloned())
    }

    async fn create_task(&self, input: &TaskFields) -> StoreResult<Task> {
        let task = Task {
            id: DbId::new_v4(),
            user_id: input.user_id,
            category_id: input.category_id,
            status_id: input.status_id,
            priority_id: input.priority_id,
            title: input.title.clone(),
            description: input.description.clone(),
            due_date: input.due_date,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.tables.lock().await.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task_id: DbId, input: &TaskFields) -> StoreResult<Option<Task>> {
        let mut tables = self.tables.lock().await;
        let Some(task) = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id && t.user_id == input.user_id)
        else {
            return Ok(None);
        };
        task.category_id = input.category_id;
        task.status_id = input.status_id;
        task.priority_id = input.priority_id;
        task.title = input.title.clone();
        task.description = input.description.clone();
        task.due_date = input.due_date;
        task.updated_at = Some(Utc::now());
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, task_id: DbId, owner_id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.tasks.len();
        tables
            .tasks
            .retain(|t| !(t.id == task_id && t.user_id == owner_id));
        Ok(tables.tasks.len() < before)
    }
}

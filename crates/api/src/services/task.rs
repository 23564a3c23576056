//! Task CRUD behind the ownership gate.
//!
//! Create and update run the same validation, cheapest check first:
//!
//! 1. owner id (and task id on update) present, title non-blank after trimming
//! 2. a free-text category name is resolved and overrides any explicit category id
//! 3. the status belongs to the owner
//! 4. the priority belongs to the owner
//! 5. the category, if any, belongs to the owner
//!
//! Anything missing or foreign is rejected rather than defaulted.

use std::sync::Arc;

use taskdeck_core::error::CoreError;
use taskdeck_core::types::{Date, DbId};
use taskdeck_core::validation::{require_id, require_non_empty};
use taskdeck_db::models::lookup::{Priority, Status};
use taskdeck_db::models::task::{Task, TaskFields};
use taskdeck_db::store::OwnershipStore;

use super::category::CategoryService;

/// Caller-supplied task fields before validation.
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    pub category_id: Option<DbId>,
    /// Resolved via [`CategoryService::ensure`]; wins over `category_id`.
    pub category_name: Option<String>,
    pub status_id: Option<DbId>,
    pub priority_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
}

#[derive(Clone)]
pub struct TaskService {
    ownership: Arc<dyn OwnershipStore>,
    categories: CategoryService,
}

impl TaskService {
    pub fn new(ownership: Arc<dyn OwnershipStore>, categories: CategoryService) -> Self {
        Self {
            ownership,
            categories,
        }
    }

    /// The owner's tasks, newest first.
    pub async fn list(&self, owner_id: DbId) -> Result<Vec<Task>, CoreError> {
        Ok(self.ownership.list_tasks(owner_id).await?)
    }

    /// Statuses a task of this owner may reference.
    pub async fn list_statuses(&self, owner_id: DbId) -> Result<Vec<Status>, CoreError> {
        Ok(self.ownership.list_statuses(owner_id).await?)
    }

    /// Priorities a task of this owner may reference.
    pub async fn list_priorities(&self, owner_id: DbId) -> Result<Vec<Priority>, CoreError> {
        Ok(self.ownership.list_priorities(owner_id).await?)
    }

    pub async fn get(&self, task_id: DbId, owner_id: DbId) -> Result<Task, CoreError> {
        self.ownership
            .find_task(task_id, owner_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Task",
                id: task_id,
            })
    }

    pub async fn create(&self, owner_id: DbId, input: TaskInput) -> Result<Task, CoreError> {
        let owner_id = require_id(owner_id, "user ID cannot be empty")?;
        let title = require_non_empty(&input.title, "task title cannot be empty")?;

        let fields = self.check_ownership(owner_id, title, input).await?;
        let task = self.ownership.create_task(&fields).await?;

        tracing::info!(user_id = %owner_id, task_id = %task.id, "Task created");
        Ok(task)
    }

    /// Full replacement of the task's mutable fields.
    pub async fn update(
        &self,
        task_id: DbId,
        owner_id: DbId,
        input: TaskInput,
    ) -> Result<Task, CoreError> {
        let owner_id = require_id(owner_id, "user ID cannot be empty")?;
        let task_id = require_id(task_id, "task ID cannot be empty")?;
        let title = require_non_empty(&input.title, "task title cannot be empty")?;

        let fields = self.check_ownership(owner_id, title, input).await?;
        let task = self
            .ownership
            .update_task(task_id, &fields)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Task",
                id: task_id,
            })?;

        tracing::info!(user_id = %owner_id, task_id = %task.id, "Task updated");
        Ok(task)
    }

    pub async fn delete(&self, task_id: DbId, owner_id: DbId) -> Result<(), CoreError> {
        let owner_id = require_id(owner_id, "user ID cannot be empty")?;
        let task_id = require_id(task_id, "task ID cannot be empty")?;

        if !self.ownership.delete_task(task_id, owner_id).await? {
            return Err(CoreError::NotFound {
                entity: "Task",
                id: task_id,
            });
        }
        tracing::info!(user_id = %owner_id, task_id = %task_id, "Task deleted");
        Ok(())
    }

    /// Steps 2-5 of the validation gate. `title` is already trimmed.
    async fn check_ownership(
        &self,
        owner_id: DbId,
        title: String,
        input: TaskInput,
    ) -> Result<TaskFields, CoreError> {
        let mut category_id = input.category_id.filter(|id| !id.is_nil());
        if let Some(name) = input.category_name.as_deref() {
            if !name.trim().is_empty() {
                category_id = self.categories.ensure(owner_id, name).await?;
            }
        }

        let status_id = self.owned_status(input.status_id, owner_id).await?;
        let priority_id = self.owned_priority(input.priority_id, owner_id).await?;

        if let Some(id) = category_id {
            if !self.ownership.category_owned(id, owner_id).await? {
                return Err(CoreError::Validation("category not owned".into()));
            }
        }

        Ok(TaskFields {
            user_id: owner_id,
            category_id,
            status_id,
            priority_id,
            title,
            description: input.description,
            due_date: input.due_date,
        })
    }

    async fn owned_status(&self, id: Option<DbId>, owner_id: DbId) -> Result<DbId, CoreError> {
        if let Some(id) = id {
            if self.ownership.status_exists(id, owner_id).await? {
                return Ok(id);
            }
        }
        Err(CoreError::Validation("invalid status".into()))
    }

    async fn owned_priority(&self, id: Option<DbId>, owner_id: DbId) -> Result<DbId, CoreError> {
        if let Some(id) = id {
            if self.ownership.priority_exists(id, owner_id).await? {
                return Ok(id);
            }
        }
        Err(CoreError::Validation("invalid priority".into()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use taskdeck_db::store::MemoryStore;

    use super::*;

    struct Fixture {
        tasks: TaskService,
        categories: CategoryService,
        store: Arc<MemoryStore>,
        owner: DbId,
        status: DbId,
        priority: DbId,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let categories = CategoryService::new(store.clone());
        let tasks = TaskService::new(store.clone(), categories.clone());
        let owner = DbId::new_v4();
        let status = store.insert_status(owner, "Todo").await.id;
        let priority = store.insert_priority(owner, "High").await.id;
        Fixture {
            tasks,
            categories,
            store,
            owner,
            status,
            priority,
        }
    }

    impl Fixture {
        fn input(&self, title: &str) -> TaskInput {
            TaskInput {
                status_id: Some(self.status),
                priority_id: Some(self.priority),
                title: title.to_string(),
                ..TaskInput::default()
            }
        }
    }

    #[tokio::test]
    async fn create_trims_title_and_persists() {
        let f = fixture().await;
        let mut input = f.input("  Write report ");
        input.description = Some("quarterly".into());
        input.due_date = Date::from_ymd_opt(2026, 11, 1);

        let task = f.tasks.create(f.owner, input).await.unwrap();

        assert_eq!(task.title, "Write report");
        assert_eq!(task.user_id, f.owner);
        assert_eq!(task.category_id, None);
        assert_eq!(task.due_date, Date::from_ymd_opt(2026, 11, 1));
        assert_eq!(task.updated_at, None);
        assert_eq!(f.tasks.get(task.id, f.owner).await.unwrap().id, task.id);
    }

    #[tokio::test]
    async fn blank_title_and_nil_owner_are_rejected() {
        let f = fixture().await;
        assert_matches!(
            f.tasks.create(f.owner, f.input("   ")).await,
            Err(CoreError::Validation(msg)) if msg == "task title cannot be empty"
        );
        assert_matches!(
            f.tasks.create(DbId::nil(), f.input("x")).await,
            Err(CoreError::Validation(msg)) if msg == "user ID cannot be empty"
        );
    }

    #[tokio::test]
    async fn category_name_creates_owned_category() {
        let f = fixture().await;
        let mut input = f.input("Ship it");
        input.category_name = Some("Work".into());

        let task = f.tasks.create(f.owner, input).await.unwrap();

        let work = f
            .store
            .find_category_by_name(f.owner, "Work")
            .await
            .unwrap()
            .expect("category should have been created");
        assert_eq!(task.category_id, Some(work.id));
        assert_eq!(work.user_id, f.owner);
    }

    #[tokio::test]
    async fn category_name_supersedes_explicit_id() {
        let f = fixture().await;
        let home = f.categories.create(f.owner, "Home").await.unwrap();
        let mut input = f.input("Ship it");
        input.category_id = Some(home.id);
        input.category_name = Some("Work".into());

        let task = f.tasks.create(f.owner, input).await.unwrap();

        assert_ne!(task.category_id, Some(home.id));
        assert!(task.category_id.is_some());
    }

    #[tokio::test]
    async fn foreign_status_and_priority_are_invalid() {
        let f = fixture().await;
        let stranger = DbId::new_v4();
        let foreign_status = f.store.insert_status(stranger, "Todo").await.id;
        let foreign_priority = f.store.insert_priority(stranger, "High").await.id;

        let mut input = f.input("x");
        input.status_id = Some(foreign_status);
        assert_matches!(
            f.tasks.create(f.owner, input).await,
            Err(CoreError::Validation(msg)) if msg == "invalid status"
        );

        let mut input = f.input("x");
        input.priority_id = Some(foreign_priority);
        assert_matches!(
            f.tasks.create(f.owner, input).await,
            Err(CoreError::Validation(msg)) if msg == "invalid priority"
        );
    }

    #[tokio::test]
    async fn missing_status_is_invalid() {
        let f = fixture().await;
        let mut input = f.input("x");
        input.status_id = None;
        assert_matches!(
            f.tasks.create(f.owner, input).await,
            Err(CoreError::Validation(msg)) if msg == "invalid status"
        );
    }

    #[tokio::test]
    async fn foreign_category_is_not_owned() {
        let f = fixture().await;
        let theirs = f.categories.create(DbId::new_v4(), "Work").await.unwrap();
        let mut input = f.input("x");
        input.category_id = Some(theirs.id);

        assert_matches!(
            f.tasks.create(f.owner, input).await,
            Err(CoreError::Validation(msg)) if msg == "category not owned"
        );
    }

    #[tokio::test]
    async fn update_replaces_fields_and_stamps_updated_at() {
        let f = fixture().await;
        let task = f.tasks.create(f.owner, f.input("Draft")).await.unwrap();
        let mut input = f.input("Final");
        input.category_name = Some("Work".into());

        let updated = f.tasks.update(task.id, f.owner, input).await.unwrap();

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.title, "Final");
        assert!(updated.category_id.is_some());
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_applies_the_same_ownership_checks() {
        let f = fixture().await;
        let stranger = DbId::new_v4();
        let task = f.tasks.create(f.owner, f.input("Draft")).await.unwrap();
        let foreign_status = f.store.insert_status(stranger, "Todo").await.id;
        let foreign_priority = f.store.insert_priority(stranger, "High").await.id;
        let foreign_category = f.categories.create(stranger, "Work").await.unwrap().id;

        let mut input = f.input("Final");
        input.status_id = Some(foreign_status);
        assert_matches!(
            f.tasks.update(task.id, f.owner, input).await,
            Err(CoreError::Validation(msg)) if msg == "invalid status"
        );

        let mut input = f.input("Final");
        input.priority_id = Some(foreign_priority);
        assert_matches!(
            f.tasks.update(task.id, f.owner, input).await,
            Err(CoreError::Validation(msg)) if msg == "invalid priority"
        );

        let mut input = f.input("Final");
        input.category_id = Some(foreign_category);
        assert_matches!(
            f.tasks.update(task.id, f.owner, input).await,
            Err(CoreError::Validation(msg)) if msg == "category not owned"
        );

        let unchanged = f.tasks.get(task.id, f.owner).await.unwrap();
        assert_eq!(unchanged.title, "Draft");
        assert!(unchanged.updated_at.is_none());
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_task_are_not_found() {
        let f = fixture().await;
        let missing = DbId::new_v4();

        assert_matches!(
            f.tasks.update(missing, f.owner, f.input("x")).await,
            Err(CoreError::NotFound { entity: "Task", .. })
        );
        assert_matches!(
            f.tasks.delete(missing, f.owner).await,
            Err(CoreError::NotFound { entity: "Task", .. })
        );
        assert_matches!(
            f.tasks.update(DbId::nil(), f.owner, f.input("x")).await,
            Err(CoreError::Validation(msg)) if msg == "task ID cannot be empty"
        );
    }

    #[tokio::test]
    async fn other_users_cannot_see_or_delete_a_task() {
        let f = fixture().await;
        let task = f.tasks.create(f.owner, f.input("Private")).await.unwrap();
        let stranger = DbId::new_v4();

        assert_matches!(f.tasks.get(task.id, stranger).await, Err(CoreError::NotFound { .. }));
        assert_matches!(f.tasks.delete(task.id, stranger).await, Err(CoreError::NotFound { .. }));
        assert!(f.tasks.list(stranger).await.unwrap().is_empty());

        f.tasks.delete(task.id, f.owner).await.unwrap();
        assert!(f.tasks.list(f.owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let f = fixture().await;
        f.tasks.create(f.owner, f.input("first")).await.unwrap();
        f.tasks.create(f.owner, f.input("second")).await.unwrap();

        let titles: Vec<String> = f
            .tasks
            .list(f.owner)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }
}

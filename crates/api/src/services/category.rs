//! Category listing, explicit creation, deletion, and name resolution.

use std::sync::Arc;

use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;
use taskdeck_core::validation::{require_id, require_non_empty};
use taskdeck_db::models::category::{Category, CreateCategory};
use taskdeck_db::store::OwnershipStore;

#[derive(Clone)]
pub struct CategoryService {
    ownership: Arc<dyn OwnershipStore>,
}

impl CategoryService {
    pub fn new(ownership: Arc<dyn OwnershipStore>) -> Self {
        Self { ownership }
    }

    /// Resolve a free-text name to one of the owner's categories, creating it
    /// when absent.
    ///
    /// A blank name resolves to `None`. If the insert fails (typically a
    /// concurrent request created the same name first) the name is looked up
    /// again and the existing id wins; only when that lookup also comes back
    /// empty does the insert failure propagate.
    pub async fn ensure(&self, owner_id: DbId, name: &str) -> Result<Option<DbId>, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        if let Some(existing) = self.ownership.find_category_by_name(owner_id, name).await? {
            return Ok(Some(existing.id));
        }

        let input = CreateCategory {
            user_id: owner_id,
            name: name.to_string(),
        };
        match self.ownership.create_category(&input).await {
            Ok(category) => {
                tracing::info!(user_id = %owner_id, category_id = %category.id, "Category created by name");
                Ok(Some(category.id))
            }
            Err(create_err) => match self.ownership.find_category_by_name(owner_id, name).await {
                Ok(Some(existing)) => {
                    tracing::debug!(
                        user_id = %owner_id,
                        category_id = %existing.id,
                        "Category appeared concurrently, reusing it",
                    );
                    Ok(Some(existing.id))
                }
                _ => Err(create_err.into()),
            },
        }
    }

    /// The owner's categories ordered by name.
    pub async fn list(&self, owner_id: DbId) -> Result<Vec<Category>, CoreError> {
        Ok(self.ownership.list_categories(owner_id).await?)
    }

    /// Explicit creation: unlike [`ensure`](Self::ensure), an existing name is a conflict.
    pub async fn create(&self, owner_id: DbId, name: &str) -> Result<Category, CoreError> {
        let owner_id = require_id(owner_id, "user ID cannot be empty")?;
        let name = require_non_empty(name, "category name cannot be empty")?;

        if self
            .ownership
            .find_category_by_name(owner_id, &name)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("category already exists".into()));
        }

        let input = CreateCategory {
            user_id: owner_id,
            name,
        };
        let category = match self.ownership.create_category(&input).await {
            Ok(category) => category,
            Err(e) if e.is_unique_violation() => {
                return Err(CoreError::Conflict("category already exists".into()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %owner_id, category_id = %category.id, "Category created");
        Ok(category)
    }

    /// Delete one of the owner's categories.
    ///
    /// Missing and foreign categories both report `NotFound`.
    pub async fn delete(&self, category_id: DbId, owner_id: DbId) -> Result<(), CoreError> {
        if !self.ownership.delete_category(category_id, owner_id).await? {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: category_id,
            });
        }
        tracing::info!(user_id = %owner_id, category_id = %category_id, "Category deleted");
        Ok(())
    }
}

use std::sync::Arc;

use taskdeck_db::store::{CredentialStore, OwnershipStore};

use crate::config::ServerConfig;
use crate::services::{AuthService, CategoryService, TaskService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (the auth extractor reads the JWT section).
    pub config: Arc<ServerConfig>,
    /// Account store, also probed by the health check.
    pub credentials: Arc<dyn CredentialStore>,
    pub auth: Arc<AuthService>,
    pub categories: Arc<CategoryService>,
    pub tasks: Arc<TaskService>,
}

impl AppState {
    /// Wire the services over the given stores.
    pub fn new(
        config: ServerConfig,
        credentials: Arc<dyn CredentialStore>,
        ownership: Arc<dyn OwnershipStore>,
    ) -> Self {
        let auth = AuthService::new(Arc::clone(&credentials), config.jwt.clone());
        let categories = CategoryService::new(Arc::clone(&ownership));
        let tasks = TaskService::new(ownership, categories.clone());

        Self {
            config: Arc::new(config),
            credentials,
            auth: Arc::new(auth),
            categories: Arc::new(categories),
            tasks: Arc::new(tasks),
        }
    }
}

//! Business rules between the HTTP handlers and the stores.
//!
//! Services normalize input, enforce ownership, and return classified
//! [`CoreError`](taskdeck_core::error::CoreError)s. They never see HTTP types.

pub mod auth;
pub mod category;
pub mod task;

pub use auth::{AuthService, AuthSession};
pub use category::CategoryService;
pub use task::{TaskInput, TaskService};

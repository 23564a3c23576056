//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every per-user query is
//! scoped by `user_id`.

pub mod category_repo;
pub mod lookup_repo;
pub mod task_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use lookup_repo::{PriorityRepo, StatusRepo};
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;

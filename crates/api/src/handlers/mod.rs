pub mod auth;
pub mod category;
pub mod lookup;
pub mod task;
pub mod user;

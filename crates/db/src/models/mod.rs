//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO where the entity is mutable

pub mod category;
pub mod lookup;
pub mod task;
pub mod user;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Input DTOs for inserts and updates

pub mod project;
pub mod prompt;
pub mod user;

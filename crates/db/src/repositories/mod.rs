//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod prompt_repo;
pub mod user_repo;

pub use project_repo::{ProjectCreation, ProjectRepo};
pub use prompt_repo::PromptRepo;
pub use user_repo::UserRepo;

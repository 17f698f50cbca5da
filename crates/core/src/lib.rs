//! Domain logic for page generation.
//!
//! Pure, storage-free building blocks shared by the database and API
//! crates: id/timestamp aliases, the error taxonomy, request validation,
//! prompt composition and model-output validation.

pub mod error;
pub mod generation;
pub mod page_output;
pub mod prompt_builder;
pub mod types;

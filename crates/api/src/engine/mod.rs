//! Page generation engine.
//!
//! Contains the orchestrator that ties the LLM backend to project and
//! prompt-history persistence.

pub mod generation;

pub use generation::{GeneratePage, GenerationResult, GenerationService};

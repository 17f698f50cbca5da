//! Generation request rules: quotas, input validation and project naming.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of projects a single user may own at any time.
pub const MAX_PROJECTS_PER_USER: i64 = 5;

/// Maximum length for a generation prompt in characters.
pub const MAX_PROMPT_LENGTH: usize = 10_000;

/// Maximum length for a project name in characters.
pub const MAX_PROJECT_NAME_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a generation prompt: must contain non-whitespace text and stay
/// within the length limit.
pub fn validate_prompt(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Missing or invalid 'prompt' field.".to_string(),
        ));
    }
    reject_nul("prompt", text)?;
    let len = text.chars().count();
    if len > MAX_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt exceeds maximum length of {MAX_PROMPT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// PostgreSQL `TEXT` cannot hold U+0000, so such input must be refused
/// before anything is generated or stored.
pub fn reject_nul(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "'{field}' must not contain NUL characters."
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Pick the name for a newly created project.
///
/// Uses the trimmed caller-supplied name when it has content, otherwise a
/// placeholder derived from `now` in Unix milliseconds.
pub fn resolve_project_name(requested: Option<&str>, now: Timestamp) -> String {
    match requested.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Project {}", now.timestamp_millis()),
    }
}

/// Validate an optional project name against the length limit.
pub fn validate_project_name(name: Option<&str>) -> Result<(), CoreError> {
    let Some(name) = name else {
        return Ok(());
    };
    reject_nul("projectName", name)?;
    let len = name.trim().chars().count();
    if len > MAX_PROJECT_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Project name exceeds maximum length of {MAX_PROJECT_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "success": true }` acknowledgement for mutations with no payload.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

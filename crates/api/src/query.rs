//! Shared query parameter and body types for API handlers.
//!
//! Identifiers arrive in camelCase (`userId`, `projectId`) and must be
//! positive integers.

use pagesmith_core::types::DbId;
use serde::Deserialize;
use validator::Validate;

/// `?userId=` query parameters, also used as the `DELETE /api/user/delete`
/// body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserParams {
    #[validate(range(min = 1, message = "userId must be a positive integer."))]
    pub user_id: DbId,
}

/// `?userId=&projectId=` query parameters, also used as the
/// `DELETE /api/project` body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProjectParams {
    #[validate(range(min = 1, message = "userId must be a positive integer."))]
    pub user_id: DbId,
    #[validate(range(min = 1, message = "projectId must be a positive integer."))]
    pub project_id: DbId,
}

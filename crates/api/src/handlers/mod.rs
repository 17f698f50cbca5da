//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input shape, delegate to repositories or the
//! generation engine, and map errors via [`AppError`].

pub mod generation;
pub mod project;
pub mod user;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use pagesmith_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, turning extractor rejections (syntax, missing or
/// mistyped fields) into 400 responses, then run its `validator` rules.
pub(crate) fn validated_body<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
) -> AppResult<T> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    run_validation(body)
}

/// Query-string counterpart of [`validated_body`].
pub(crate) fn validated_query<T: Validate>(
    params: Result<Query<T>, QueryRejection>,
) -> AppResult<T> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    run_validation(params)
}

fn run_validation<T: Validate>(value: T) -> AppResult<T> {
    value
        .validate()
        .map_err(|errors| AppError::Core(CoreError::Validation(errors.to_string())))?;
    Ok(value)
}

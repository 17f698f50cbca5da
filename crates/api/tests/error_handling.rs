//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use pagesmith_api::error::AppError;
use pagesmith_core::error::CoreError;
use pagesmith_llm::LlmError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation(
        "Missing or invalid 'prompt' field.".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing or invalid 'prompt' field.");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("invalid body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid body");
}

#[tokio::test]
async fn project_limit_returns_400_with_limit() {
    let err = AppError::Core(CoreError::ProjectLimit {
        user_id: 3,
        limit: 5,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "PROJECT_LIMIT");
    assert_eq!(json["error"], "User has reached the maximum of 5 projects.");
}

#[tokio::test]
async fn not_found_kinds_return_404() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::UserNotFound { user_id: 9 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "USER_NOT_FOUND");

    let (status, json) = error_to_response(AppError::Core(CoreError::ProjectNotFound {
        project_id: 4,
        user_id: 9,
    }))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "PROJECT_NOT_FOUND");
    assert_eq!(json["error"], "Project not found for this user.");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Conflict("duplicate email".into()))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "duplicate email");
}

// ---------------------------------------------------------------------------
// Model contract violations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_json_hides_raw_output() {
    let err = AppError::Core(CoreError::LlmInvalidJson {
        raw: "here is some secret prose".into(),
        expected: ["previewHtml", "reactComponent"],
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "LLM_INVALID_JSON");
    assert_eq!(
        json["error"],
        "Model did not return valid JSON with 'previewHtml' and 'reactComponent'."
    );
    assert!(!json["error"].as_str().unwrap().contains("secret prose"));
}

#[tokio::test]
async fn missing_fields_are_named() {
    let err = AppError::Core(CoreError::LlmMissingFields {
        missing: vec!["previewHtml", "reactComponent"],
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "LLM_MISSING_FIELDS");
    assert_eq!(
        json["error"],
        "Model JSON missing string fields: previewHtml, reactComponent."
    );
}

// ---------------------------------------------------------------------------
// Server errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_error_returns_generic_500() {
    let err = AppError::Upstream(LlmError::Api {
        status: 401,
        body: "invalid api key sk-live-abc".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
    assert_eq!(json["error"], "AI generation failed");
}

#[tokio::test]
async fn unclassified_database_error_returns_sanitized_500() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "secret database credentials leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

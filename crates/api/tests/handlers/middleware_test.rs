use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use shiftbook_api::middleware::auth;
use shiftbook_api::middleware::error_handling::AppError;
use shiftbook_core::errors::RosterError;
use shiftbook_core::models::staff::Caller;
use uuid::Uuid;

#[test]
fn test_error_handling_not_found() {
    let error = RosterError::NotFound("Resource not found".to_string());

    let response = AppError(error).into_response();

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[test]
fn test_error_handling_validation() {
    let error = RosterError::Validation("Invalid input".to_string());

    let response = AppError(error).into_response();

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[test]
fn test_error_handling_forbidden() {
    let error = RosterError::Forbidden("Not authorized".to_string());

    let response = AppError(error).into_response();

    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[test]
fn test_error_handling_conflict() {
    let error = RosterError::Conflict("Cell already has a row".to_string());

    let response = AppError(error).into_response();

    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[test]
fn test_error_handling_database() {
    let error = RosterError::Database(eyre::eyre!("Database error"));

    let response = AppError(error).into_response();

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_error_handling_internal() {
    let error = RosterError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = AppError(error).into_response();

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_bearer_token_extraction() {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_static("Bearer secret-token"),
    );

    assert_eq!(auth::bearer_token(&headers), Some("secret-token"));
}

#[test]
fn test_bearer_token_missing_or_malformed() {
    let headers = HeaderMap::new();
    assert_eq!(auth::bearer_token(&headers), None);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
    assert_eq!(auth::bearer_token(&headers), None);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
    assert_eq!(auth::bearer_token(&headers), None);
}

#[test]
fn test_require_privileged_accepts_manager() {
    let caller = Caller::privileged();

    assert!(auth::require_privileged(&caller).is_ok());
}

#[test]
fn test_require_privileged_rejects_staff_caller() {
    let caller = Caller::staff(Uuid::new_v4());

    let result = auth::require_privileged(&caller);

    assert!(matches!(result, Err(RosterError::Forbidden(_))));
}

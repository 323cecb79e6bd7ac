//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! shiftbook API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shiftbook_core::errors::RosterError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `RosterError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub RosterError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body. Note that
/// `Conflict` is mapped for completeness but the shift-cell handlers
/// recover from create races internally and never surface it.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            RosterError::NotFound(_) => StatusCode::NOT_FOUND,
            RosterError::Validation(_) => StatusCode::BAD_REQUEST,
            RosterError::Forbidden(_) => StatusCode::FORBIDDEN,
            RosterError::Conflict(_) => StatusCode::CONFLICT,
            RosterError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RosterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from RosterError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, RosterError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a
/// `RosterError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RosterError::Database(err))
    }
}

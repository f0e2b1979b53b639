// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::handicap::HandicapError;
use crate::services::scoring::ScoringError;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Handicap error: {0}")]
    Handicap(#[from] HandicapError),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (error, details) = match &self {
            AppError::BadRequest(msg) => ("bad_request", msg.clone()),
            AppError::Validation(errors) => ("validation_error", validation_details(errors)),
            AppError::Scoring(err) => ("invalid_input", err.to_string()),
            AppError::Handicap(err) => ("invalid_roster", err.to_string()),
        };

        tracing::warn!(error, details = %details, "Rejected request");

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Flatten field errors into one message, preferring custom messages.
fn validation_details(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

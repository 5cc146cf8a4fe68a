// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error taxonomy and HTTP mapping.
//!
//! Three failure signals are caller-visible and distinct: validation
//! failures (400), uniqueness conflicts (409), and missing rows (404).
//! Anything else the storage layer reports stays a generic database
//! failure (500), distinguishable from the three above. Nothing is
//! swallowed, and no operation retries.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result alias for handler and repository operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application error, mapped onto an HTTP status by [`IntoResponse`].
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was missing or empty. Nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule was violated at write time. Nothing was
    /// persisted; the existing row is unchanged.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The identifier did not resolve to an existing row.
    #[error("{0}")]
    NotFound(String),

    /// Any other storage-layer failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl AppError {
    /// Validation failure (HTTP 400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Uniqueness conflict (HTTP 409).
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Missing row (HTTP 404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Status code this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if matches!(db.kind(), ErrorKind::UniqueViolation) {
                return Self::Conflict(db.message().to_string());
            }
        }
        Self::Database(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_stays_generic() {
        // NotFound is decided by lookups returning None, not by sqlx.
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
    }
}

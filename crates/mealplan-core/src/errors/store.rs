// ABOUTME: Store-specific error types for the recipe data-access layer
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! # Store Error Types
//!
//! Provides structured error types for data-access operations:
//! - `StoreError` - Errors raised while fetching or writing backend records
//! - Conversion to `AppError` so the planner propagates them unchanged

use super::{AppError, ErrorCode};
use std::error::Error;
use std::fmt;

/// Errors specific to recipe store operations.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// The backend could not be reached
    Unavailable {
        /// Name of the store backend
        store: String,
        /// Details about the failure
        details: String,
    },
    /// A fetch or write was rejected by the backend
    RequestFailed {
        /// Operation that failed (e.g. `fetch_recipes`)
        operation: String,
        /// Details about the failure
        details: String,
    },
    /// A record could not be located for a write
    RecordNotFound {
        /// Kind of record (favorite, preference, ...)
        kind: String,
        /// Identifying key of the record
        key: String,
    },
    /// Dataset content could not be decoded
    Malformed {
        /// Where the data came from
        origin: String,
        /// Decoder message
        details: String,
    },
}

impl StoreError {
    /// Create an "unavailable" error
    #[must_use]
    pub fn unavailable(store: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Unavailable {
            store: store.into(),
            details: details.into(),
        }
    }

    /// Create a "request failed" error
    #[must_use]
    pub fn request_failed(operation: impl Into<String>, details: impl Into<String>) -> Self {
        Self::RequestFailed {
            operation: operation.into(),
            details: details.into(),
        }
    }

    /// Create a "record not found" error
    #[must_use]
    pub fn record_not_found(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self::RecordNotFound {
            kind: kind.into(),
            key: key.into(),
        }
    }

    /// Create a "malformed" error
    #[must_use]
    pub fn malformed(origin: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Malformed {
            origin: origin.into(),
            details: details.into(),
        }
    }

    /// Map this error onto the unified error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Unavailable { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::RequestFailed { .. } => ErrorCode::ExternalServiceError,
            Self::RecordNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::Malformed { .. } => ErrorCode::SerializationError,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { store, details } => {
                write!(f, "Store '{store}' is unavailable: {details}")
            }
            Self::RequestFailed { operation, details } => {
                write!(f, "Store operation '{operation}' failed: {details}")
            }
            Self::RecordNotFound { kind, key } => {
                write!(f, "No {kind} record for '{key}'")
            }
            Self::Malformed { origin, details } => {
                write!(f, "Malformed data in {origin}: {details}")
            }
        }
    }
}

impl Error for StoreError {}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}

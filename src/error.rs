//! Error types for PetFriends API operations.
//!
//! This module provides structured error handling for petfriends operations.
//!
//! # What is (and is not) an error
//!
//! HTTP 400/403/404 replies from the service are *not* errors here: they are
//! completed round-trips, reported through [`ApiResponse`](crate::types::ApiResponse)
//! with their status code intact, because the test suite asserts on exactly
//! those statuses. [`ApiError`] covers only the failures that prevent a
//! round-trip from completing:
//! - Configuration errors (missing credentials, empty base URL)
//! - Transport failures (connection refused, timeout at the network layer)
//! - Response bodies that cannot be decoded on a success status
//! - Local photo files that cannot be read for an upload
//!
//! # Result Type
//!
//! Use [`ApiResult<T>`] as a convenient alias for `Result<T, ApiError>`:
//!
//! ```rust
//! use petfriends::ApiResult;
//!
//! fn my_function() -> ApiResult<String> {
//!     Ok("Success".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`ApiError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Client errors (invalid configuration, unreadable local files).
    ///
    /// The caller made a mistake that they can fix (missing credentials,
    /// bad photo path, etc.).
    Client,

    /// External failures (the service or the network had an issue).
    ///
    /// May be transient or indicate a service outage.
    External,
}

// ============================================================================
// API Error types
// ============================================================================

/// Convenient result type for PetFriends API operations.
///
/// Alias for `Result<T, ApiError>`.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the PetFriends service.
///
/// Each variant can be categorized via [`category()`](Self::category).
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use petfriends::ApiError;
///
/// let err = ApiError::configuration_error("Missing email");
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client configuration is invalid or incomplete.
    ///
    /// Common causes:
    /// - Missing credentials when reading from the environment
    /// - Empty base URL
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request to the service failed at the transport layer.
    ///
    /// The request never produced a status code to assert on. Check the
    /// source error for the underlying cause.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A success-status response body couldn't be decoded.
    ///
    /// The service answered 2xx but the payload didn't match the documented
    /// shape. This might indicate a service API change.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// A local photo file could not be read for a multipart upload.
    #[error("Cannot read attachment {}: {source}", path.display())]
    AttachmentError {
        /// Path of the file that couldn't be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::AttachmentError { .. } => ErrorCategory::Client,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the error at the appropriate level.
    // Use them instead of constructing variants directly.

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "PetFriends configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "PetFriends request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "PetFriends response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn attachment_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        log_error!(
            error_type = "attachment_error",
            path = %path.display(),
            "Photo attachment could not be read"
        );
        Self::AttachmentError { path, source }
    }
}

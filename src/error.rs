//! Error types for PetFriends client operations.
//!
//! The error type deliberately covers only what the client itself can fail
//! at: building a request, moving bytes, reading a local photo file, or
//! decoding a body into a typed value on request. Remote verdicts are not
//! errors: any HTTP status the service returns travels back inside the
//! [`ApiResponse`](crate::response::ApiResponse) envelope, and it is the test
//! layer's job to treat an unexpected status as a failure.
//!
//! # Result Type
//!
//! Use [`ClientResult<T>`] as a convenient alias for `Result<T, ClientError>`:
//!
//! ```rust
//! use petfriends_qa::ClientResult;
//!
//! fn extract_key(body: &serde_json::Value) -> ClientResult<String> {
//!     Ok(body["key"].as_str().unwrap_or_default().to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenient result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors that can occur inside the PetFriends client.
///
/// Each variant has a constructor method that logs the failure on creation;
/// use those instead of building variants directly.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The client settings cannot produce a usable request.
    ///
    /// Common causes:
    /// - Empty base URL
    /// - Credentials or API key containing bytes a header cannot carry
    /// - HTTP client construction failure
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The request never produced an HTTP status (connect, DNS, or IO
    /// failure). This is the only failure mode the suite propagates
    /// unwrapped; there is no retry policy.
    #[error("request failed: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The connection died while draining the response body.
    #[error("failed to read response body: {message}")]
    BodyRead {
        /// Details about the read failure.
        message: String,
    },

    /// A photo file could not be read from disk.
    #[error("failed to read photo {}: {source}", .path.display())]
    PhotoRead {
        /// The path that was given to the operation.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Typed decoding was asked of a body that does not have that shape
    /// (for example, decoding a pet list out of a plain-text 403 page).
    #[error("unexpected response body: {message}")]
    UnexpectedBody {
        /// Details about the shape mismatch.
        message: String,
    },
}

impl ClientError {
    /// Create a configuration error (logs at ERROR level).
    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration",
            message = %message,
            "PetFriends client configuration invalid"
        );
        Self::Configuration { message }
    }

    /// Create a transport error (logs at ERROR level).
    pub fn transport(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "transport",
            message = %message,
            has_source = source.is_some(),
            "PetFriends request never reached a status"
        );
        Self::Transport { message, source }
    }

    /// Create a body-read error (logs at WARN level).
    pub fn body_read(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "body_read",
            message = %message,
            "PetFriends response body could not be drained"
        );
        Self::BodyRead { message }
    }

    /// Create a photo-read error (logs at ERROR level).
    pub fn photo_read(path: &Path, source: std::io::Error) -> Self {
        log_error!(
            error_type = "photo_read",
            path = %path.display(),
            io_error = %source,
            "Photo file could not be read"
        );
        Self::PhotoRead {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an unexpected-body error (logs at WARN level).
    pub fn unexpected_body(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "unexpected_body",
            message = %message,
            "Response body did not match the requested shape"
        );
        Self::UnexpectedBody { message }
    }
}

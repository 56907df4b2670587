//! Error types for the well-redesign-core library.
//!
//! This module provides granular error variants for different failure modes,
//! enabling precise error handling and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur within the well-redesign-core library.
///
/// Each variant represents a specific failure mode with contextual information
/// to help diagnose and handle errors appropriately.
#[derive(Error, Debug)]
pub enum AppError {
    /// The backend bootstrap file is absent. Fatal at startup: the
    /// generation feature is unusable until the file is provided.
    #[error("backend address file not found: {0} (copy it from the backend host)")]
    ConfigMissing(PathBuf),

    /// Configuration-related errors (malformed URL, invalid values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source image could not be read or is not a supported format.
    #[error("Invalid source image: {0}")]
    InvalidImage(String),

    /// The source image file exists but contains no data.
    #[error("Source image is empty")]
    EmptyImage,

    /// The generation backend answered with a non-success status.
    #[error("Generation backend failed with status {status}: {message}")]
    Backend { status: u16, message: String },

    /// Request assembly or transport failed before a response arrived.
    #[error("Request error: {0}")]
    Request(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a source-image error with the given message.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Creates a backend error from a status code and response body.
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Creates a request/transport error with the given message.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Whether a fresh attempt with the same inputs could succeed.
    ///
    /// Backend and transport failures are worth retrying by the user;
    /// configuration and image errors are not until the input changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Backend { .. } | Self::Request(_))
    }
}

/// A convenient alias for Result with [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

//! Error types for the jobdeck core.
//!
//! This module defines the centralized error type [`JobdeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Application-form validation failures are deliberately *not* a variant here:
//! they are expected, recoverable outcomes surfaced to the submitting collaborator
//! as field-keyed messages (see [`ValidationErrors`](crate::domain::application::ValidationErrors)),
//! while `JobdeckError` covers the I/O failures that the core absorbs at their origin.

use thiserror::Error;

/// The main error type for jobdeck core operations.
///
/// This enum consolidates the failure conditions that can occur at the core's
/// I/O boundaries: fetching the remote job feed and reading or writing the
/// preference store. Per the crate's propagation policy these errors are logged
/// and absorbed inside [`GlobalStore`](crate::app::GlobalStore) rather than
/// thrown into presentation code.
#[derive(Debug, Error)]
pub enum JobdeckError {
    /// The remote feed payload had an unexpected shape.
    ///
    /// Occurs when the response body is valid JSON but is neither a top-level
    /// array of job records nor an object carrying a `jobs` array.
    #[error("Feed error: {0}")]
    Feed(String),

    /// The feed request failed at the transport level.
    ///
    /// Wraps connection failures, non-success status codes, and JSON decode
    /// errors from the HTTP client. Automatically converts from
    /// `reqwest::Error` using the `#[from]` attribute.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Preference store operation failed.
    ///
    /// Occurs when reading from or writing to the preference backend fails.
    /// The string contains a description of what went wrong.
    #[error("Preference store error: {0}")]
    Preferences(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for jobdeck operations.
///
/// This is a type alias for `std::result::Result<T, JobdeckError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, JobdeckError>;

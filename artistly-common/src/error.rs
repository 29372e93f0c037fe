//! Common error types for ArTistLy

use thiserror::Error;

use crate::models::SubmissionStatus;

/// Common result type for ArTistLy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the library and the web service
///
/// Form validation failures are not represented here: they are collected
/// into [`crate::onboarding::ValidationErrors`] so every field can be
/// reported at once.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Review attempted on a submission that is no longer pending
    #[error("Submission {id} cannot move from {from} to {to}")]
    InvalidStateTransition {
        id: String,
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML configuration file
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Neither flow lets these reach the rendering surface; they are logged and
/// turned into empty or stale data.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External service error (network failure, unexpected status)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Backend returned a body that could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

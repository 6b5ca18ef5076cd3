//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// City name not present in the predefined region table
    #[error("Unknown city: {0}")]
    UnknownCity(String),
}

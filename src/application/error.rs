//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Reasons a whole message cannot be decoded.
///
/// The display form of each variant is the literal sentinel returned by
/// [`Decoder::decode`](crate::application::Decoder::decode).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Absent, empty or whitespace-only message.
    #[error("[ERROR: Empty input]")]
    EmptyInput,

    /// Nothing but the terminator (and whitespace).
    #[error("[ERROR: No Morse code provided]")]
    NoCode,

    /// Tokenized input that yielded no characters.
    #[error("[ERROR: Could not decode any letters]")]
    NothingDecoded,
}

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

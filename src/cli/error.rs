//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{failed} of {total} messages could not be decoded")]
    Undecodable { failed: usize, total: usize },

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Undecodable { .. } => crate::exitcode::DATAERR,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::InputNotFound(_) => crate::exitcode::NOINPUT,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

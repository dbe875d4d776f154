//! Error conversion helpers for I/O on message sources
//!
//! Provides an extension trait for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// std::fs::read_to_string(&path)
    ///     .with_path_context("read messages", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Add plain context (e.g. for stdin, which has no path).
    fn with_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ApplicationError::InputNotFound(path.to_path_buf())
            } else {
                ApplicationError::OperationFailed {
                    context: format!("{}: {}", action, path.display()),
                    source: Box::new(e),
                }
            }
        })
    }

    fn with_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: context.to_string(),
            source: Box::new(e),
        })
    }
}

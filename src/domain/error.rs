//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised while building a code tree from an alphabet table.
///
/// The built-in alphabet never produces these; they guard caller-supplied tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty code for letter: {0}")]
    EmptyCode(char),

    #[error("invalid symbol {symbol:?} in code {code:?} for letter {letter}")]
    InvalidSymbol {
        letter: char,
        code: String,
        symbol: char,
    },

    #[error("duplicate code {code:?}: already assigned to {existing}, cannot assign {letter}")]
    DuplicateCode {
        code: String,
        existing: char,
        letter: char,
    },
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! Application layer: message tokenizing and decoding
//!
//! This layer orchestrates the domain code tree; it performs no I/O itself.

pub mod decoder;
pub mod error;
pub mod error_ext;
pub mod tokenizer;

pub use decoder::{decode, shared, Decoder, PLACEHOLDER};
pub use error::{ApplicationError, ApplicationResult, DecodeError};
pub use error_ext::IoResultExt;
pub use tokenizer::{tokenize, Word, LETTER_SEPARATOR, TERMINATOR, WORD_SEPARATOR};

//! Morse code decoder backed by a binary code tree.
//!
//! The built-in A-Z alphabet is loaded into an arena-based trie where a dot
//! descends left and a dash descends right. Decoding splits a message into
//! words (two spaces) and letter codes (one space), strips an optional trailing
//! `#`, and walks the tree once per letter code.
//!
//! Unknown letter codes decode to `?` inline. Messages that cannot be decoded
//! at all yield a sentinel string instead of failing:
//!
//! ```
//! assert_eq!(morsetree::decode(".... . .-.. . -.  --. ..-#"), "HELEN GU");
//! assert_eq!(morsetree::decode("......#"), "?");
//! assert_eq!(morsetree::decode(None), "[ERROR: Empty input]");
//! assert_eq!(morsetree::decode("#"), "[ERROR: No Morse code provided]");
//! ```
//!
//! Layers:
//! - [`domain`]: alphabet, code tree, tree builder
//! - [`application`]: tokenizer and decoder
//! - [`config`]: layered settings for the CLI
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{decode, DecodeError, Decoder};
pub use domain::{CodeTree, Symbol, TreeBuilder};

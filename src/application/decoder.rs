//! Message decoder
//!
//! Walks the code tree once per letter code and assembles the decoded words.

use std::sync::OnceLock;

use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::application::tokenizer::tokenize;
use crate::application::DecodeError;
use crate::domain::CodeTree;

/// Character emitted for a letter code with no letter in the tree.
pub const PLACEHOLDER: char = '?';

/// Decodes Morse messages against a read-only code tree.
///
/// Decoding holds no state between calls, so one decoder can serve any number
/// of threads at once.
#[derive(Debug)]
pub struct Decoder {
    tree: CodeTree,
    placeholder: char,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Decoder for the built-in A-Z alphabet.
    pub fn new() -> Self {
        Self::with_tree(CodeTree::morse())
    }

    pub fn with_tree(tree: CodeTree) -> Self {
        Self {
            tree,
            placeholder: PLACEHOLDER,
        }
    }

    /// Replace the character substituted for unknown letter codes.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Decode a single letter code, substituting the placeholder when unknown.
    pub fn decode_letter(&self, code: &str) -> char {
        self.tree.lookup(code).unwrap_or_else(|| {
            trace!("unknown letter code: {:?}", code);
            self.placeholder
        })
    }

    /// Decode the letter codes of one word.
    pub fn decode_word(&self, codes: &[&str]) -> String {
        codes.iter().map(|code| self.decode_letter(code)).collect()
    }

    /// Decode a full message.
    ///
    /// `None` stands for an absent message. Unknown letter codes are decoded
    /// inline as the placeholder and never fail the message.
    ///
    /// # Errors
    /// - [`DecodeError::EmptyInput`]: absent, empty or whitespace-only message
    /// - [`DecodeError::NoCode`]: only the terminator was given
    /// - [`DecodeError::NothingDecoded`]: no character was produced
    #[instrument(level = "debug", skip(self, message))]
    pub fn try_decode<'a>(
        &self,
        message: impl Into<Option<&'a str>>,
    ) -> Result<String, DecodeError> {
        let words = tokenize(message.into())?;
        let decoded = words
            .iter()
            .map(|codes| self.decode_word(codes))
            .filter(|word| !word.is_empty())
            .join(" ");

        if decoded.is_empty() {
            return Err(DecodeError::NothingDecoded);
        }
        debug!("decoded {} words", words.len());
        Ok(decoded)
    }

    /// Decode a full message, returning the error sentinel instead of failing.
    ///
    /// ```
    /// use morsetree::Decoder;
    ///
    /// let decoder = Decoder::new();
    /// assert_eq!(decoder.decode(".... . .-.. . -.  --. ..-#"), "HELEN GU");
    /// assert_eq!(decoder.decode("#"), "[ERROR: No Morse code provided]");
    /// ```
    pub fn decode<'a>(&self, message: impl Into<Option<&'a str>>) -> String {
        self.try_decode(message).unwrap_or_else(|e| e.to_string())
    }

    /// Decode independent messages in parallel, keeping input order.
    pub fn try_decode_batch<S>(&self, messages: &[S]) -> Vec<Result<String, DecodeError>>
    where
        S: AsRef<str> + Sync,
    {
        debug!("try_decode_batch: {} messages", messages.len());
        messages
            .par_iter()
            .map(|message| self.try_decode(message.as_ref()))
            .collect()
    }

    /// Parallel variant of [`Decoder::decode`], keeping input order.
    pub fn decode_batch<S>(&self, messages: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        self.try_decode_batch(messages)
            .into_iter()
            .map(|result| result.unwrap_or_else(|e| e.to_string()))
            .collect()
    }
}

static SHARED_DECODER: OnceLock<Decoder> = OnceLock::new();

/// Process-wide decoder for the built-in alphabet, built on first use.
pub fn shared() -> &'static Decoder {
    SHARED_DECODER.get_or_init(Decoder::new)
}

/// Decode `message` with the shared built-in decoder.
///
/// Never fails: malformed input yields one of the `[ERROR: ...]` sentinels.
pub fn decode<'a>(message: impl Into<Option<&'a str>>) -> String {
    shared().decode(message)
}

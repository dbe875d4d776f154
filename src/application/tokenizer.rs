//! Splitting of a Morse message into words and letter codes.
//!
//! Message format:
//! - letters separated by a single space
//! - words separated by two spaces
//! - an optional trailing `#` terminating the message

use tracing::{instrument, trace};

use crate::application::DecodeError;

/// End-of-message marker; only a trailing occurrence is stripped.
pub const TERMINATOR: char = '#';

/// Separator between letter codes of one word.
pub const LETTER_SEPARATOR: char = ' ';

/// Separator between words.
pub const WORD_SEPARATOR: &str = "  ";

/// Letter codes of one word, borrowed from the message.
pub type Word<'a> = Vec<&'a str>;

/// Blank means empty or only space and control characters (`<= U+0020`).
/// Other Unicode whitespace such as U+00A0 is message content.
fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c <= ' ')
}

/// Split `message` into words of letter codes.
///
/// Empty and whitespace-only word tokens (from separator runs at the edges or
/// in the middle of the message) are dropped here, so every returned word has
/// at least one letter code. A missing terminator is tolerated.
#[instrument(level = "trace")]
pub fn tokenize(message: Option<&str>) -> Result<Vec<Word<'_>>, DecodeError> {
    let message = match message {
        Some(m) if !is_blank(m) => m,
        _ => return Err(DecodeError::EmptyInput),
    };

    let body = message.strip_suffix(TERMINATOR).unwrap_or(message);
    if is_blank(body) {
        return Err(DecodeError::NoCode);
    }

    let words: Vec<Word<'_>> = body
        .split(WORD_SEPARATOR)
        .filter(|word| !is_blank(word))
        .map(|word| {
            word.split(LETTER_SEPARATOR)
                .filter(|code| !code.is_empty())
                .collect()
        })
        .collect();
    trace!("tokenize: {} words", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_letters_and_words_when_tokenizing_then_splits_both_levels() {
        let words = tokenize(Some(".... . .-.. . -.  --. ..-#")).unwrap();
        assert_eq!(
            words,
            vec![vec!["....", ".", ".-..", ".", "-."], vec!["--.", "..-"]]
        );
    }

    #[test]
    fn given_three_space_run_when_tokenizing_then_skips_empty_letter_code() {
        // "a   b" splits into "a" and " b"; the leading empty code is skipped
        let words = tokenize(Some(".-   -...")).unwrap();
        assert_eq!(words, vec![vec![".-"], vec!["-..."]]);
    }

    #[test]
    fn given_four_space_run_when_tokenizing_then_drops_empty_word() {
        let words = tokenize(Some(".-    -...#")).unwrap();
        assert_eq!(words, vec![vec![".-"], vec!["-..."]]);
    }

    #[test]
    fn given_leading_and_trailing_separators_when_tokenizing_then_drops_empty_words() {
        let words = tokenize(Some("  ...  ---  ...    #")).unwrap();
        assert_eq!(words, vec![vec!["..."], vec!["---"], vec!["..."]]);
    }

    #[test]
    fn given_inner_terminator_when_tokenizing_then_keeps_it_in_code() {
        let words = tokenize(Some(".#. -##")).unwrap();
        assert_eq!(words, vec![vec![".#.", "-#"]]);
    }

    #[test]
    fn given_missing_terminator_when_tokenizing_then_tolerated() {
        assert_eq!(tokenize(Some("...")).unwrap(), vec![vec!["..."]]);
    }

    #[test]
    fn given_blank_inputs_when_tokenizing_then_reports_error_kind() {
        assert_eq!(tokenize(None), Err(DecodeError::EmptyInput));
        assert_eq!(tokenize(Some("")), Err(DecodeError::EmptyInput));
        assert_eq!(tokenize(Some(" \t\n")), Err(DecodeError::EmptyInput));
        assert_eq!(tokenize(Some("#")), Err(DecodeError::NoCode));
        assert_eq!(tokenize(Some("   #")), Err(DecodeError::NoCode));
    }

    #[test]
    fn given_control_chars_only_when_tokenizing_then_blank() {
        assert_eq!(tokenize(Some("\u{0001}")), Err(DecodeError::EmptyInput));
        assert_eq!(tokenize(Some("\u{0007}#")), Err(DecodeError::NoCode));
    }

    #[test]
    fn given_no_break_space_word_when_tokenizing_then_kept_as_code() {
        let words = tokenize(Some(".-  \u{00A0}  -...#")).unwrap();
        assert_eq!(words, vec![vec![".-"], vec!["\u{00A0}"], vec!["-..."]]);
    }
}

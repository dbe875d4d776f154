//! Morse symbols and the built-in Latin alphabet.

use std::fmt;

/// Character for a short mark.
pub const DOT: char = '.';

/// Character for a long mark.
pub const DASH: char = '-';

/// A single Morse mark. Dots descend left in the code tree, dashes right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Both symbols in tree order (dot child first).
    pub const ALL: [Symbol; 2] = [Symbol::Dot, Symbol::Dash];

    /// Parses a code character; anything other than `.` or `-` is not a symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            DOT => Some(Symbol::Dot),
            DASH => Some(Symbol::Dash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => DOT,
            Symbol::Dash => DASH,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// International Morse codes for A-Z, listed level by level (code length 1..=4).
///
/// Codes are unique, so every letter sits on its own tree node. Shorter codes
/// are prefixes of longer ones (`E` is `.`, `I` is `..`), so inner nodes carry
/// letters too; message separators keep decoding unambiguous.
pub const ALPHABET: [(char, &str); 26] = [
    // level 1
    ('E', "."),
    ('T', "-"),
    // level 2
    ('I', ".."),
    ('A', ".-"),
    ('N', "-."),
    ('M', "--"),
    // level 3
    ('S', "..."),
    ('U', "..-"),
    ('R', ".-."),
    ('W', ".--"),
    ('D', "-.."),
    ('K', "-.-"),
    ('G', "--."),
    ('O', "---"),
    // level 4
    ('H', "...."),
    ('V', "...-"),
    ('F', "..-."),
    ('L', ".-.."),
    ('P', ".--."),
    ('J', ".---"),
    ('B', "-..."),
    ('X', "-..-"),
    ('C', "-.-."),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('Q', "--.-"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn given_symbol_chars_when_parsing_then_maps_dot_and_dash_only() {
        assert_eq!(Symbol::from_char('.'), Some(Symbol::Dot));
        assert_eq!(Symbol::from_char('-'), Some(Symbol::Dash));
        assert_eq!(Symbol::from_char('_'), None);
        assert_eq!(Symbol::from_char(' '), None);
        assert_eq!(Symbol::Dash.to_string(), "-");
    }

    #[test]
    fn given_alphabet_then_letters_and_codes_are_unique() {
        let codes: HashSet<&str> = ALPHABET.iter().map(|(_, code)| *code).collect();
        assert_eq!(codes.len(), ALPHABET.len());

        let letters: HashSet<char> = ALPHABET.iter().map(|(letter, _)| *letter).collect();
        assert_eq!(letters.len(), 26);
        assert!(letters.iter().all(|c| c.is_ascii_uppercase()));

        for (_, code) in ALPHABET {
            assert!(code.chars().all(|c| Symbol::from_char(c).is_some()));
        }
    }
}

//! Tests for message decoding

use rstest::rstest;

use morsetree::application::{tokenize, DecodeError};
use morsetree::domain::ALPHABET;
use morsetree::util::testing;
use morsetree::{decode, Decoder};

const EMPTY_INPUT: &str = "[ERROR: Empty input]";
const NO_CODE: &str = "[ERROR: No Morse code provided]";
const NOTHING_DECODED: &str = "[ERROR: Could not decode any letters]";

// ============================================================
// Single letters
// ============================================================

#[rstest]
#[case('A', ".-")]
#[case('B', "-...")]
#[case('C', "-.-.")]
#[case('D', "-..")]
#[case('E', ".")]
#[case('F', "..-.")]
#[case('G', "--.")]
#[case('H', "....")]
#[case('I', "..")]
#[case('J', ".---")]
#[case('K', "-.-")]
#[case('L', ".-..")]
#[case('M', "--")]
#[case('N', "-.")]
#[case('O', "---")]
#[case('P', ".--.")]
#[case('Q', "--.-")]
#[case('R', ".-.")]
#[case('S', "...")]
#[case('T', "-")]
#[case('U', "..-")]
#[case('V', "...-")]
#[case('W', ".--")]
#[case('X', "-..-")]
#[case('Y', "-.--")]
#[case('Z', "--..")]
fn given_letter_code_with_terminator_when_decoding_then_returns_letter(
    #[case] letter: char,
    #[case] code: &str,
) {
    testing::init_test_setup();
    let decoder = Decoder::new();

    let result = decoder.decode(format!("{code}#").as_str());

    assert_eq!(result, letter.to_string());
}

#[test]
fn given_full_alphabet_as_one_word_when_decoding_then_returns_all_letters() {
    let message = ALPHABET.iter().map(|(_, code)| *code).collect::<Vec<_>>().join(" ");
    let expected: String = ALPHABET.iter().map(|(letter, _)| *letter).collect();

    assert_eq!(decode(format!("{message}#").as_str()), expected);
}

// ============================================================
// Words
// ============================================================

#[test]
fn given_two_words_when_decoding_then_joins_with_single_space() {
    assert_eq!(decode(".... . .-.. . -.  --. ..-#"), "HELEN GU");
}

#[rstest]
#[case::no_terminator(".... ..  - .... . .-. .", "HI THERE")]
#[case::extra_separators_before_terminator("...  ---  ...    #", "S O S")]
#[case::trailing_word_separator("...  ---  ...  #", "S O S")]
#[case::leading_word_separator("  .- -...#", "AB")]
#[case::three_space_run(".-   -...#", "A B")]
#[case::four_space_run(".-    -...#", "A B")]
#[case::single_trailing_space(".- #", "A")]
#[case::only_last_terminator_stripped(".-##", "?")]
fn given_irregular_spacing_when_decoding_then_no_stray_spaces(
    #[case] message: &str,
    #[case] expected: &str,
) {
    let result = decode(message);

    assert_eq!(result, expected);
    assert!(!result.ends_with(' '));
    assert!(!result.starts_with(' '));
    assert!(!result.contains("  "));
}

// ============================================================
// Unknown codes
// ============================================================

#[rstest]
#[case::six_dots("......#", "?")]
#[case::unknown_inside_word(".- ...... -...#", "A?B")]
#[case::invalid_symbol(".x- .-#", "?A")]
#[case::letters_instead_of_code("SOS#", "?")]
#[case::inner_terminator(".#. .-#", "?A")]
#[case::tab_inside_word(".-\t- .#", "?E")]
fn given_unknown_code_when_decoding_then_substitutes_placeholder(
    #[case] message: &str,
    #[case] expected: &str,
) {
    let decoder = Decoder::new();

    assert_eq!(decoder.try_decode(message), Ok(expected.to_string()));
}

// ============================================================
// Whole-message errors
// ============================================================

#[rstest]
#[case::empty("")]
#[case::spaces("   ")]
#[case::mixed_whitespace(" \t\r\n ")]
fn given_blank_input_when_decoding_then_empty_input_error(#[case] message: &str) {
    assert_eq!(decode(message), EMPTY_INPUT);
    assert_eq!(
        Decoder::new().try_decode(message),
        Err(DecodeError::EmptyInput)
    );
}

#[rstest]
#[case::control_char_only("\u{0001}", EMPTY_INPUT)]
#[case::control_chars_then_terminator("\u{0007}\u{001b}#", NO_CODE)]
#[case::no_break_space_only("\u{00A0}", "?")]
#[case::no_break_space_word(".-  \u{00A0}  -...#", "A ? B")]
fn given_non_ascii_blank_candidates_when_decoding_then_only_control_chars_are_blank(
    #[case] message: &str,
    #[case] expected: &str,
) {
    assert_eq!(decode(message), expected);
}

#[test]
fn given_absent_input_when_decoding_then_empty_input_error() {
    assert_eq!(decode(None), EMPTY_INPUT);
}

#[rstest]
#[case::terminator_only("#")]
#[case::spaces_then_terminator("   #")]
#[case::separator_then_terminator("  #")]
fn given_terminator_without_code_when_decoding_then_no_code_error(#[case] message: &str) {
    assert_eq!(decode(message), NO_CODE);
}

#[test]
fn given_error_variants_then_display_matches_sentinels() {
    assert_eq!(DecodeError::EmptyInput.to_string(), EMPTY_INPUT);
    assert_eq!(DecodeError::NoCode.to_string(), NO_CODE);
    assert_eq!(DecodeError::NothingDecoded.to_string(), NOTHING_DECODED);
}

#[test]
fn given_malformed_input_when_tokenizing_then_no_partial_output() {
    assert_eq!(tokenize(Some("#")), Err(DecodeError::NoCode));
    assert_eq!(tokenize(Some("")), Err(DecodeError::EmptyInput));
}

// ============================================================
// Purity and concurrency
// ============================================================

#[test]
fn given_same_input_when_decoding_repeatedly_then_identical_results() {
    let decoder = Decoder::new();
    let message = ".-- .... .- -  .... .- - ....  --. --- -..  .-- .-. --- ..- --. .... -#";

    let first = decoder.decode(message);
    for _ in 0..10 {
        assert_eq!(decoder.decode(message), first);
    }
    assert_eq!(first, "WHAT HATH GOD WROUGHT");
}

#[test]
fn given_many_messages_when_decoding_batch_then_matches_sequential_in_order() {
    // Arrange
    let decoder = Decoder::new();
    let messages: Vec<String> = (0..200)
        .map(|i| match i % 4 {
            0 => "...  ---  ...#".to_string(),
            1 => "#".to_string(),
            2 => String::new(),
            _ => ALPHABET[i % 26].1.to_string(),
        })
        .collect();

    // Act
    let batch = decoder.decode_batch(messages.as_slice());

    // Assert
    let sequential: Vec<String> = messages.iter().map(|m| decoder.decode(m.as_str())).collect();
    assert_eq!(batch, sequential);
    assert_eq!(batch[0], "S O S");
    assert_eq!(batch[1], NO_CODE);
    assert_eq!(batch[2], EMPTY_INPUT);
}

#[test]
fn given_typed_batch_when_decoding_then_errors_stay_typed() {
    let decoder = Decoder::new();

    let results = decoder.try_decode_batch(&["-", "#", " "]);

    assert_eq!(
        results,
        vec![
            Ok("T".to_string()),
            Err(DecodeError::NoCode),
            Err(DecodeError::EmptyInput),
        ]
    );
}

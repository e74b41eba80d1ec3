//! Input rejection: empty sequences, out-of-range values, non-digit text.

use verhoeff::{
    generate, generate_str, parse_digits, validate, validate_str, Digits, Error, InvalidInput,
    ParseError,
};

#[test]
fn empty_sequences_are_invalid_input() {
    assert_eq!(validate(&[]), Err(InvalidInput::Empty));
    assert_eq!(generate(&[]), Err(InvalidInput::Empty));
}

#[test]
fn out_of_range_values_never_reach_the_tables() {
    for bad in [10u8, 11, 48, 255] {
        assert_eq!(
            validate(&[1, bad]),
            Err(InvalidInput::OutOfRange {
                position: 1,
                value: bad
            })
        );
        assert_eq!(
            generate(&[bad, 1]),
            Err(InvalidInput::OutOfRange {
                position: 0,
                value: bad
            })
        );
    }
}

#[test]
fn first_bad_value_is_reported() {
    assert_eq!(
        Digits::new(vec![1, 20, 30]),
        Err(InvalidInput::OutOfRange {
            position: 1,
            value: 20
        })
    );
}

#[test]
fn non_digit_characters_are_parse_errors() {
    for (input, position, found) in [
        ("-123", 0, '-'),
        ("12.3", 2, '.'),
        ("1,234", 1, ','),
        ("1234 5678 9012", 4, ' '),
        ("12a4", 2, 'a'),
        ("١٢٣", 0, '١'),
    ] {
        assert_eq!(
            parse_digits(input),
            Err(ParseError::NonDigit { position, found }),
            "input {:?}",
            input
        );
    }
}

#[test]
fn blank_strings_are_parse_errors() {
    assert_eq!(validate_str(""), Err(Error::Parse(ParseError::Empty)));
    assert_eq!(generate_str(" \t\n"), Err(Error::Parse(ParseError::Empty)));
}

#[test]
fn errors_format_for_humans() {
    let err = validate_str("12x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error: unexpected character 'x' at position 2"
    );
}

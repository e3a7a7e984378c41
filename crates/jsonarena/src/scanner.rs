//! Lexical scanners.
//!
//! The scanners carve spans out of the raw input without decoding anything;
//! escape validation and value conversion are deferred to [`crate::decode`].
//! Positions are byte offsets into the source slice, and running off the end
//! of the slice is the "no more input" condition.

use crate::{ParseError, options::Mode};

/// Is `c` one of the four JSON whitespace characters?
#[inline]
fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

/// Is `c` a character that validly terminates a number?
#[inline]
fn is_number_end(c: u8) -> bool {
    is_whitespace(c) || matches!(c, b',' | b'}' | b']')
}

/// Advances past whitespace. Returns the position of the next
/// non-whitespace byte, or `None` when the input is exhausted.
pub(crate) fn skip_whitespace(src: &[u8], mut pos: usize) -> Option<usize> {
    while let Some(&c) = src.get(pos) {
        if !is_whitespace(c) {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Scans a string starting at the opening quote at `pos`.
///
/// Returns the position of the closing quote. A backslash unconditionally
/// skips two bytes; the escaped character is not validated here.
pub(crate) fn scan_string(src: &[u8], pos: usize) -> Result<usize, ParseError> {
    debug_assert_eq!(src.get(pos), Some(&b'"'));
    let mut i = pos + 1;
    while let Some(&c) = src.get(i) {
        match c {
            b'\\' => i += 2,
            b'"' => return Ok(i),
            _ => i += 1,
        }
    }
    Err(ParseError::MalformedString)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Whole,
    Fraction,
    ExponentSign,
    ExponentFirstDigit,
    ExponentDigits,
}

/// Scans a number starting at `pos` and returns the one-past-end position.
///
/// Implements the JSON number grammar as a four-state sub-machine: an
/// optional leading `-`, a `0` that may only be followed by `.`, `e`/`E`, or
/// a terminator, otherwise one-or-more digits, an optional fraction, and an
/// optional signed exponent. Running off the end of the input mid-number is
/// an error; the caller never hands the scanner a number in terminal
/// position of a valid document.
pub(crate) fn scan_number(src: &[u8], mut pos: usize) -> Result<usize, ParseError> {
    use NumberState::{ExponentDigits, ExponentFirstDigit, ExponentSign, Fraction, Whole};

    if src.get(pos) == Some(&b'-') {
        pos += 1;
    }

    let mut state = match src.get(pos) {
        Some(b'0') => match src.get(pos + 1) {
            Some(b'e' | b'E') => {
                pos += 2;
                ExponentSign
            }
            Some(b'.') => {
                pos += 2;
                Fraction
            }
            Some(&c) if is_number_end(c) => return Ok(pos + 1),
            _ => return Err(ParseError::NumberInvalidChar),
        },
        Some(c) if c.is_ascii_digit() => {
            pos += 1;
            Whole
        }
        _ => return Err(ParseError::NumberInvalidChar),
    };

    while let Some(&c) = src.get(pos) {
        if matches!(state, Whole | Fraction | ExponentDigits) && is_number_end(c) {
            return Ok(pos);
        }
        match state {
            Whole => {
                match c {
                    _ if c.is_ascii_digit() => {}
                    b'.' => state = Fraction,
                    b'e' | b'E' => state = ExponentSign,
                    _ => return Err(ParseError::NumberInvalidChar),
                }
                pos += 1;
            }
            Fraction => {
                match c {
                    _ if c.is_ascii_digit() => {}
                    b'e' | b'E' => state = ExponentSign,
                    _ => return Err(ParseError::NumberInvalidChar),
                }
                pos += 1;
            }
            ExponentSign => match c {
                b'+' | b'-' => {
                    state = ExponentFirstDigit;
                    pos += 1;
                }
                _ if c.is_ascii_digit() => {
                    state = ExponentDigits;
                    pos += 1;
                }
                _ => return Err(ParseError::NumberInvalidChar),
            },
            ExponentFirstDigit => {
                if !c.is_ascii_digit() {
                    return Err(ParseError::NumberInvalidChar);
                }
                state = ExponentDigits;
                pos += 1;
            }
            ExponentDigits => {
                if !c.is_ascii_digit() {
                    return Err(ParseError::NumberInvalidChar);
                }
                pos += 1;
            }
        }
    }

    Err(ParseError::NumberInvalidChar)
}

/// One of the three keyword literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    True,
    False,
    Null,
}

/// Matches `true`, `false`, or `null` at `pos`, returning the one-past-end
/// position and the literal kind. Lenient mode matches case-insensitively.
pub(crate) fn match_literal(src: &[u8], pos: usize, mode: Mode) -> Option<(usize, Literal)> {
    const KEYWORDS: [(&[u8], Literal); 3] = [
        (b"true", Literal::True),
        (b"false", Literal::False),
        (b"null", Literal::Null),
    ];
    for (text, literal) in KEYWORDS {
        let end = pos + text.len();
        let Some(window) = src.get(pos..end) else {
            continue;
        };
        let matched = match mode {
            Mode::Strict => window == text,
            Mode::Lenient => window.eq_ignore_ascii_case(text),
        };
        if matched {
            return Some((end, literal));
        }
    }
    None
}

//! Zero-copy value decoders.
//!
//! Decoding is purely a function of the source buffer and a span; the tree
//! is never consulted or modified. String decoding is a narrowing copy-out:
//! escapes are substituted, multi-byte UTF-8 sequences collapse to a single
//! placeholder when substitution is enabled, and filtered control characters
//! vanish. Number decoding classifies the raw numeral and converts it to one
//! primitive.

use alloc::string::String;
use alloc::vec;

use crate::{
    DecodeError,
    arena::NodeArena,
    document::Document,
    node::{Node, NodeId},
    options::DecodeOptions,
    query::JsonStr,
};

impl JsonStr<'_> {
    /// Decodes the raw span into `dest`, returning the number of bytes
    /// written.
    ///
    /// `dest` must be pre-sized with [`len`](JsonStr::len), which is an
    /// upper bound on the decoded length, not the exact size; the returned
    /// count is the actual size.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is smaller than [`len`](JsonStr::len) bytes and the
    /// decoded output does not fit.
    pub fn decode_into(&self, dest: &mut [u8], options: &DecodeOptions) -> usize {
        let bytes = self.raw().as_bytes();
        let mut i = 0;
        let mut written = 0;

        while i < bytes.len() {
            let b = bytes[i];
            if b == b'\\' {
                dest[written] = match bytes.get(i + 1) {
                    Some(b'n') => b'\n',
                    Some(b'"') => b'"',
                    Some(b'\\') => b'\\',
                    Some(b'b') => options.backspace,
                    Some(b'f') => options.formfeed,
                    Some(b'r') => options.carriage_return,
                    Some(b't') => options.tab,
                    // unrecognized escape: one-character fallback
                    _ => options.placeholder,
                };
                written += 1;
                i += 2;
            } else if b >= 0x80 {
                if options.substitute_utf8 {
                    // Collapse the whole sequence, well-formed or not, to
                    // one placeholder.
                    let (_, len) = bstr::decode_utf8(&bytes[i..]);
                    dest[written] = options.placeholder;
                    written += 1;
                    i += len.max(1);
                } else {
                    dest[written] = b;
                    written += 1;
                    i += 1;
                }
            } else if options.filter_nonprintable && (b < 0x20 || b == 0x7F) {
                // dropped outright
                i += 1;
            } else {
                dest[written] = b;
                written += 1;
                i += 1;
            }
        }

        written
    }

    /// Convenience wrapper around [`decode_into`](JsonStr::decode_into)
    /// returning an owned string.
    ///
    /// Non-ASCII substitute bytes in `options` come back as U+FFFD here,
    /// since a lone byte above `0x7F` is not valid UTF-8; use
    /// [`decode_into`](JsonStr::decode_into) when the raw bytes matter.
    #[must_use]
    pub fn decode(&self, options: &DecodeOptions) -> String {
        let mut buf = vec![0u8; self.len()];
        let written = self.decode_into(&mut buf, options);
        buf.truncate(written);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// A decoded JSON number.
///
/// Classification is mutually exclusive and decided by a single
/// left-to-right scan: a `.`, `e`, or `E` anywhere makes the number real, a
/// leading `-` makes it signed, anything else is unsigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    /// No sign, no fraction, no exponent.
    Unsigned(u64),
    /// Leading `-`, still no fraction or exponent.
    Signed(i64),
    /// Contains `.`, `e`, or `E`.
    Real(f64),
}

impl JsonNumber {
    /// Decodes a raw numeral.
    ///
    /// No overflow detection is performed: unsigned accumulation wraps and
    /// out-of-range signed values clamp to the nearest representable bound.
    ///
    /// # Errors
    ///
    /// [`DecodeError::NumberTooLong`] when `text` is at or beyond the
    /// configured maximum literal length, [`DecodeError::MalformedNumber`]
    /// when the text does not convert.
    pub fn decode(text: &str, options: &DecodeOptions) -> Result<Self, DecodeError> {
        if text.len() >= options.max_number_len {
            return Err(DecodeError::NumberTooLong);
        }
        let bytes = text.as_bytes();
        if bytes.is_empty() {
            return Err(DecodeError::MalformedNumber);
        }

        let mut negative = false;
        let mut real = false;
        for &b in bytes {
            match b {
                b'.' | b'e' | b'E' => {
                    real = true;
                    break;
                }
                b'-' => negative = true,
                _ => {}
            }
        }

        if real {
            return text
                .parse::<f64>()
                .map(JsonNumber::Real)
                .map_err(|_| DecodeError::MalformedNumber);
        }
        if negative {
            if bytes.len() < 2 || !bytes[1..].iter().all(u8::is_ascii_digit) {
                return Err(DecodeError::MalformedNumber);
            }
            return match text.parse::<i64>() {
                Ok(v) => Ok(JsonNumber::Signed(v)),
                // out of range clamps
                Err(_) => Ok(JsonNumber::Signed(i64::MIN)),
            };
        }

        let mut acc: u64 = 0;
        for &b in bytes {
            if !b.is_ascii_digit() {
                return Err(DecodeError::MalformedNumber);
            }
            acc = acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'));
        }
        Ok(JsonNumber::Unsigned(acc))
    }
}

impl<A: NodeArena> Document<A> {
    /// Decodes the numeral behind a number node.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedNumber`] when `node` is not a number node,
    /// otherwise whatever [`JsonNumber::decode`] reports.
    pub fn number_value(
        &self,
        source: &str,
        node: NodeId,
        options: &DecodeOptions,
    ) -> Result<JsonNumber, DecodeError> {
        let Node::Number(span) = *self.node(node) else {
            return Err(DecodeError::MalformedNumber);
        };
        JsonNumber::decode(span.slice(source), options)
    }
}

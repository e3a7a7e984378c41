//! Configuration options for parsing and decoding.

/// Grammar tolerance policy.
///
/// A single switch governs both relaxations: trailing commas before a
/// closing `]`/`}`, and case-insensitive `true`/`false`/`null` literals.
/// It is chosen when the parser is constructed, not per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Reject trailing commas and non-lowercase literals.
    #[default]
    Strict,
    /// Accept trailing commas and match literals case-insensitively.
    Lenient,
}

/// Configuration for [`crate::Parser`].
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Strict or lenient grammar tolerance.
    ///
    /// # Default
    ///
    /// [`Mode::Strict`]
    pub mode: Mode,

    /// Maximum container nesting depth.
    ///
    /// Bounds the parser's explicit state and construction stacks so that
    /// adversarially deep input cannot exhaust memory or the call stack.
    /// A document nested exactly this deep parses; one level deeper fails
    /// with [`crate::ParseError::StackError`].
    ///
    /// # Default
    ///
    /// `64`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Strict,
            max_depth: 64,
        }
    }
}

/// Configuration for the value decoders.
///
/// Defaults: UTF-8 substitution with `~`, whitespace substitutes for
/// `\b`/`\f`/`\t`, newline for `\r`, non-printable filtering on, and a
/// 128-byte number literal bound.
///
/// The substitute bytes (`placeholder`, `backspace`, `formfeed`,
/// `carriage_return`, `tab`) are written into the output verbatim, one byte
/// each. Keep them ASCII: a non-ASCII byte is not valid UTF-8 on its own,
/// so `JsonStr::decode` replaces it with U+FFFD when building the returned
/// `String`. `JsonStr::decode_into` hands back the raw bytes either way.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Whether multi-byte UTF-8 sequences collapse to [`Self::placeholder`].
    ///
    /// This is a deliberate narrowing transcode: the original bytes are
    /// discarded, not passed through. When disabled, multi-byte sequences
    /// are copied verbatim.
    pub substitute_utf8: bool,

    /// Substitute written for each multi-byte UTF-8 sequence, malformed lead
    /// byte, or unrecognized escape sequence.
    pub placeholder: u8,

    /// Substitute for `\b`.
    pub backspace: u8,

    /// Substitute for `\f`.
    pub formfeed: u8,

    /// Substitute for `\r`.
    pub carriage_return: u8,

    /// Substitute for `\t`.
    pub tab: u8,

    /// Whether ASCII control characters outside the printable range are
    /// dropped entirely (zero bytes written) instead of copied.
    pub filter_nonprintable: bool,

    /// Maximum accepted number literal length in bytes. Spans at or beyond
    /// this bound fail to decode outright.
    pub max_number_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            substitute_utf8: true,
            placeholder: b'~',
            backspace: b' ',
            formfeed: b' ',
            carriage_return: b'\n',
            tab: b' ',
            filter_nonprintable: true,
            max_number_len: 128,
        }
    }
}

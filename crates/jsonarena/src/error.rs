//! Error taxonomy.

use thiserror::Error;

use crate::arena::AllocError;

/// Everything that can go wrong while parsing a document.
///
/// Each variant carries a fixed human-readable description; callers are
/// expected to surface the variant or its `Display` text, never parser
/// internals. On any error the document's tree may be partially built and
/// must not be read, but routing it through teardown is safe and reclaims
/// the nodes allocated so far.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The source contained no non-whitespace characters.
    #[error("empty source")]
    EmptySource,
    /// Bad top-level start, or input ran out with open containers.
    #[error("malformed source")]
    MalformedSource,
    /// Object grammar violation.
    #[error("malformed object")]
    MalformedObject,
    /// Array grammar violation.
    #[error("malformed array")]
    MalformedArray,
    /// A string ran past the end of the input without a closing quote.
    #[error("malformed string")]
    MalformedString,
    /// Number grammar violation.
    #[error("invalid char in number")]
    NumberInvalidChar,
    /// Trailing comma before `]` in strict mode.
    #[error("invalid array ending")]
    InvalidArrayEnding,
    /// Trailing comma before `}` in strict mode.
    #[error("invalid object ending")]
    InvalidObjectEnding,
    /// Nesting exceeded the configured maximum depth.
    #[error("stack error")]
    StackError,
    /// The arena refused to hand out a node.
    #[error("allocation failure")]
    AllocationFailure(#[from] AllocError),
    /// The state machine reached a branch that should be unreachable. This
    /// indicates a defect in the parser, not a problem with the data.
    #[error("unknown internal error")]
    UnknownInternalError,
}

/// Errors from the value decoders.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A number span is at or beyond the configured maximum literal length.
    #[error("number literal too long")]
    NumberTooLong,
    /// The text is not a decodable number, or the node is not a number.
    #[error("malformed number")]
    MalformedNumber,
    /// The text deviates from the fixed-width ISO-8601 subset.
    #[error("malformed date-time")]
    MalformedDateTime,
    /// A date-time destination buffer was neither 20 nor 24 bytes long.
    #[error("invalid date-time buffer length")]
    DateTimeBufferSize,
}

//! A non-recursive, zero-copy JSON tree parser with pluggable node arenas.
//!
//! `jsonarena` parses an in-memory JSON text into an explicit tree of nodes
//! that reference spans of the original source instead of copying it. The
//! driver is an explicit-stack state machine — no recursion anywhere, so
//! adversarially nested input is bounded by a configured depth instead of
//! the call stack — and node storage is delegated to an injectable
//! [`NodeArena`], with a per-node [`HeapArena`] and a bulk-freed
//! [`BumpArena`] provided. String, number, and date-time values are decoded
//! on demand from their borrowed spans.
//!
//! # Examples
//!
//! ```rust
//! use jsonarena::{DecodeOptions, Document, HeapArena, Parser, ParserOptions};
//!
//! let source = r#"{"created_at": "2022-01-02T03:04:05.006Z"}"#;
//! let mut doc = Document::new(HeapArena::new());
//! Parser::new(ParserOptions::default())
//!     .parse(&mut doc, source)
//!     .unwrap();
//!
//! let root = doc.root().unwrap();
//! let pair = doc.field_by_name(source, root, "created_at").unwrap();
//! let value = doc.pair_value(pair).unwrap();
//! let text = doc.string_view(source, value).unwrap();
//! assert_eq!(text.decode(&DecodeOptions::default()), "2022-01-02T03:04:05.006Z");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod arena;
mod datetime;
mod decode;
mod document;
mod error;
mod node;
mod options;
mod parser;
mod query;
mod scanner;

#[cfg(test)]
mod tests;

pub use arena::{AllocError, BumpArena, BumpStats, HeapArena, NodeArena};
pub use datetime::{DATETIME_LEN_FULL, DATETIME_LEN_TRUNCATED, JsonDateTime};
pub use decode::JsonNumber;
pub use document::Document;
pub use error::{DecodeError, ParseError};
pub use node::{Node, NodeId, NodeKind, Span};
pub use options::{DecodeOptions, Mode, ParserOptions};
pub use parser::Parser;
pub use query::{ArrayIter, JsonStr, ObjectIter};

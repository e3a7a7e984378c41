//! The explicit-stack parse driver.
//!
//! Parsing is iterative: a stack of [`ParseState`]s tracks where in the
//! grammar the driver is, and a parallel stack of node handles tracks the
//! construction path (the container or pair currently being populated).
//! Recursion is never used, so the configured maximum depth bounds all
//! state-tracking memory regardless of how deeply the input nests.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::{
    ParseError,
    arena::NodeArena,
    document::Document,
    node::{Node, NodeId, Span},
    options::{Mode, ParserOptions},
    scanner::{self, Literal},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Expect an element or `]`.
    Array,
    /// Expect `,` or `]`.
    ArraySep,
    /// Expect a quoted key or `}`.
    ObjectKey,
    /// Expect a value.
    ObjectValue,
    /// Expect `,` or `}`.
    ObjectPairSep,
}

/// The tree-building JSON parser.
///
/// One parser can populate any number of documents; grammar tolerance and
/// the depth ceiling are fixed at construction time.
///
/// # Examples
///
/// ```rust
/// use jsonarena::{Document, HeapArena, Parser, ParserOptions};
///
/// let parser = Parser::new(ParserOptions::default());
/// let mut doc = Document::new(HeapArena::new());
/// parser.parse(&mut doc, r#"["hello", 42, true, null]"#).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was constructed with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `source` into `doc`, replacing any tree already there.
    ///
    /// The top-level value must be an array or an object. On error the
    /// document may hold a partially built tree: it must not be read, but
    /// tearing it down (explicitly or on drop) reclaims every node
    /// allocated so far.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`] variant except `UnknownInternalError` can be
    /// produced by malformed input; see the taxonomy for which.
    pub fn parse<A: NodeArena>(&self, doc: &mut Document<A>, source: &str) -> Result<(), ParseError> {
        doc.clear();
        debug!("parsing document, {} bytes", source.len());

        let src = source.as_bytes();
        let lenient = self.options.mode == Mode::Lenient;

        let Some(mut pos) = scanner::skip_whitespace(src, 0) else {
            return Err(ParseError::EmptySource);
        };

        let mut states: Vec<ParseState> = Vec::new();
        // Construction path: containers plus the pair currently awaiting a
        // value. Stands in for parent links, which nodes do not store.
        let mut tops: Vec<NodeId> = Vec::new();
        // Container nesting depth; `tops` also holds pairs, so it is not a
        // direct measure.
        let mut depth = 1usize;

        let root_state = match src[pos] {
            b'[' => ParseState::Array,
            b'{' => ParseState::ObjectKey,
            _ => return Err(ParseError::MalformedSource),
        };
        let root = doc.arena.allocate()?;
        *doc.arena.node_mut(root) = match root_state {
            ParseState::Array => Node::Array { first: None, last: None },
            _ => Node::Object { first: None, last: None },
        };
        // Root is linked up front so a failed parse still tears down fully.
        doc.root = Some(root);
        tops.push(root);
        states.push(root_state);
        pos += 1;

        while let Some(&state) = states.last() {
            let Some(next) = scanner::skip_whitespace(src, pos) else {
                // Input exhausted with open containers.
                return Err(ParseError::MalformedSource);
            };
            pos = next;
            let c = src[pos];
            let top = *tops.last().ok_or(ParseError::UnknownInternalError)?;

            match state {
                ParseState::Array => match c {
                    b'[' | b'{' => {
                        let nested = alloc_container(doc, c)?;
                        let element = doc.arena.allocate()?;
                        *doc.arena.node_mut(element) = Node::Element {
                            item: Some(nested),
                            next: None,
                        };
                        array_push(doc, top, element)?;
                        depth += 1;
                        if depth > self.options.max_depth {
                            return Err(ParseError::StackError);
                        }
                        trace!("descend into nested container, depth {depth}");
                        tops.push(nested);
                        states.push(ParseState::ArraySep);
                        states.push(nested_state(c));
                        pos += 1;
                    }
                    b']' => {
                        // only reachable while the array is still empty
                        tops.pop();
                        states.pop();
                        depth -= 1;
                        pos += 1;
                    }
                    _ => {
                        let (node, next) = self
                            .scan_scalar(src, pos)?
                            .ok_or(ParseError::MalformedArray)?;
                        let value = doc.arena.allocate()?;
                        *doc.arena.node_mut(value) = node;
                        let element = doc.arena.allocate()?;
                        *doc.arena.node_mut(element) = Node::Element {
                            item: Some(value),
                            next: None,
                        };
                        array_push(doc, top, element)?;
                        states.push(ParseState::ArraySep);
                        pos = next;
                    }
                },

                ParseState::ArraySep => match c {
                    b']' => {
                        tops.pop();
                        // discard both ArraySep and the Array that pushed it
                        states.pop();
                        states.pop();
                        depth -= 1;
                        pos += 1;
                    }
                    b',' => {
                        let next = scanner::skip_whitespace(src, pos + 1)
                            .ok_or(ParseError::MalformedSource)?;
                        if src[next] == b']' {
                            if !lenient {
                                return Err(ParseError::InvalidArrayEnding);
                            }
                            // trailing comma closes the array
                            tops.pop();
                            states.pop();
                            states.pop();
                            depth -= 1;
                            pos = next + 1;
                        } else {
                            // another element follows
                            states.pop();
                            pos = next;
                        }
                    }
                    _ => return Err(ParseError::MalformedArray),
                },

                ParseState::ObjectKey => match c {
                    b'"' => {
                        let key_end = scanner::scan_string(src, pos)
                            .map_err(|_| ParseError::MalformedObject)?;
                        let pair = doc.arena.allocate()?;
                        *doc.arena.node_mut(pair) = Node::Pair {
                            key: Span::new(to_offset(pos + 1)?, to_offset(key_end)?),
                            value: None,
                            next: None,
                        };
                        object_push(doc, top, pair)?;

                        pos = key_end + 1;
                        let colon = scanner::skip_whitespace(src, pos)
                            .ok_or(ParseError::MalformedObject)?;
                        if src[colon] != b':' {
                            return Err(ParseError::MalformedObject);
                        }
                        pos = colon + 1;
                        set_last(&mut states, ParseState::ObjectValue)?;
                        tops.push(pair);
                    }
                    b'}' if lenient => {
                        // only reachable while the object is still empty
                        tops.pop();
                        states.pop();
                        depth -= 1;
                        pos += 1;
                    }
                    _ => return Err(ParseError::MalformedObject),
                },

                ParseState::ObjectValue => match c {
                    b'[' | b'{' => {
                        let nested = alloc_container(doc, c)?;
                        set_pair_value(doc, top, nested)?;
                        depth += 1;
                        if depth > self.options.max_depth {
                            return Err(ParseError::StackError);
                        }
                        trace!("descend into nested container, depth {depth}");
                        tops.push(nested);
                        set_last(&mut states, ParseState::ObjectPairSep)?;
                        states.push(nested_state(c));
                        pos += 1;
                    }
                    _ => {
                        let (node, next) = self
                            .scan_scalar(src, pos)?
                            .ok_or(ParseError::MalformedObject)?;
                        let value = doc.arena.allocate()?;
                        *doc.arena.node_mut(value) = node;
                        set_pair_value(doc, top, value)?;
                        set_last(&mut states, ParseState::ObjectPairSep)?;
                        pos = next;
                    }
                },

                ParseState::ObjectPairSep => match c {
                    b'}' => {
                        // ascend past both the pair and its object
                        tops.pop();
                        tops.pop();
                        states.pop();
                        depth -= 1;
                        pos += 1;
                    }
                    b',' => {
                        let next = scanner::skip_whitespace(src, pos + 1)
                            .ok_or(ParseError::MalformedSource)?;
                        if src[next] == b'}' {
                            if !lenient {
                                return Err(ParseError::InvalidObjectEnding);
                            }
                            tops.pop();
                            tops.pop();
                            states.pop();
                            depth -= 1;
                            pos = next + 1;
                        } else {
                            // ascend past the pair, stay inside the object
                            tops.pop();
                            set_last(&mut states, ParseState::ObjectKey)?;
                            pos = next;
                        }
                    }
                    _ => return Err(ParseError::MalformedObject),
                },
            }
        }

        // Anything after the root value closes is ignored.
        Ok(())
    }

    /// Tries to scan a scalar value (string, number, or keyword literal) at
    /// `pos`. `Ok(None)` means the byte does not start a scalar; the caller
    /// picks the grammar error for its state.
    fn scan_scalar(&self, src: &[u8], pos: usize) -> Result<Option<(Node, usize)>, ParseError> {
        let c = src[pos];
        if c == b'"' {
            let end = scanner::scan_string(src, pos)?;
            let span = Span::new(to_offset(pos + 1)?, to_offset(end)?);
            return Ok(Some((Node::String(span), end + 1)));
        }
        if c == b'-' || c.is_ascii_digit() {
            let end = scanner::scan_number(src, pos)?;
            let span = Span::new(to_offset(pos)?, to_offset(end)?);
            return Ok(Some((Node::Number(span), end)));
        }
        if let Some((end, literal)) = scanner::match_literal(src, pos, self.options.mode) {
            let node = match literal {
                Literal::True => Node::True,
                Literal::False => Node::False,
                Literal::Null => Node::Null,
            };
            return Ok(Some((node, end)));
        }
        Ok(None)
    }
}

fn nested_state(open: u8) -> ParseState {
    if open == b'[' {
        ParseState::Array
    } else {
        ParseState::ObjectKey
    }
}

fn alloc_container<A: NodeArena>(doc: &mut Document<A>, open: u8) -> Result<NodeId, ParseError> {
    let id = doc.arena.allocate()?;
    *doc.arena.node_mut(id) = if open == b'[' {
        Node::Array { first: None, last: None }
    } else {
        Node::Object { first: None, last: None }
    };
    Ok(id)
}

/// Appends `element` to the element chain of `array` in O(1).
fn array_push<A: NodeArena>(
    doc: &mut Document<A>,
    array: NodeId,
    element: NodeId,
) -> Result<(), ParseError> {
    let Node::Array { last, .. } = *doc.arena.node(array) else {
        return Err(ParseError::UnknownInternalError);
    };
    if let Some(prev) = last {
        let Node::Element { next, .. } = doc.arena.node_mut(prev) else {
            return Err(ParseError::UnknownInternalError);
        };
        *next = Some(element);
    }
    let Node::Array { first, last } = doc.arena.node_mut(array) else {
        return Err(ParseError::UnknownInternalError);
    };
    if first.is_none() {
        *first = Some(element);
    }
    *last = Some(element);
    Ok(())
}

/// Appends `pair` to the pair chain of `object` in O(1).
fn object_push<A: NodeArena>(
    doc: &mut Document<A>,
    object: NodeId,
    pair: NodeId,
) -> Result<(), ParseError> {
    let Node::Object { last, .. } = *doc.arena.node(object) else {
        return Err(ParseError::UnknownInternalError);
    };
    if let Some(prev) = last {
        let Node::Pair { next, .. } = doc.arena.node_mut(prev) else {
            return Err(ParseError::UnknownInternalError);
        };
        *next = Some(pair);
    }
    let Node::Object { first, last } = doc.arena.node_mut(object) else {
        return Err(ParseError::UnknownInternalError);
    };
    if first.is_none() {
        *first = Some(pair);
    }
    *last = Some(pair);
    Ok(())
}

/// Fills in the value slot of the pair currently on top of the path.
fn set_pair_value<A: NodeArena>(
    doc: &mut Document<A>,
    pair: NodeId,
    value: NodeId,
) -> Result<(), ParseError> {
    let Node::Pair { value: slot, .. } = doc.arena.node_mut(pair) else {
        return Err(ParseError::UnknownInternalError);
    };
    *slot = Some(value);
    Ok(())
}

/// Replaces the state on top of the stack.
fn set_last(states: &mut [ParseState], state: ParseState) -> Result<(), ParseError> {
    let last = states.last_mut().ok_or(ParseError::UnknownInternalError)?;
    *last = state;
    Ok(())
}

fn to_offset(pos: usize) -> Result<u32, ParseError> {
    u32::try_from(pos).map_err(|_| ParseError::MalformedSource)
}

//! Tree node types.
//!
//! A parsed document is a graph of [`Node`]s held in an arena and linked by
//! [`NodeId`] handles. Scalar text is never copied out of the source: string
//! and number nodes hold a [`Span`] of byte offsets into the source buffer,
//! and the decoders in [`crate::decode`] reconstruct values on demand.

/// A `(start, end)` byte-offset pair into the immutable source text.
///
/// Spans are zero-copy references: the tree stores offsets, and every decode
/// call re-supplies the source buffer the document was parsed from. A span is
/// only meaningful against that exact buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first byte covered by the span.
    pub start: u32,
    /// Offset one past the last byte covered by the span.
    pub end: u32,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Length of the raw text covered by the span, in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slices the covered bytes out of `source`.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie on a character boundary of `source`,
    /// which can only happen when `source` is not the buffer the span was
    /// produced from.
    pub(crate) fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start as usize..self.end as usize]
    }
}

/// Index handle addressing a node inside a [`crate::NodeArena`].
///
/// Handles are plain indices; they are only valid against the arena that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw arena index behind this handle.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node of the parsed tree.
///
/// Containers do not store their children inline; objects and arrays chain
/// `Pair` and `Element` wrapper nodes through `next` links, keeping appends
/// O(1) via the `last` pointer without storing a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Node {
    /// Marker state of a freshly allocated node, before the parser fills it
    /// in. Never reachable from a successfully parsed tree.
    #[default]
    Empty,
    /// A JSON object: a chain of `Pair` nodes in source insertion order.
    Object {
        /// First pair of the chain.
        first: Option<NodeId>,
        /// Last pair of the chain, for O(1) append.
        last: Option<NodeId>,
    },
    /// One `"key": value` entry of an object.
    Pair {
        /// Raw (still-escaped) key bytes between the quotes.
        key: Span,
        /// The value node. Always set once parsing has moved past the pair.
        value: Option<NodeId>,
        /// Next pair of the owning object.
        next: Option<NodeId>,
    },
    /// A JSON array: a chain of `Element` nodes in source insertion order.
    Array {
        /// First element of the chain.
        first: Option<NodeId>,
        /// Last element of the chain, for O(1) append.
        last: Option<NodeId>,
    },
    /// Wrapper linking one array item into its array's chain.
    Element {
        /// The wrapped item node.
        item: Option<NodeId>,
        /// Next element of the owning array.
        next: Option<NodeId>,
    },
    /// A string scalar; the span covers the raw bytes between the quotes,
    /// escapes included.
    String(Span),
    /// A number scalar; the span covers the raw numeral text, sign and
    /// exponent included.
    Number(Span),
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,
}

impl Node {
    /// The kind tag of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Empty => NodeKind::Empty,
            Node::Object { .. } => NodeKind::Object,
            Node::Pair { .. } => NodeKind::Pair,
            Node::Array { .. } => NodeKind::Array,
            Node::Element { .. } => NodeKind::Element,
            Node::String(_) => NodeKind::String,
            Node::Number(_) => NodeKind::Number,
            Node::True => NodeKind::True,
            Node::False => NodeKind::False,
            Node::Null => NodeKind::Null,
        }
    }
}

/// Discriminant-only view of a [`Node`], mainly for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Freshly allocated, not yet filled in.
    Empty,
    /// JSON object.
    Object,
    /// Object key/value pair.
    Pair,
    /// JSON array.
    Array,
    /// Array element wrapper.
    Element,
    /// String scalar.
    String,
    /// Number scalar.
    Number,
    /// `true` literal.
    True,
    /// `false` literal.
    False,
    /// `null` literal.
    Null,
}

impl NodeKind {
    /// Printable name of the node kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Empty => "empty",
            NodeKind::Object => "object",
            NodeKind::Pair => "pair",
            NodeKind::Array => "array",
            NodeKind::Element => "element",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::True => "true",
            NodeKind::False => "false",
            NodeKind::Null => "null",
        }
    }
}

impl core::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Tree navigation utilities.
//!
//! Everything here is read-only traversal over an already parsed document.
//! Lookups compare raw key bytes: no unescaping is performed, so a key
//! containing escape sequences will not match its unescaped form.

use crate::{
    arena::NodeArena,
    document::Document,
    node::{Node, NodeId, Span},
};

/// Borrowed view of a string node or key: the source buffer plus the span
/// of raw (still-escaped) bytes between the quotes.
#[derive(Debug, Clone, Copy)]
pub struct JsonStr<'s> {
    source: &'s str,
    span: Span,
}

impl<'s> JsonStr<'s> {
    pub(crate) fn new(source: &'s str, span: Span) -> Self {
        Self { source, span }
    }

    /// The raw span text, escapes and all.
    #[must_use]
    pub fn raw(&self) -> &'s str {
        self.span.slice(self.source)
    }

    /// Raw span length in bytes: an upper bound on the decoded length,
    /// since escapes, UTF-8 substitution, and filtered characters only ever
    /// shrink the output. Size destination buffers with this.
    #[must_use]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Returns `true` if the raw span is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The span this view wraps.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Iterator over the pairs of an object, in insertion order. Yields pair
/// node handles; use [`Document::pair_value`] and [`Document::pair_key`] to
/// take them apart.
#[derive(Debug)]
pub struct ObjectIter<'d, A: NodeArena> {
    doc: &'d Document<A>,
    current: Option<NodeId>,
}

impl<A: NodeArena> Iterator for ObjectIter<'_, A> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let pair = self.current?;
        self.current = match *self.doc.node(pair) {
            Node::Pair { next, .. } => next,
            _ => None,
        };
        Some(pair)
    }
}

/// Iterator over the items of an array, in insertion order. Yields the
/// wrapped item nodes, one level below the element wrappers.
#[derive(Debug)]
pub struct ArrayIter<'d, A: NodeArena> {
    doc: &'d Document<A>,
    current: Option<NodeId>,
}

impl<A: NodeArena> Iterator for ArrayIter<'_, A> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let element = self.current?;
        let Node::Element { item, next } = *self.doc.node(element) else {
            return None;
        };
        self.current = next;
        item
    }
}

impl<A: NodeArena> Document<A> {
    /// Iterates the pairs of `obj`. `None` if the node is not an object.
    #[must_use]
    pub fn object_iter(&self, obj: NodeId) -> Option<ObjectIter<'_, A>> {
        let Node::Object { first, .. } = *self.node(obj) else {
            return None;
        };
        Some(ObjectIter {
            doc: self,
            current: first,
        })
    }

    /// Iterates the items of `arr`. `None` if the node is not an array.
    #[must_use]
    pub fn array_iter(&self, arr: NodeId) -> Option<ArrayIter<'_, A>> {
        let Node::Array { first, .. } = *self.node(arr) else {
            return None;
        };
        Some(ArrayIter {
            doc: self,
            current: first,
        })
    }

    /// Finds the first pair of `obj` whose key bytes equal `name`.
    ///
    /// Linear scan in insertion order; duplicate keys are retained as
    /// distinct pairs and the first match wins. O(n), no index is built.
    #[must_use]
    pub fn field_by_name(&self, source: &str, obj: NodeId, name: &str) -> Option<NodeId> {
        self.object_iter(obj)?
            .find(|&pair| self.pair_key_matches(source, pair, name))
    }

    /// Compares the raw key bytes of `pair` against `name`.
    #[must_use]
    pub fn pair_key_matches(&self, source: &str, pair: NodeId, name: &str) -> bool {
        match *self.node(pair) {
            Node::Pair { key, .. } => key.slice(source).as_bytes() == name.as_bytes(),
            _ => false,
        }
    }

    /// The item at position `idx` of `arr`, or `None` when the array is
    /// shorter or the node is not an array.
    #[must_use]
    pub fn array_index(&self, arr: NodeId, idx: usize) -> Option<NodeId> {
        self.array_iter(arr)?.nth(idx)
    }

    /// The value node of `pair`.
    #[must_use]
    pub fn pair_value(&self, pair: NodeId) -> Option<NodeId> {
        match *self.node(pair) {
            Node::Pair { value, .. } => value,
            _ => None,
        }
    }

    /// The key of `pair` as a borrowed string view.
    #[must_use]
    pub fn pair_key<'s>(&self, source: &'s str, pair: NodeId) -> Option<JsonStr<'s>> {
        match *self.node(pair) {
            Node::Pair { key, .. } => Some(JsonStr::new(source, key)),
            _ => None,
        }
    }

    /// A borrowed view of a string node's raw span.
    #[must_use]
    pub fn string_view<'s>(&self, source: &'s str, node: NodeId) -> Option<JsonStr<'s>> {
        match *self.node(node) {
            Node::String(span) => Some(JsonStr::new(source, span)),
            _ => None,
        }
    }
}

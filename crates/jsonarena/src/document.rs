//! Document handle and teardown.

use alloc::vec::Vec;

use crate::{
    arena::NodeArena,
    node::{Node, NodeId},
};

/// Owns the parsed tree's root and the arena its nodes live in.
///
/// A document is created empty, populated by one [`crate::Parser::parse`]
/// call, traversed read-only, and finally torn down. Teardown happens either
/// through [`clear`](Document::clear) or on drop, and is the only place
/// nodes are handed back to the arena.
///
/// The document stores byte-offset spans, never source text: the source
/// buffer is borrowed for every navigation or decode call and must outlive
/// any use of the spans derived from it.
///
/// # Examples
///
/// ```rust
/// use jsonarena::{Document, HeapArena, Parser, ParserOptions};
///
/// let source = r#"{"greeting": "hello"}"#;
/// let mut doc = Document::new(HeapArena::new());
/// Parser::new(ParserOptions::default())
///     .parse(&mut doc, source)
///     .unwrap();
/// assert!(doc.root().is_some());
/// ```
#[derive(Debug)]
pub struct Document<A: NodeArena> {
    pub(crate) arena: A,
    pub(crate) root: Option<NodeId>,
}

impl<A: NodeArena> Document<A> {
    /// Creates an empty document backed by `arena`. Allocates nothing.
    pub fn new(arena: A) -> Self {
        Self { arena, root: None }
    }

    /// The root node, once a parse has populated the document.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns `true` if no parse has populated the document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Borrows the node behind `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.node(id)
    }

    /// Borrows the backing arena.
    #[must_use]
    pub fn arena(&self) -> &A {
        &self.arena
    }

    /// Tears down the entire tree, returning every node to the arena.
    ///
    /// Deletion is post-order and iterative: an explicit stack replaces
    /// recursion so that teardown cost is bounded by tree depth rather than
    /// call-stack capacity. A pair or element is freed on visit, with its
    /// sibling continuation pushed below its value so the value subtree is
    /// fully reclaimed before the sibling is revisited. No-op on an empty
    /// document.
    pub fn clear(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };
        if !matches!(
            self.arena.node(root),
            Node::Array { .. } | Node::Object { .. }
        ) {
            self.arena.deallocate(root);
            return;
        }

        let mut stack: Vec<NodeId> = Vec::new();
        stack.push(root);

        while let Some(id) = stack.pop() {
            match *self.arena.node(id) {
                Node::Object { first, .. } | Node::Array { first, .. } => {
                    self.arena.deallocate(id);
                    if let Some(first) = first {
                        stack.push(first);
                    }
                }
                Node::Pair { value, next, .. } | Node::Element { item: value, next } => {
                    self.arena.deallocate(id);
                    if let Some(next) = next {
                        stack.push(next);
                    }
                    // value on top: the subtree goes before the sibling
                    if let Some(value) = value {
                        stack.push(value);
                    }
                }
                Node::Empty
                | Node::String(_)
                | Node::Number(_)
                | Node::True
                | Node::False
                | Node::Null => {
                    self.arena.deallocate(id);
                }
            }
        }
    }
}

impl<A: NodeArena> Drop for Document<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

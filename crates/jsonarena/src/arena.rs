//! Node storage capability.
//!
//! The parser core never allocates nodes itself; it asks the arena supplied
//! at document construction time. [`NodeArena`] is the injectable capability,
//! [`HeapArena`] the default per-node implementation, and [`BumpArena`] a
//! chunked bulk-free implementation for allocation-heavy workloads.

use alloc::vec::Vec;
use thiserror::Error;

use crate::node::{Node, NodeId};

/// Returned when an arena cannot hand out another node.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("allocation failure")]
pub struct AllocError;

/// Storage capability for tree nodes.
///
/// Every node handed out by [`allocate`](NodeArena::allocate) starts in the
/// [`Node::Empty`] marker state and must eventually be passed to
/// [`deallocate`](NodeArena::deallocate) exactly once; document teardown is
/// the only caller that does so. Handles are only valid against the arena
/// that produced them.
pub trait NodeArena {
    /// Hands out a fresh node in the `Empty` state.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] when the arena is exhausted.
    fn allocate(&mut self) -> Result<NodeId, AllocError>;

    /// Releases a node previously returned by `allocate`.
    fn deallocate(&mut self, id: NodeId);

    /// Borrows the node behind `id`.
    fn node(&self, id: NodeId) -> &Node;

    /// Mutably borrows the node behind `id`.
    fn node_mut(&mut self, id: NodeId) -> &mut Node;
}

/// Default arena: one slot per node with a free list.
///
/// Deallocated slots are recycled by later allocations.
#[derive(Debug, Default)]
pub struct HeapArena {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
}

impl HeapArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (allocated, not yet deallocated) nodes.
    #[must_use]
    pub fn live_nodes(&self) -> usize {
        self.nodes.len() - self.free.len()
    }
}

impl NodeArena for HeapArena {
    fn allocate(&mut self) -> Result<NodeId, AllocError> {
        if let Some(id) = self.free.pop() {
            self.nodes[id.index()] = Node::Empty;
            return Ok(id);
        }
        let id = NodeId::new(u32::try_from(self.nodes.len()).map_err(|_| AllocError)?);
        self.nodes.push(Node::Empty);
        Ok(id)
    }

    fn deallocate(&mut self, id: NodeId) {
        self.nodes[id.index()] = Node::Empty;
        self.free.push(id);
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}

/// Allocation statistics of a [`BumpArena`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpStats {
    /// Nodes handed out by `allocate`.
    pub nodes_allocated: usize,
    /// Nodes returned through `deallocate`.
    pub nodes_deallocated: usize,
    /// Chunks currently backing the arena.
    pub chunks: usize,
}

/// Chunked bump arena: nodes come from fixed-size chunks, `deallocate` only
/// counts, and all storage is released in bulk when the arena is dropped.
#[derive(Debug)]
pub struct BumpArena {
    chunks: Vec<Vec<Node>>,
    chunk_size: usize,
    max_nodes: Option<usize>,
    stats: BumpStats,
}

impl BumpArena {
    /// Default nodes per chunk, matching a few pages of node storage.
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;

    /// Creates an arena with the default chunk size and no node limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Self::DEFAULT_CHUNK_SIZE, None)
    }

    /// Creates an arena with `chunk_size` nodes per chunk and an optional
    /// ceiling on the total node count. Allocations past the ceiling fail
    /// with [`AllocError`].
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[must_use]
    pub fn with_limits(chunk_size: usize, max_nodes: Option<usize>) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            chunks: Vec::new(),
            chunk_size,
            max_nodes,
            stats: BumpStats::default(),
        }
    }

    /// Current allocation statistics.
    #[must_use]
    pub fn stats(&self) -> BumpStats {
        self.stats
    }

    fn locate(&self, id: NodeId) -> (usize, usize) {
        (id.index() / self.chunk_size, id.index() % self.chunk_size)
    }
}

impl Default for BumpArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeArena for BumpArena {
    fn allocate(&mut self) -> Result<NodeId, AllocError> {
        if let Some(max) = self.max_nodes {
            if self.stats.nodes_allocated >= max {
                return Err(AllocError);
            }
        }
        if self
            .chunks
            .last()
            .is_none_or(|chunk| chunk.len() == self.chunk_size)
        {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.stats.chunks += 1;
        }
        let chunk_index = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_index];
        let index = chunk_index * self.chunk_size + chunk.len();
        chunk.push(Node::Empty);
        self.stats.nodes_allocated += 1;
        Ok(NodeId::new(u32::try_from(index).map_err(|_| AllocError)?))
    }

    fn deallocate(&mut self, _id: NodeId) {
        // Bulk-freed on drop; only the count is kept.
        self.stats.nodes_deallocated += 1;
    }

    fn node(&self, id: NodeId) -> &Node {
        let (chunk, slot) = self.locate(id);
        &self.chunks[chunk][slot]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        let (chunk, slot) = self.locate(id);
        &mut self.chunks[chunk][slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_arena_recycles_freed_slots() {
        let mut arena = HeapArena::new();
        let a = arena.allocate().unwrap();
        let b = arena.allocate().unwrap();
        assert_ne!(a, b);
        *arena.node_mut(a) = Node::True;
        arena.deallocate(a);
        assert_eq!(arena.live_nodes(), 1);
        let c = arena.allocate().unwrap();
        assert_eq!(c, a);
        assert_eq!(*arena.node(c), Node::Empty);
    }

    #[test]
    fn bump_arena_grows_in_chunks() {
        let mut arena = BumpArena::with_limits(2, None);
        for _ in 0..5 {
            arena.allocate().unwrap();
        }
        let stats = arena.stats();
        assert_eq!(stats.nodes_allocated, 5);
        assert_eq!(stats.chunks, 3);
    }

    #[test]
    fn bump_arena_enforces_node_ceiling() {
        let mut arena = BumpArena::with_limits(2, Some(3));
        assert!(arena.allocate().is_ok());
        assert!(arena.allocate().is_ok());
        assert!(arena.allocate().is_ok());
        assert_eq!(arena.allocate(), Err(AllocError));
    }
}

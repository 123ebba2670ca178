//! Opaque identifiers for atoms and bonds, and the allocator that issues them.

use serde::{Deserialize, Serialize};

/// Identifier of an atom. Never reused within one [`IdAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AtomId(pub u32);

/// Identifier of a bond. Drawn from the same sequence as [`AtomId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BondId(pub u32);

impl std::fmt::Display for AtomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a{}", self.0)
    }
}

impl std::fmt::Display for BondId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// Monotonic id source owned by whoever owns the graph.
///
/// Atom and bond ids share one counter, so an id value is unique across both
/// kinds. Tests seed it with [`starting_at`](Self::starting_at) to get
/// predictable ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// The value the next call will hand out.
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn next_atom(&mut self) -> AtomId {
        AtomId(self.bump())
    }

    pub fn next_bond(&mut self) -> BondId {
        BondId(self.bump())
    }

    /// Wraps at `u32::MAX`, so any seed yields 2^32 distinct ids before one
    /// repeats.
    fn bump(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

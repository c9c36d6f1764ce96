//! Identifier types for board nodes and card instances.
//!
//! ## ID Layout
//!
//! - `NodeId`: index into the path arena (`PathGraph`). Nodes are allocated
//!   in step order, so comparing ids compares board position.
//! - `CardId`: one per card *instance*, not per template. Two "Weak Strike"
//!   cards in the same deck have different ids.
//!
//! Ids are handed out by an [`IdAllocator`] owned by whoever builds the
//! object set. There is no process-wide counter, so two games built side by
//! side never share or skip ids.
//!
//! ```
//! use card_quest::core::{CardId, IdAllocator};
//!
//! let mut ids = IdAllocator::new();
//! let a: CardId = ids.next_card();
//! let b: CardId = ids.next_card();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Position of a node in the path arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Arena index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Unique identifier for one physical card in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// Per-invocation id source.
///
/// Node ids start at 0 because they double as arena indices. Card ids start
/// at 1 so that `CardId(0)` never names a real card.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next_node: u16,
    next_card: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_node: 0,
            next_card: 1,
        }
    }

    /// Allocate the next node id.
    pub fn next_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    /// Allocate the next card id.
    pub fn next_card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card += 1;
        id
    }
}

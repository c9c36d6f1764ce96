//! Board positions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ids::NodeId;

/// What happens when the player lands on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceType {
    Start,
    Battle,
    Reward,
    Boss,
}

impl SpaceType {
    /// Three-character map symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            SpaceType::Start => "[@]",
            SpaceType::Battle => "[X]",
            SpaceType::Reward => "[R]",
            SpaceType::Boss => "[!]",
        }
    }

    /// Single glyph inside the symbol brackets.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            SpaceType::Start => '@',
            SpaceType::Battle => 'X',
            SpaceType::Reward => 'R',
            SpaceType::Boss => '!',
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SpaceType::Start => "Start",
            SpaceType::Battle => "Battle",
            SpaceType::Reward => "Reward",
            SpaceType::Boss => "BOSS",
        }
    }
}

/// A node on the path graph.
///
/// `child_ids` point one step forward only. `is_visited` is the only field
/// that changes after generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathNode {
    pub id: NodeId,

    /// Depth, 0 (start) through 10 (boss).
    pub step: u8,

    /// Left-to-right position among the nodes of the same step.
    pub branch_index: u8,

    pub space_type: SpaceType,

    pub is_visited: bool,

    /// Nodes at `step + 1` reachable directly from here.
    pub child_ids: SmallVec<[NodeId; 3]>,
}

impl PathNode {
    /// Create an unvisited node with no children.
    #[must_use]
    pub fn new(id: NodeId, step: u8, branch_index: u8, space_type: SpaceType) -> Self {
        Self {
            id,
            step,
            branch_index,
            space_type,
            is_visited: false,
            child_ids: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(SpaceType::Start.symbol(), "[@]");
        assert_eq!(SpaceType::Battle.symbol(), "[X]");
        assert_eq!(SpaceType::Reward.symbol(), "[R]");
        assert_eq!(SpaceType::Boss.symbol(), "[!]");
    }

    #[test]
    fn test_glyph_matches_symbol() {
        for space in [SpaceType::Start, SpaceType::Battle, SpaceType::Reward, SpaceType::Boss] {
            assert_eq!(space.symbol(), format!("[{}]", space.glyph()));
        }
    }

    #[test]
    fn test_new_node_is_unvisited_leaf() {
        let node = PathNode::new(NodeId::new(3), 2, 1, SpaceType::Reward);
        assert!(!node.is_visited);
        assert!(node.child_ids.is_empty());
        assert_eq!(node.space_type.label(), "Reward");
    }
}

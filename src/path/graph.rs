//! Path graph arena and reachability queries.
//!
//! Nodes live in an `im::Vector` indexed by `NodeId`, so cloning the graph
//! for a new state snapshot is O(1) and marking a node visited only copies
//! one chunk.
//!
//! ```
//! use card_quest::core::PathTopology;
//! use card_quest::path::{PathGraph, SpaceType};
//!
//! let graph = PathGraph::generate(PathTopology::Diamond);
//! let start = graph.start();
//!
//! assert_eq!(graph.get(start).map(|n| n.space_type), Some(SpaceType::Start));
//! assert_eq!(graph.reachable_at_step(start, 1).len(), 2);
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::node::{PathNode, SpaceType};
use super::topology::{child_branches, space_types, BOSS_STEP};
use crate::core::config::PathTopology;
use crate::core::ids::{IdAllocator, NodeId};

/// The layered DAG of path nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathGraph {
    nodes: Vector<PathNode>,
}

impl PathGraph {
    /// Build and wire the full node set for a new run.
    #[must_use]
    pub fn generate(topology: PathTopology) -> Self {
        let mut ids = IdAllocator::new();
        let mut nodes = Vector::new();
        // Arena ids of each step, in branch order.
        let mut layers: Vec<Vec<NodeId>> = Vec::with_capacity(usize::from(BOSS_STEP) + 1);

        for step in 0..=BOSS_STEP {
            let mut layer = Vec::new();
            for (branch, space_type) in space_types(topology, step).into_iter().enumerate() {
                let id = ids.next_node();
                nodes.push_back(PathNode::new(id, step, branch as u8, space_type));
                layer.push(id);
            }
            layers.push(layer);
        }

        for step in 0..BOSS_STEP {
            let next = &layers[usize::from(step) + 1];
            for (branch, &parent) in layers[usize::from(step)].iter().enumerate() {
                let children: SmallVec<[NodeId; 3]> = child_branches(topology, step, branch as u8)
                    .into_iter()
                    .filter_map(|b| next.get(usize::from(b)).copied())
                    .collect();
                if let Some(node) = nodes.get_mut(parent.index()) {
                    node.child_ids = children;
                }
            }
        }

        Self { nodes }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&PathNode> {
        self.nodes.get(id.index())
    }

    /// Check if a node id belongs to this graph.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Iterate over all nodes in arena order (step, then branch).
    pub fn iter(&self) -> impl Iterator<Item = &PathNode> {
        self.nodes.iter()
    }

    /// The start node. The generator always allocates step 0 first.
    #[must_use]
    pub fn start(&self) -> NodeId {
        NodeId::new(0)
    }

    /// The boss node, if present.
    #[must_use]
    pub fn boss(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.space_type == SpaceType::Boss)
            .map(|n| n.id)
    }

    /// Nodes at `step`, ordered by branch index.
    #[must_use]
    pub fn nodes_at_step(&self, step: u8) -> Vec<&PathNode> {
        let mut at_step: Vec<&PathNode> = self.nodes.iter().filter(|n| n.step == step).collect();
        at_step.sort_by_key(|n| n.branch_index);
        at_step
    }

    /// Nodes with an edge into `id`.
    #[must_use]
    pub fn parents_of(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.child_ids.contains(&id))
            .map(|n| n.id)
            .collect()
    }

    /// Mark a node visited. Unknown ids are ignored.
    pub fn mark_visited(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.is_visited = true;
        }
    }

    /// All children of a frontier, deduplicated and in arena order.
    #[must_use]
    pub fn advance(&self, frontier: &[NodeId]) -> Vec<NodeId> {
        let mut seen = FxHashSet::default();
        let mut next: Vec<NodeId> = frontier
            .iter()
            .filter_map(|&id| self.get(id))
            .flat_map(|node| node.child_ids.iter().copied())
            .filter(|id| seen.insert(*id))
            .collect();
        next.sort_unstable();
        next
    }

    /// Nodes at `target_step` reachable from `from` by following edges.
    ///
    /// Empty when `target_step` is not ahead of `from`.
    #[must_use]
    pub fn reachable_at_step(&self, from: NodeId, target_step: u8) -> Vec<NodeId> {
        let Some(origin) = self.get(from) else {
            return Vec::new();
        };
        if target_step <= origin.step {
            return Vec::new();
        }

        let mut frontier = vec![from];
        for _ in origin.step..target_step {
            frontier = self.advance(&frontier);
            if frontier.is_empty() {
                break;
            }
        }
        frontier
    }
}

//! Path generator: the layered board the player walks.
//!
//! ## Key Types
//!
//! - `PathNode`: One space on the board (step, branch, type, children)
//! - `SpaceType`: Start, battle, reward or boss
//! - `PathGraph`: Arena of nodes with reachability queries
//!
//! Steps run from 0 (start) to [`BOSS_STEP`]. Edges only ever go from step
//! `n` to step `n + 1`, so the graph is a DAG layered by step.

pub mod graph;
pub mod node;
pub mod topology;

pub use graph::PathGraph;
pub use node::{PathNode, SpaceType};
pub use topology::BOSS_STEP;

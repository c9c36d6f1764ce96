//! Layout tables for the two path topologies.
//!
//! ## Diamond
//!
//! ```text
//! step  0   1   2   3   4   5   6   7   8   9   10
//! nodes 1   2   3   4   4   3   3   2   2   2   1
//! ```
//!
//! Expands to four lanes, holds, then converges on the boss. Each parent
//! feeds one or two *adjacent* children and no child is left without a
//! parent.
//!
//! ## Lattice
//!
//! Alternating 2/3 lanes between start and boss, branch 1 always a reward,
//! every node wired to every node of the next step.

use smallvec::SmallVec;

use super::node::SpaceType;
use crate::core::config::PathTopology;

/// Step of the boss node (and number of steps after the start).
pub const BOSS_STEP: u8 = 10;

const DIAMOND_TYPES: [&[SpaceType]; 11] = [
    &[SpaceType::Start],
    &[SpaceType::Battle, SpaceType::Battle],
    &[SpaceType::Battle, SpaceType::Reward, SpaceType::Battle],
    &[SpaceType::Battle, SpaceType::Battle, SpaceType::Reward, SpaceType::Battle],
    &[SpaceType::Battle, SpaceType::Reward, SpaceType::Battle, SpaceType::Battle],
    &[SpaceType::Battle, SpaceType::Battle, SpaceType::Battle],
    &[SpaceType::Reward, SpaceType::Battle, SpaceType::Battle],
    &[SpaceType::Battle, SpaceType::Battle],
    &[SpaceType::Battle, SpaceType::Reward],
    &[SpaceType::Battle, SpaceType::Battle],
    &[SpaceType::Boss],
];

/// `DIAMOND_WIRING[step][parent_branch]` lists child branch indices at
/// `step + 1`.
const DIAMOND_WIRING: [&[&[u8]]; 10] = [
    &[&[0, 1]],
    &[&[0, 1], &[1, 2]],
    &[&[0, 1], &[1, 2], &[2, 3]],
    &[&[0], &[1, 2], &[2, 3], &[3]],
    &[&[0], &[0, 1], &[1, 2], &[2]],
    &[&[0], &[1, 2], &[2]],
    &[&[0], &[0, 1], &[1]],
    &[&[0], &[1]],
    &[&[0], &[1]],
    &[&[0], &[0]],
];

const LATTICE_COUNTS: [u8; 11] = [1, 2, 3, 2, 3, 2, 3, 2, 3, 2, 1];

/// Space types of every node at `step`, in branch order.
pub fn space_types(topology: PathTopology, step: u8) -> Vec<SpaceType> {
    match topology {
        PathTopology::Diamond => DIAMOND_TYPES
            .get(usize::from(step))
            .map(|types| types.to_vec())
            .unwrap_or_default(),
        PathTopology::Lattice => {
            let count = LATTICE_COUNTS.get(usize::from(step)).copied().unwrap_or(0);
            (0..count)
                .map(|branch| match step {
                    0 => SpaceType::Start,
                    BOSS_STEP => SpaceType::Boss,
                    _ if branch == 1 => SpaceType::Reward,
                    _ => SpaceType::Battle,
                })
                .collect()
        }
    }
}

/// Child branch indices at `step + 1` for the parent at `parent_branch`.
///
/// Returned indices are deduplicated and ascending.
pub fn child_branches(topology: PathTopology, step: u8, parent_branch: u8) -> SmallVec<[u8; 3]> {
    let mut children: SmallVec<[u8; 3]> = match topology {
        PathTopology::Diamond => DIAMOND_WIRING
            .get(usize::from(step))
            .and_then(|parents| parents.get(usize::from(parent_branch)))
            .map(|children| SmallVec::from_slice(children))
            .unwrap_or_default(),
        PathTopology::Lattice => {
            let next = LATTICE_COUNTS
                .get(usize::from(step) + 1)
                .copied()
                .unwrap_or(0);
            (0..next).collect()
        }
    };
    children.sort_unstable();
    children.dedup();
    children
}

//! Run configuration.
//!
//! A run is configured once, at `new_game` time, by a [`RunConfig`]:
//! - `starting_hp`: player HP and HP cap
//! - `hand_size`: cards dealt into the opening hand
//! - `battle_reward_choices`: size of the pick-one pool after a won battle
//! - `topology`: which path layout to generate
//!
//! The config is copied into `GameState`, so every engine operation reads
//! the same values the run started with.
//!
//! ```
//! use card_quest::core::{PathTopology, RunConfig};
//!
//! let config = RunConfig::default()
//!     .with_starting_hp(30)
//!     .with_topology(PathTopology::Lattice);
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

/// Board layout policy.
///
/// Both layouts satisfy the same DAG invariants; they differ in how many
/// nodes each step holds and how consecutive steps are wired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathTopology {
    /// Expand to four lanes, then converge on the boss. Each node offers one
    /// or two adjacent children.
    #[default]
    Diamond,
    /// Alternating 2/3 lanes, every node wired to every node one step ahead.
    Lattice,
}

/// Configuration for a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Player HP at the start of the run, also the HP cap.
    pub starting_hp: i32,

    /// Cards dealt into the opening hand.
    pub hand_size: usize,

    /// Cards offered after defeating a non-boss enemy.
    pub battle_reward_choices: usize,

    /// Path layout.
    pub topology: PathTopology,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            starting_hp: 20,
            hand_size: 7,
            battle_reward_choices: 3,
            topology: PathTopology::Diamond,
        }
    }
}

impl RunConfig {
    /// Set the starting HP.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: i32) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the battle reward pool size.
    #[must_use]
    pub fn with_battle_reward_choices(mut self, count: usize) -> Self {
        self.battle_reward_choices = count;
        self
    }

    /// Set the path layout.
    #[must_use]
    pub fn with_topology(mut self, topology: PathTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Check the values against the fixed deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_hp <= 0 {
            return Err(ConfigError::NonPositiveHp(self.starting_hp));
        }
        if self.hand_size == 0 || self.hand_size > DECK_SIZE {
            return Err(ConfigError::HandSize {
                requested: self.hand_size,
                deck: DECK_SIZE,
            });
        }
        Ok(())
    }
}

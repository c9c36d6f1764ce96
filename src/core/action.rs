//! Engine operations as data.
//!
//! Every state-changing engine function has a matching [`GameAction`]
//! variant. Holders that prefer a single entry point can enumerate
//! `legal_actions` and feed the chosen one to `apply_action`; random
//! playouts in the test suite drive whole runs this way.
//!
//! ```
//! use card_quest::core::{CardId, GameAction, NodeId};
//!
//! let step = GameAction::Move { card: CardId::new(3), destination: NodeId::new(4) };
//! assert!(step.plays_card());
//! assert!(!GameAction::CollectReward.plays_card());
//! ```

use serde::{Deserialize, Serialize};

use super::ids::{CardId, NodeId};

/// A complete player intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Spend a card's side A to move to `destination`.
    Move { card: CardId, destination: NodeId },
    /// Spend a card's side B against the active enemy.
    Fight { card: CardId },
    /// Take the single card on a treasure space.
    CollectReward,
    /// Keep one card out of the battle reward pool.
    TakeBattleReward { card: CardId },
    /// Return the whole battle reward pool to the draw pile.
    SkipBattleReward,
}

impl GameAction {
    /// Check if this action spends a card (and so advances the turn counter).
    #[must_use]
    pub const fn plays_card(&self) -> bool {
        matches!(self, GameAction::Move { .. } | GameAction::Fight { .. })
    }
}

/// A successfully applied action, kept in `GameState::history`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: GameAction,

    /// Turn number after the action was applied.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: GameAction, turn: u32) -> Self {
        Self { action, turn }
    }
}

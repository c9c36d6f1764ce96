//! Game state: the aggregate root of a run.
//!
//! ## GameState
//!
//! Complete run state:
//! - Path graph and current position
//! - Card piles (hand, draw, discard, reward choices)
//! - Player HP, phase, active battle
//! - Turn counter, status message, action history
//! - RNG and run configuration
//!
//! Uses `im` persistent data structures, so the engine can hand back a new
//! snapshot for every operation while older snapshots stay valid and cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::battle::BattleState;
use super::config::RunConfig;
use super::ids::NodeId;
use super::phase::{GameOutcome, GamePhase};
use super::rng::GameRng;
use crate::path::{PathGraph, PathNode};
use crate::zones::CardPiles;

/// Full state of one run.
///
/// Engine operations take `&GameState` and return a new `GameState`; they
/// never mutate their input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Board ===
    /// All path nodes.
    pub path: PathGraph,

    /// Node the player stands on.
    pub current_node: NodeId,

    /// Step of `current_node`.
    pub current_step: u8,

    // === Cards ===
    pub piles: CardPiles,

    // === Player ===
    pub player_hp: i32,
    pub player_max_hp: i32,

    // === Progression ===
    pub phase: GamePhase,

    /// Present while a fight is going on. A defeated boss stays here,
    /// resolved, for the final screen.
    pub active_battle: Option<BattleState>,

    /// Incremented once per card played.
    pub turn_number: u32,

    /// Status line for the player.
    pub message: String,

    /// Successfully applied actions, oldest first.
    pub history: Vector<ActionRecord>,

    // === Environment ===
    pub rng: GameRng,
    pub config: RunConfig,
}

impl GameState {
    /// The node the player stands on.
    #[must_use]
    pub fn current_node(&self) -> Option<&PathNode> {
        self.path.get(self.current_node)
    }

    /// Check if the run has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    /// Outcome of a finished run.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.phase.outcome()
    }

    /// Cards across all piles. Constant for a whole run.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.total()
    }

    /// Reduce player HP, clamped at zero.
    pub fn damage_player(&mut self, amount: i32) {
        self.player_hp = (self.player_hp - amount).clamp(0, self.player_max_hp);
    }

    /// Heal the player up to max HP. Returns the HP actually restored.
    pub fn heal_player(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.player_max_hp - self.player_hp).max(0);
        self.player_hp += healed;
        healed
    }

    /// Append to the action history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}

//! Game phase state machine.
//!
//! ```text
//! Movement ──► Battle ──► BattleReward ──► Movement
//!    │            └─────► Movement (empty reward pool)
//!    ├───────► Reward ──► Movement
//!    └───────► BossFight ──► GameOver { won: true }
//!
//! Battle / BossFight ──► GameOver { won: false }   (slain or out of cards)
//! ```
//!
//! `GameOver` is terminal. A new run starts from a brand new `GameState`.

use serde::{Deserialize, Serialize};

/// Current mode of play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Choose a card and a destination.
    #[default]
    Movement,
    /// Fighting a regular enemy.
    Battle,
    /// Standing on a treasure space.
    Reward,
    /// Picking one card out of the post-battle pool.
    BattleReward,
    /// Fighting the boss.
    BossFight,
    /// Run finished.
    GameOver { won: bool },
}

impl GamePhase {
    /// Check if this is a terminal phase.
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GamePhase::GameOver { .. })
    }

    /// Check if an enemy is being fought.
    #[must_use]
    pub const fn is_combat(self) -> bool {
        matches!(self, GamePhase::Battle | GamePhase::BossFight)
    }

    /// Outcome for terminal phases.
    #[must_use]
    pub const fn outcome(self) -> Option<GameOutcome> {
        match self {
            GamePhase::GameOver { won: true } => Some(GameOutcome::Victory),
            GamePhase::GameOver { won: false } => Some(GameOutcome::Defeat),
            _ => None,
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Movement => write!(f, "movement"),
            GamePhase::Battle => write!(f, "battle"),
            GamePhase::Reward => write!(f, "reward"),
            GamePhase::BattleReward => write!(f, "battle reward"),
            GamePhase::BossFight => write!(f, "boss fight"),
            GamePhase::GameOver { won: true } => write!(f, "game over (won)"),
            GamePhase::GameOver { won: false } => write!(f, "game over (lost)"),
        }
    }
}

/// Result of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The boss was defeated.
    Victory,
    /// The player was slain or ran out of cards mid-fight.
    Defeat,
}

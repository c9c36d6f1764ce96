//! Core engine types: ids, RNG, configuration, errors, phases, state.
//!
//! This module contains the building blocks every other module shares.
//! Nothing here knows how a card is resolved; that lives in `rules`.

pub mod action;
pub mod battle;
pub mod config;
pub mod error;
pub mod ids;
pub mod phase;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, GameAction};
pub use battle::BattleState;
pub use config::{PathTopology, RunConfig};
pub use error::{ConfigError, EngineError};
pub use ids::{CardId, IdAllocator, NodeId};
pub use phase::{GameOutcome, GamePhase};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;

//! Error types for rejected engine operations.
//!
//! Engine operations never fail loudly. The `try_*` functions in
//! [`crate::rules`] report *why* an operation was rejected through
//! [`EngineError`]; the public operations turn every error into a no-op that
//! returns the input state unchanged.

use super::ids::{CardId, NodeId};
use super::phase::GamePhase;

/// Why an engine operation left the state unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),

    #[error("node {0} does not exist on this path")]
    UnknownNode(NodeId),

    #[error("no active battle")]
    NoActiveBattle,

    #[error("operation needs phase {expected}, current phase is {actual}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("the game is over")]
    GameOver,

    #[error("invalid run configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Invalid `RunConfig` values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("starting HP must be positive, got {0}")]
    NonPositiveHp(i32),

    #[error("hand size {requested} must be between 1 and the deck size {deck}")]
    HandSize { requested: usize, deck: usize },
}

//! # rust-card-quest
//!
//! Engine for a single-player card quest: walk a branching path by spending
//! two-sided cards, fight what blocks the way, pick up reward cards, and
//! beat the boss on the last step.
//!
//! ## Design Principles
//!
//! 1. **Pure Operations**: Every operation takes `&GameState` and returns a
//!    new `GameState`. The caller's copy is never touched.
//!
//! 2. **Never Fail Loudly**: A rejected operation returns its input
//!    unchanged. The `try_*` variants say why.
//!
//! 3. **Deterministic**: Shuffles draw from a seeded RNG stored in the
//!    state, so a seed plus a list of actions replays a run exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state snapshots via `im-rs`.
//!
//! - **Arena Graph**: Path nodes live in one vector; `NodeId` is the index.
//!
//! - **Actions as Data**: `legal_actions` + `apply_action` drive a run
//!   without naming individual operations.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, configuration, errors, phases, battle, state
//! - `path`: Path graph generation and reachability
//! - `cards`: Card effects, cards, starting deck
//! - `zones`: Hand, draw, discard and reward piles
//! - `rules`: Movement, combat, rewards, run setup
//! - `render`: Path map and status lines

pub mod cards;
pub mod core;
pub mod path;
pub mod render;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, BattleState, CardId, ConfigError, EngineError, GameAction, GameOutcome,
    GamePhase, GameRng, GameRngState, GameState, IdAllocator, NodeId, PathTopology, RunConfig,
};

pub use crate::path::{PathGraph, PathNode, SpaceType, BOSS_STEP};

pub use crate::cards::{make_deck, Card, CardEffect, Rarity, DECK_SIZE};

pub use crate::zones::{CardPiles, Pile};

pub use crate::rules::{
    apply_action, boss_battle, collect_battle_reward, collect_reward, enemy_for_step,
    legal_actions, new_game, new_game_seeded, new_game_with_config, outcome,
    play_card_for_combat, play_card_for_movement, resolve_movement_targets, skip_battle_reward,
    try_apply_action, try_collect_battle_reward, try_collect_reward, try_play_card_for_combat,
    try_play_card_for_movement, try_skip_battle_reward,
};

pub use crate::render::{
    deck_status_line, enemy_hp_bar, hp_bar, player_hp_bar, render_graph, render_path_map,
};

//! Game rules: movement, combat, rewards, and run setup.
//!
//! All operations are pure functions over [`GameState`](crate::core::GameState).
//! The plain form of each operation never fails; a rejected call returns an
//! unchanged clone of its input. The `try_*` forms report the reason as an
//! [`EngineError`](crate::core::EngineError).

pub mod combat;
pub mod enemies;
pub mod engine;
pub mod movement;
pub mod rewards;

pub use combat::{play_card_for_combat, try_play_card_for_combat};
pub use enemies::{boss_battle, enemy_for_step, enemy_template_for_step, EnemyTemplate};
pub use engine::{
    apply_action, legal_actions, new_game, new_game_seeded, new_game_with_config, outcome,
    try_apply_action,
};
pub use movement::{play_card_for_movement, resolve_movement_targets, try_play_card_for_movement};
pub use rewards::{
    collect_battle_reward, collect_reward, skip_battle_reward, try_collect_battle_reward,
    try_collect_reward, try_skip_battle_reward,
};

//! Transient combat session.

use im::Vector;
use serde::{Deserialize, Serialize};

/// One fight against one enemy.
///
/// Created when the player lands on a battle or boss node. Enemy HP is kept
/// in `[0, enemy_max_hp]` by every mutator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub enemy_name: String,
    pub enemy_hp: i32,
    pub enemy_max_hp: i32,
    /// Fixed damage dealt on every retaliation.
    pub enemy_damage_per_turn: i32,
    /// Block gathered since the last enemy attack.
    pub player_block_this_turn: i32,
    /// Append-only combat log.
    pub log: Vector<String>,
    pub is_resolved: bool,
}

impl BattleState {
    /// Create a fresh battle with a full-health enemy.
    #[must_use]
    pub fn new(enemy_name: impl Into<String>, max_hp: i32, damage_per_turn: i32) -> Self {
        Self {
            enemy_name: enemy_name.into(),
            enemy_hp: max_hp,
            enemy_max_hp: max_hp,
            enemy_damage_per_turn: damage_per_turn,
            player_block_this_turn: 0,
            log: Vector::new(),
            is_resolved: false,
        }
    }

    /// Apply damage to the enemy, clamped at zero.
    pub fn damage_enemy(&mut self, amount: i32) {
        self.enemy_hp = (self.enemy_hp - amount).clamp(0, self.enemy_max_hp);
    }

    /// Check if the enemy has no HP left.
    #[must_use]
    pub fn is_enemy_defeated(&self) -> bool {
        self.enemy_hp <= 0
    }

    /// Damage the enemy deals this exchange after block.
    #[must_use]
    pub fn retaliation_damage(&self) -> i32 {
        (self.enemy_damage_per_turn - self.player_block_this_turn).max(0)
    }

    /// Append a line to the combat log.
    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push_back(line.into());
    }
}

//! Enemy templates.
//!
//! Encounters are a fixed lookup by step, not a random roll:
//!
//! | Steps | Enemy | HP | Damage |
//! |---|---|---|---|
//! | 1-3 | Goblin | 8 | 3 |
//! | 4-6 | Bandit | 10 | 4 |
//! | 7-9 | Troll | 12 | 5 |
//! | other | Shadow | 8 | 3 |
//! | boss | DRAGON LORD | 15 | 7 |

use crate::core::battle::BattleState;

/// Static enemy stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub max_hp: i32,
    pub damage_per_turn: i32,
}

impl EnemyTemplate {
    /// Start a fight against this enemy.
    #[must_use]
    pub fn spawn(&self) -> BattleState {
        BattleState::new(self.name, self.max_hp, self.damage_per_turn)
    }
}

pub const GOBLIN: EnemyTemplate = EnemyTemplate {
    name: "Goblin",
    max_hp: 8,
    damage_per_turn: 3,
};

pub const BANDIT: EnemyTemplate = EnemyTemplate {
    name: "Bandit",
    max_hp: 10,
    damage_per_turn: 4,
};

pub const TROLL: EnemyTemplate = EnemyTemplate {
    name: "Troll",
    max_hp: 12,
    damage_per_turn: 5,
};

/// Fallback for steps outside the table.
pub const SHADOW: EnemyTemplate = EnemyTemplate {
    name: "Shadow",
    max_hp: 8,
    damage_per_turn: 3,
};

pub const DRAGON_LORD: EnemyTemplate = EnemyTemplate {
    name: "DRAGON LORD",
    max_hp: 15,
    damage_per_turn: 7,
};

/// Template for a regular battle at `step`.
#[must_use]
pub const fn enemy_template_for_step(step: u8) -> EnemyTemplate {
    match step {
        1..=3 => GOBLIN,
        4..=6 => BANDIT,
        7..=9 => TROLL,
        _ => SHADOW,
    }
}

/// Fresh battle for a regular node at `step`.
#[must_use]
pub fn enemy_for_step(step: u8) -> BattleState {
    enemy_template_for_step(step).spawn()
}

/// Fresh boss battle.
#[must_use]
pub fn boss_battle() -> BattleState {
    DRAGON_LORD.spawn()
}

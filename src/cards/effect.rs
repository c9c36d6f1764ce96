//! Card effect vocabulary.
//!
//! Every card side is one `CardEffect`. Movement effects are meant for
//! side A, combat effects for side B, but nothing stops a card from carrying
//! any pair: the engine falls back to a one-step move for a non-movement
//! side A and logs "no combat effect" for a non-combat side B.

use serde::{Deserialize, Serialize};

/// One usable side of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    // === Movement ===
    /// Advance `n` steps along the path.
    MoveSteps(u8),
    /// Jump to the nearest reachable reward space.
    JumpToNextReward,

    // === Combat ===
    /// Damage the enemy.
    DealDamage(i32),
    /// Restore player HP, capped at max.
    HealHp(i32),
    /// Absorb damage from the next enemy attack.
    Block(i32),
}

impl CardEffect {
    /// Three-letter category label for card headers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            CardEffect::MoveSteps(_) | CardEffect::JumpToNextReward => "MOV",
            CardEffect::DealDamage(_) => "ATK",
            CardEffect::HealHp(_) => "HEL",
            CardEffect::Block(_) => "DEF",
        }
    }

    /// Check if this effect moves the player.
    #[must_use]
    pub const fn is_movement(&self) -> bool {
        matches!(self, CardEffect::MoveSteps(_) | CardEffect::JumpToNextReward)
    }

    /// Check if this effect does something in a fight.
    #[must_use]
    pub const fn is_combat(&self) -> bool {
        matches!(
            self,
            CardEffect::DealDamage(_) | CardEffect::HealHp(_) | CardEffect::Block(_)
        )
    }
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardEffect::MoveSteps(n) => write!(f, "Move {n}"),
            CardEffect::JumpToNextReward => write!(f, "Jump->Rwd"),
            CardEffect::DealDamage(n) => write!(f, "Deal {n}dmg"),
            CardEffect::HealHp(n) => write!(f, "Heal {n}HP"),
            CardEffect::Block(n) => write!(f, "Block {n}"),
        }
    }
}

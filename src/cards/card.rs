//! Two-sided cards.
//!
//! A card is an immutable value: an id, a display name, a cosmetic rarity
//! and two effects. Playing a card commits to exactly one side; the card then
//! goes to the discard pile either way.

use serde::{Deserialize, Serialize};

use super::effect::CardEffect;
use crate::core::ids::CardId;

/// Cosmetic rarity tier. Has no mechanical effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Star string shown on the card face.
    #[must_use]
    pub const fn stars(self) -> &'static str {
        match self {
            Rarity::Common => "*",
            Rarity::Uncommon => "**",
            Rarity::Rare => "***",
            Rarity::Legendary => "****",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        };
        f.write_str(name)
    }
}

/// A physical card in the run.
///
/// ## Example
///
/// ```
/// use card_quest::cards::{Card, CardEffect, Rarity};
/// use card_quest::core::CardId;
///
/// let blade = Card::new(
///     CardId::new(1),
///     "Quick Blade",
///     Rarity::Common,
///     CardEffect::MoveSteps(2),
///     CardEffect::DealDamage(5),
/// );
///
/// assert_eq!(blade.side_b, CardEffect::DealDamage(5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique per instance.
    pub id: CardId,

    /// Display name, shared by all copies of a template.
    pub name: String,

    pub rarity: Rarity,

    /// Conventionally the movement side.
    pub side_a: CardEffect,

    /// Conventionally the combat side.
    pub side_b: CardEffect,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        rarity: Rarity,
        side_a: CardEffect,
        side_b: CardEffect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rarity,
            side_a,
            side_b,
        }
    }
}

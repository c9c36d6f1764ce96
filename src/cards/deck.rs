//! Starting deck factory.
//!
//! The deck is a fixed recipe of seven templates. [`make_deck`] stamps out
//! fresh instances, so every copy of a template gets its own `CardId`.

use super::card::{Card, Rarity};
use super::effect::CardEffect;
use crate::core::ids::IdAllocator;

/// One line of the deck recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckEntry {
    pub count: usize,
    pub name: &'static str,
    pub rarity: Rarity,
    pub side_a: CardEffect,
    pub side_b: CardEffect,
}

/// The starting deck recipe.
pub const STARTING_DECK: [DeckEntry; 7] = [
    DeckEntry {
        count: 5,
        name: "Weak Strike",
        rarity: Rarity::Common,
        side_a: CardEffect::MoveSteps(1),
        side_b: CardEffect::DealDamage(3),
    },
    DeckEntry {
        count: 4,
        name: "Quick Blade",
        rarity: Rarity::Common,
        side_a: CardEffect::MoveSteps(2),
        side_b: CardEffect::DealDamage(5),
    },
    DeckEntry {
        count: 3,
        name: "Swift Healer",
        rarity: Rarity::Uncommon,
        side_a: CardEffect::MoveSteps(3),
        side_b: CardEffect::HealHp(4),
    },
    DeckEntry {
        count: 3,
        name: "Shield Creep",
        rarity: Rarity::Uncommon,
        side_a: CardEffect::MoveSteps(1),
        side_b: CardEffect::Block(4),
    },
    DeckEntry {
        count: 2,
        name: "Vaulter",
        rarity: Rarity::Rare,
        side_a: CardEffect::JumpToNextReward,
        side_b: CardEffect::DealDamage(8),
    },
    DeckEntry {
        count: 2,
        name: "Mend Runner",
        rarity: Rarity::Rare,
        side_a: CardEffect::MoveSteps(2),
        side_b: CardEffect::HealHp(6),
    },
    DeckEntry {
        count: 1,
        name: "Legend's Charge",
        rarity: Rarity::Legendary,
        side_a: CardEffect::MoveSteps(4),
        side_b: CardEffect::DealDamage(12),
    },
];

/// Number of cards [`make_deck`] produces.
pub const DECK_SIZE: usize = recipe_size(&STARTING_DECK);

const fn recipe_size(recipe: &[DeckEntry]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < recipe.len() {
        total += recipe[i].count;
        i += 1;
    }
    total
}

/// Build the unshuffled starting deck in recipe order.
pub fn make_deck(ids: &mut IdAllocator) -> Vec<Card> {
    STARTING_DECK
        .iter()
        .flat_map(|entry| std::iter::repeat(entry).take(entry.count))
        .map(|entry| {
            Card::new(
                ids.next_card(),
                entry.name,
                entry.rarity,
                entry.side_a,
                entry.side_b,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_deck_size() {
        let deck = make_deck(&mut IdAllocator::new());
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(DECK_SIZE, 20);
        assert_eq!(STARTING_DECK.iter().map(|e| e.count).sum::<usize>(), DECK_SIZE);
    }

    #[test]
    fn test_ids_are_unique_per_instance() {
        let deck = make_deck(&mut IdAllocator::new());
        let ids: FxHashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_template_counts() {
        let deck = make_deck(&mut IdAllocator::new());
        let count = |name: &str| deck.iter().filter(|c| c.name == name).count();

        assert_eq!(count("Weak Strike"), 5);
        assert_eq!(count("Quick Blade"), 4);
        assert_eq!(count("Swift Healer"), 3);
        assert_eq!(count("Shield Creep"), 3);
        assert_eq!(count("Vaulter"), 2);
        assert_eq!(count("Mend Runner"), 2);
        assert_eq!(count("Legend's Charge"), 1);
    }

    #[test]
    fn test_sides_match_recipe() {
        let deck = make_deck(&mut IdAllocator::new());

        let vaulter = deck.iter().find(|c| c.name == "Vaulter").unwrap();
        assert_eq!(vaulter.side_a, CardEffect::JumpToNextReward);
        assert_eq!(vaulter.side_b, CardEffect::DealDamage(8));
        assert_eq!(vaulter.rarity, Rarity::Rare);

        let legend = deck.iter().find(|c| c.name == "Legend's Charge").unwrap();
        assert_eq!(legend.side_a, CardEffect::MoveSteps(4));
        assert_eq!(legend.side_b, CardEffect::DealDamage(12));
        assert_eq!(legend.rarity, Rarity::Legendary);
    }

    #[test]
    fn test_fresh_instances_per_call() {
        let mut ids = IdAllocator::new();
        let first = make_deck(&mut ids);
        let second = make_deck(&mut ids);

        assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));
    }
}

//! Card system: effects, cards, and the starting deck.
//!
//! ## Key Types
//!
//! - `CardEffect`: What one side of a card does
//! - `Rarity`: Cosmetic tier
//! - `Card`: Immutable two-sided card instance
//! - `make_deck`: Deck factory for the fixed 20-card starting deck

pub mod card;
pub mod deck;
pub mod effect;

pub use card::{Card, Rarity};
pub use deck::{make_deck, DeckEntry, DECK_SIZE, STARTING_DECK};
pub use effect::CardEffect;

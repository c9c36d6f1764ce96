//! Card locations.
//!
//! The run has four fixed piles (hand, draw pile, discard pile, reward
//! choices). `CardPiles` owns them and implements every card movement the
//! engine needs: dealing, discarding, drawing with reshuffle, and the
//! battle reward pool.

pub mod piles;

pub use piles::{CardPiles, Pile};

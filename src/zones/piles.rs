//! Card piles: hand, draw pile, discard pile, and the reward pool.
//!
//! Cards are only ever *moved* between piles; nothing here creates or
//! destroys a card, so `total()` stays at the deck size for a whole run.
//!
//! The front of `draw_pile` is its top: draws and reward pools take from the
//! front, reshuffled discards are appended at the back.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ids::CardId;
use crate::core::rng::GameRng;

/// Named pile, for lookups and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Hand,
    DrawPile,
    DiscardPile,
    RewardChoices,
}

/// Every card of the run, split across the four piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPiles {
    pub hand: Vector<Card>,
    pub draw_pile: Vector<Card>,
    pub discard_pile: Vector<Card>,
    pub reward_choices: Vector<Card>,
}

impl CardPiles {
    /// Deal the first `hand_size` cards of an already shuffled deck into the
    /// hand; the rest becomes the draw pile.
    #[must_use]
    pub fn deal(deck: Vec<Card>, hand_size: usize) -> Self {
        let mut draw_pile: Vector<Card> = deck.into_iter().collect();
        let hand = draw_pile.slice(..hand_size.min(draw_pile.len()));
        Self {
            hand,
            draw_pile,
            discard_pile: Vector::new(),
            reward_choices: Vector::new(),
        }
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.hand.len() + self.draw_pile.len() + self.discard_pile.len() + self.reward_choices.len()
    }

    /// Borrow a pile by name.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &Vector<Card> {
        match pile {
            Pile::Hand => &self.hand,
            Pile::DrawPile => &self.draw_pile,
            Pile::DiscardPile => &self.discard_pile,
            Pile::RewardChoices => &self.reward_choices,
        }
    }

    /// Which pile holds `id`.
    #[must_use]
    pub fn locate(&self, id: CardId) -> Option<Pile> {
        [Pile::Hand, Pile::DrawPile, Pile::DiscardPile, Pile::RewardChoices]
            .into_iter()
            .find(|&pile| self.pile(pile).iter().any(|c| c.id == id))
    }

    /// Find a card in hand.
    #[must_use]
    pub fn find_in_hand(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Remove a card from the hand.
    pub fn take_from_hand(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Move a card from the hand to the discard pile.
    pub fn discard_from_hand(&mut self, id: CardId) -> Option<Card> {
        let card = self.take_from_hand(id)?;
        self.discard_pile.push_back(card.clone());
        Some(card)
    }

    /// Shuffle the discard pile and append it under the draw pile.
    pub fn recycle_discard(&mut self, rng: &mut GameRng) {
        if self.discard_pile.is_empty() {
            return;
        }
        let recycled = rng.shuffled(std::mem::take(&mut self.discard_pile));
        tracing::trace!(cards = recycled.len(), "discard pile reshuffled into draw pile");
        self.draw_pile.append(recycled);
    }

    /// Draw the top card into the hand, recycling the discard pile first if
    /// the draw pile is empty.
    pub fn draw_to_hand(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.recycle_discard(rng);
        }
        let card = self.draw_pile.pop_front()?;
        self.hand.push_back(card.clone());
        Some(card)
    }

    /// Fill the reward pool with up to `count` cards from the top of the draw
    /// pile, recycling the discard pile first if the draw pile is short.
    ///
    /// Cards already in the pool go back to the draw pile first.
    pub fn offer_rewards(&mut self, count: usize, rng: &mut GameRng) -> usize {
        self.return_rewards(rng);
        if self.draw_pile.len() < count {
            self.recycle_discard(rng);
        }
        let taken = count.min(self.draw_pile.len());
        let rest = self.draw_pile.split_off(taken);
        self.reward_choices = std::mem::replace(&mut self.draw_pile, rest);
        taken
    }

    /// Keep one reward card; the rest of the pool is shuffled back into the
    /// draw pile.
    ///
    /// Returns `None` (and still returns the pool) when `id` is not offered.
    pub fn take_reward(&mut self, id: CardId, rng: &mut GameRng) -> Option<Card> {
        let chosen = self
            .reward_choices
            .iter()
            .position(|c| c.id == id)
            .map(|index| self.reward_choices.remove(index));
        if let Some(card) = &chosen {
            self.hand.push_back(card.clone());
        }
        self.return_rewards(rng);
        chosen
    }

    /// Shuffle the whole reward pool back into the draw pile.
    pub fn return_rewards(&mut self, rng: &mut GameRng) {
        if self.reward_choices.is_empty() {
            return;
        }
        let mut pool = std::mem::take(&mut self.draw_pile);
        pool.append(std::mem::take(&mut self.reward_choices));
        self.draw_pile = rng.shuffled(pool);
    }
}

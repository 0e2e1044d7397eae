use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::{Card, Suit};
use crate::hand::Hand;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    /// A single 52-card deck never runs out in a two-player round, so this
    /// marks a logic error in the caller. The round must be abandoned, not
    /// retried.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

/// A single 52-card deck plus the state of its random number stream.
///
/// The deck is created fresh per round and only ever shrinks. Removal is
/// ordered (`Vec::remove`) so the undrawn portion keeps a stable order for
/// inspection; the order carries no meaning for play, all randomness comes
/// from the drawn index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    seed: u64,
}

impl Deck {
    /// All 52 rank and suit combinations, exactly once each.
    pub fn standard(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards, seed }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove one uniformly random card and append it to `hand`.
    ///
    /// Round state crosses the wasm boundary between draws, so instead of
    /// holding a live generator the deck re-seeds a `SmallRng` per draw and
    /// stores the advanced seed back. Draws stay deterministic for a given
    /// starting seed.
    pub fn draw(&mut self, hand: &mut Hand) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let index = rng.gen_range(0..self.cards.len());
        self.seed = rng.gen();
        let card = self.cards.remove(index);
        hand.push(card);
        Ok(card)
    }
}

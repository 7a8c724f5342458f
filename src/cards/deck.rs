//! Shared draw pile.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::Hexagram;

/// Face-down pile of hexagram cards. The top card is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<Hexagram>,
}

impl DrawPile {
    /// All 64 hexagrams, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<_> = Hexagram::all().collect();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// A pile in the given order; the last card is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Hexagram>) -> Self {
        Self { cards }
    }

    pub fn draw(&mut self) -> Option<Hexagram> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

//! Hexagram cards and the draw pile.
//!
//! Every card is one of the 64 hexagrams. A hexagram stacks two
//! trigrams, and a played card puts influence on either of them.

mod hexagram;
mod deck;

pub use hexagram::Hexagram;
pub use deck::DrawPile;

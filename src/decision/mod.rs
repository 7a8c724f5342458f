//! Non-human players.
//!
//! The scorer turns the engine's priority hints into scores out of 10.
//! Providers pick actions from the engine's listing.

mod scorer;
mod provider;

pub use scorer::{score, score_all, MAX_SCORE};
pub use provider::{play_turn, Decision, DecisionProvider, ScoringBot, Selection, TurnSummary};

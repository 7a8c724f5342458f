//! # tianji
//!
//! Rules core of a turn-based strategy card game built on I Ching motifs.
//! Players gather Qi, Insight and Sincerity, place influence on the eight
//! trigram zones, and invoke the thirty-six stratagems until someone
//! crosses a victory threshold or the round cap ends the game.
//!
//! ## Design Principles
//!
//! 1. **Explicit sessions**: every game is one [`ActionEngine`] owning its
//!    [`GameState`]. There is no process-wide state; the only shared value
//!    is the immutable [`StrategyCatalog`] behind an `Arc`.
//!
//! 2. **Fail closed**: `execute` validates first. A rejected action
//!    returns a failed [`ActionResult`] and mutates nothing.
//!
//! 3. **Deterministic**: all randomness flows through a seeded
//!    [`GameRng`], so a seed plus an action list replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, errors
//! - `resources`: the clamped resource ledger
//! - `board`: trigram zones, positions and derived control
//! - `cards`: the 64 hexagram cards and the draw pile
//! - `strategies`: stratagem definitions, catalog and resolver
//! - `engine`: the turn state machine, action listing and snapshots
//! - `decision`: scoring and bot decision providers
//!
//! ## Example
//!
//! ```
//! use tianji::{ActionEngine, EngineConfig};
//! use tianji::decision::{play_turn, ScoringBot};
//!
//! let mut engine = ActionEngine::with_standard_catalog(EngineConfig::new(["Wen", "Wu"])).unwrap();
//! engine.start();
//!
//! let mut bot = ScoringBot::greedy();
//! while !engine.is_finished() {
//!     play_turn(&mut engine, &mut bot);
//! }
//! assert!(engine.outcome().is_some());
//! ```

pub mod core;
pub mod resources;
pub mod board;
pub mod cards;
pub mod strategies;
pub mod engine;
pub mod decision;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, ErrorKind, GameRng, LookupKind, PlayerId, PlayerMap, VictoryConfig,
};

pub use crate::resources::{Resource, ResourceAmounts, ResourceLedger};

pub use crate::board::{BoardModel, Position, Trigram};

pub use crate::cards::{DrawPile, Hexagram};

pub use crate::strategies::{
    Category, Effect, Precondition, Strategy, StrategyCatalog, StrategyId, StrategyResolver,
    StrategyTarget, Subject,
};

pub use crate::engine::{
    Action, ActionEngine, ActionRecord, ActionResult, Delta, GameOutcome, GamePhase, GameState,
    GameStatus, LegalAction, Victory, VictoryCondition,
};

pub use crate::decision::{Decision, DecisionProvider, ScoringBot};

//! Core building blocks: seats, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{EngineConfig, VictoryConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{EngineError, ErrorKind, LookupKind};

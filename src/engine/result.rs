//! The result contract returned by every engine call.

use serde::{Deserialize, Serialize};

use crate::board::{Position, Trigram};
use crate::cards::Hexagram;
use crate::core::{EngineError, ErrorKind, PlayerId};
use crate::resources::Resource;
use crate::strategies::StrategyId;

/// Game-level phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Setup,
    MainGame,
    /// Round cap reached; the next advance finishes the game.
    EndGame,
    Finished,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::MainGame => "main game",
            GamePhase::EndGame => "end game",
            GamePhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// A single observable state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Delta {
    Resource {
        player: PlayerId,
        resource: Resource,
        before: u32,
        after: u32,
    },
    Balance {
        player: PlayerId,
        before: f64,
        after: f64,
    },
    Influence {
        zone: Trigram,
        player: PlayerId,
        /// Marker count after the change.
        markers: u32,
        controller: Option<PlayerId>,
    },
    Position {
        player: PlayerId,
        from: Position,
        to: Position,
    },
    CardPlayed {
        player: PlayerId,
        card: Hexagram,
        zone: Trigram,
    },
    CardDrawn {
        player: PlayerId,
        card: Hexagram,
    },
    Cooldown {
        player: PlayerId,
        strategy: StrategyId,
        turns: u32,
    },
    Note {
        player: PlayerId,
        text: String,
    },
}

/// Outcome of `execute` or `advance_turn`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    /// Changes made, in order. Empty on failure.
    pub effects: Vec<Delta>,
    /// Set when a game-phase boundary was crossed.
    pub next_phase: Option<GamePhase>,
    /// Category of the failure, when `success` is false.
    pub error: Option<ErrorKind>,
}

impl ActionResult {
    #[must_use]
    pub fn ok(message: impl Into<String>, effects: Vec<Delta>) -> Self {
        Self {
            success: true,
            message: message.into(),
            effects,
            next_phase: None,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(err: &EngineError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            effects: Vec::new(),
            next_phase: None,
            error: Some(err.kind()),
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: GamePhase) -> Self {
        self.next_phase = Some(phase);
        self
    }
}

impl From<Result<ActionResult, EngineError>> for ActionResult {
    fn from(result: Result<ActionResult, EngineError>) -> Self {
        result.unwrap_or_else(|err| ActionResult::failure(&err))
    }
}

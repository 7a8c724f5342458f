//! Serializable game-status snapshots.
//!
//! A [`GameStatus`] is what outside collaborators (save files, scoreboards,
//! UIs) read after each call. `encode` / `decode` give a compact bincode
//! form; the layout itself is owned by those collaborators.

use serde::{Deserialize, Serialize};

use crate::board::{Position, Trigram};
use crate::core::{EngineError, PlayerId};
use crate::resources::Resource;
use crate::strategies::StrategyId;

use super::result::GamePhase;
use super::session::{ActionEngine, GameOutcome};

/// Public view of one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub id: PlayerId,
    pub name: String,
    pub qi: u32,
    pub insight: u32,
    pub sincerity: u32,
    pub balance: f64,
    pub position: Position,
    pub hand_size: usize,
    pub controlled_zones: Vec<Trigram>,
    /// Running cooldowns, by strategy id.
    pub cooldowns: Vec<(StrategyId, u32)>,
    pub actions_remaining: u32,
    pub score: u32,
}

/// Markers and controller of one zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneStatus {
    pub zone: Trigram,
    /// Marker counts in seat order.
    pub markers: Vec<u32>,
    pub controller: Option<PlayerId>,
}

/// Snapshot of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStatus {
    pub phase: GamePhase,
    pub round: u32,
    pub max_rounds: u32,
    pub current: PlayerId,
    pub players: Vec<PlayerStatus>,
    pub board: Vec<ZoneStatus>,
    pub deck_size: usize,
    pub outcome: Option<GameOutcome>,
}

impl GameStatus {
    #[must_use]
    pub fn capture(engine: &ActionEngine) -> Self {
        let state = engine.state();

        let players = state
            .players
            .iter()
            .map(|(id, player)| {
                let mut cooldowns: Vec<_> = player
                    .cooldowns
                    .iter()
                    .map(|(&strategy, &turns)| (strategy, turns))
                    .collect();
                cooldowns.sort_unstable();

                PlayerStatus {
                    id,
                    name: player.name.clone(),
                    qi: state.ledger.get(id, Resource::Qi),
                    insight: state.ledger.get(id, Resource::Insight),
                    sincerity: state.ledger.get(id, Resource::Sincerity),
                    balance: state.ledger.balance(id),
                    position: player.position,
                    hand_size: player.hand.len(),
                    controlled_zones: state.board.controlled_zones(id),
                    cooldowns,
                    actions_remaining: player.actions_remaining,
                    score: state.score(id),
                }
            })
            .collect();

        let board = state
            .board
            .zones()
            .map(|zone| ZoneStatus {
                zone: zone.trigram(),
                markers: zone.all_markers().iter().map(|(_, &n)| n).collect(),
                controller: zone.controller(),
            })
            .collect();

        Self {
            phase: engine.phase(),
            round: state.round,
            max_rounds: engine.config().max_rounds,
            current: state.current,
            players,
            board,
            deck_size: state.deck.len(),
            outcome: engine.outcome().copied(),
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerStatus> {
        self.players.get(id.index())
    }

    pub fn encode(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

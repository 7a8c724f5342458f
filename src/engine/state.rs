//! Game state owned by one engine session.
//!
//! ## Player
//!
//! Per-seat data that is not a resource: name, position, hand,
//! cooldowns, strategy history and per-turn flags. Resource pools and
//! balance live in the [`ResourceLedger`].
//!
//! ## GameState
//!
//! Players, ledger, board, draw pile, turn pointer, round counter and
//! the session RNG. Mutated only by the engine and the strategy resolver.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{BoardModel, Position};
use crate::cards::{DrawPile, Hexagram};
use crate::core::{EngineConfig, GameRng, PlayerId, PlayerMap};
use crate::resources::ResourceLedger;
use crate::strategies::StrategyId;

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    pub hand: Vec<Hexagram>,

    /// Strategy id -> remaining turn-advances. Absent means ready.
    pub cooldowns: FxHashMap<StrategyId, u32>,

    /// Strategies invoked, oldest first. Failed invocations included.
    pub history: Vec<StrategyId>,

    /// Notes left by strategy effects.
    pub transformations: Vec<String>,

    /// Set by a card play, cleared at the start of the player's turn.
    pub placed_influence_this_turn: bool,

    pub actions_remaining: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Position::default(),
            hand: Vec::new(),
            cooldowns: FxHashMap::default(),
            history: Vec::new(),
            transformations: Vec::new(),
            placed_influence_this_turn: false,
            actions_remaining: 0,
        }
    }

    /// Remaining cooldown, or `None` when the strategy is ready.
    #[must_use]
    pub fn cooldown(&self, id: StrategyId) -> Option<u32> {
        self.cooldowns.get(&id).copied().filter(|&turns| turns > 0)
    }

    /// Start a cooldown. Zero clears it.
    pub fn set_cooldown(&mut self, id: StrategyId, turns: u32) {
        if turns == 0 {
            self.cooldowns.remove(&id);
        } else {
            self.cooldowns.insert(id, turns);
        }
    }

    /// Count every cooldown down by one, dropping those that reach zero.
    pub fn tick_cooldowns(&mut self) {
        self.cooldowns.retain(|_, turns| {
            *turns = turns.saturating_sub(1);
            *turns > 0
        });
    }
}

/// Complete mutable state of one session.
#[derive(Clone, Debug)]
pub struct GameState {
    pub players: PlayerMap<Player>,
    pub ledger: ResourceLedger,
    pub board: BoardModel,
    pub deck: DrawPile,

    /// Whose turn it is.
    pub current: PlayerId,

    /// Round number, starting at 1. A round is one turn for every player.
    pub round: u32,

    pub rng: GameRng,
}

impl GameState {
    /// Fresh state: empty board, full shuffled pile, empty hands.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let count = config.player_count();
        let rng = GameRng::new(config.seed);
        let deck = DrawPile::shuffled(&mut rng.for_context("deck"));

        Self {
            players: PlayerMap::new(count, |p| Player::new(config.players[p.index()].clone())),
            ledger: ResourceLedger::new(
                count,
                config.caps,
                config.starting,
                config.starting_balance,
            ),
            board: BoardModel::new(count, config.zone_capacity()),
            deck,
            current: PlayerId::new(0),
            round: 1,
            rng,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Draw the top card into `player`'s hand if under `hand_limit`.
    pub fn draw_card(&mut self, player: PlayerId, hand_limit: usize) -> Option<Hexagram> {
        if self.players[player].hand.len() >= hand_limit {
            return None;
        }
        let card = self.deck.draw()?;
        self.players[player].hand.push(card);
        Some(card)
    }

    /// Tick every player's cooldowns once.
    pub fn tick_cooldowns(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.tick_cooldowns();
        }
    }

    /// Insight + Sincerity + 3 per controlled zone.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        use crate::resources::Resource;

        let zones = u32::try_from(self.board.controlled_zone_count(player)).unwrap_or(u32::MAX);
        self.ledger.get(player, Resource::Insight)
            + self.ledger.get(player, Resource::Sincerity)
            + zones.saturating_mul(3)
    }

    /// Highest score; ties go to the lower seat.
    #[must_use]
    pub fn score_leader(&self) -> PlayerId {
        // max_by_key keeps the last maximum, so compare on reversed seat.
        self.player_ids()
            .max_by_key(|&p| (self.score(p), std::cmp::Reverse(p)))
            .unwrap_or(PlayerId::new(0))
    }
}

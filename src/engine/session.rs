//! The action engine: one game session's turn state machine.
//!
//! ## Phases
//!
//! `Setup` → (`start`) → `MainGame` → (round cap) → `EndGame` → `Finished`.
//! A victory during `MainGame` goes straight to `Finished`. Actions are
//! only accepted in `MainGame`.
//!
//! ## Turn cycle
//!
//! The current player calls `execute` until they pass or run out of
//! action points, then the caller calls `advance_turn`. `execute` always
//! validates first and never mutates on failure.
//!
//! ```
//! use std::sync::Arc;
//! use tianji::core::EngineConfig;
//! use tianji::engine::{Action, ActionEngine, GamePhase};
//! use tianji::strategies::StrategyCatalog;
//!
//! let config = EngineConfig::new(["Wen", "Wu"]).with_seed(3);
//! let mut engine = ActionEngine::new(config, Arc::new(StrategyCatalog::standard())).unwrap();
//! engine.start();
//! assert_eq!(engine.phase(), GamePhase::MainGame);
//!
//! assert!(engine.execute(Action::Meditate).success);
//! assert!(engine.execute(Action::Pass).success);
//! assert!(engine.advance_turn().success);
//! assert_eq!(engine.state().current.index(), 1);
//! ```

use std::sync::Arc;

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Position, Trigram};
use crate::core::{EngineConfig, EngineError, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
use crate::resources::Resource;
use crate::strategies::{StrategyCatalog, StrategyId, StrategyResolver, StrategyTarget};

use super::action::{Action, ActionRecord};
use super::result::{ActionResult, Delta, GamePhase};
use super::state::GameState;
use super::status::GameStatus;

/// Which threshold a winner crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryCondition {
    Insight(u32),
    Sincerity(u32),
    Zones(usize),
}

impl std::fmt::Display for VictoryCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VictoryCondition::Insight(n) => write!(f, "{} Insight", n),
            VictoryCondition::Sincerity(n) => write!(f, "{} Sincerity", n),
            VictoryCondition::Zones(n) => write!(f, "control of {} zones", n),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub player: PlayerId,
    pub condition: VictoryCondition,
}

/// How a game concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Victory(Victory),
    /// Round cap reached; the score leader wins.
    RoundLimit { leader: PlayerId, score: u32 },
}

impl GameOutcome {
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match *self {
            GameOutcome::Victory(victory) => victory.player,
            GameOutcome::RoundLimit { leader, .. } => leader,
        }
    }
}

/// One game session.
#[derive(Clone, Debug)]
pub struct ActionEngine {
    config: EngineConfig,
    catalog: Arc<StrategyCatalog>,
    state: GameState,
    phase: GamePhase,
    history: Vector<ActionRecord>,
    outcome: Option<GameOutcome>,
}

impl ActionEngine {
    /// Create a session in `Setup`.
    ///
    /// Fails when the player count is outside 2..=8 or two players share a name.
    pub fn new(config: EngineConfig, catalog: Arc<StrategyCatalog>) -> Result<Self, EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&config.player_count()) {
            return Err(EngineError::validation(format!(
                "player count must be {}-{}, got {}",
                MIN_PLAYERS,
                MAX_PLAYERS,
                config.player_count()
            )));
        }

        for (i, name) in config.players.iter().enumerate() {
            if config.players[..i].contains(name) {
                return Err(EngineError::validation(format!(
                    "duplicate player name '{}'",
                    name
                )));
            }
        }

        let state = GameState::new(&config);
        Ok(Self {
            config,
            catalog,
            state,
            phase: GamePhase::Setup,
            history: Vector::new(),
            outcome: None,
        })
    }

    /// Create a session playing with the 36 standard stratagems.
    pub fn with_standard_catalog(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(config, Arc::new(StrategyCatalog::standard()))
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<StrategyCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn resolver(&self) -> StrategyResolver<'_> {
        StrategyResolver::new(&self.catalog)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for scenario setup. Bypasses validation.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Append-only action history. Cheap to clone.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current
    }

    fn name(&self, player: PlayerId) -> &str {
        &self.state.players[player].name
    }

    /// Deal starting hands and enter `MainGame`.
    pub fn start(&mut self) -> ActionResult {
        if self.phase != GamePhase::Setup {
            return ActionResult::failure(&EngineError::validation("game already started"));
        }

        let mut effects = Vec::new();
        let deal = self.config.starting_hand.min(self.config.hand_limit);
        for player in PlayerId::all(self.state.player_count()) {
            for _ in 0..deal {
                if let Some(card) = self.state.draw_card(player, self.config.hand_limit) {
                    effects.push(Delta::CardDrawn { player, card });
                }
            }
        }

        self.phase = GamePhase::MainGame;
        self.begin_turn();
        info!(
            "game started with {} players, {} begins",
            self.state.player_count(),
            self.name(self.state.current)
        );
        ActionResult::ok("game started", effects).with_phase(GamePhase::MainGame)
    }

    /// Check an action for the current player. Never mutates.
    pub fn validate(&self, action: &Action) -> Result<(), EngineError> {
        if self.phase != GamePhase::MainGame {
            return Err(EngineError::validation(format!(
                "no actions accepted during {}",
                self.phase
            )));
        }

        let player = self.state.current;
        let seat = &self.state.players[player];

        if action.spends_action_point() && seat.actions_remaining == 0 {
            return Err(EngineError::validation("no actions remaining this turn"));
        }

        match action {
            Action::PlayCard { card_index, zone } => {
                if seat.placed_influence_this_turn {
                    return Err(EngineError::validation("influence already placed this turn"));
                }
                let card = seat.hand.get(*card_index).ok_or_else(|| {
                    EngineError::validation(format!("no card at hand index {}", card_index))
                })?;
                if !card.fits(*zone) {
                    return Err(EngineError::validation(format!(
                        "{} cannot be played on {}",
                        card, zone
                    )));
                }
                Ok(())
            }
            Action::Move { to } => {
                if seat.position == *to {
                    return Err(EngineError::validation(format!("already in {}", to)));
                }
                self.require(player, Resource::Qi, 1)
            }
            Action::Study => self.require(player, Resource::Qi, 2),
            Action::Meditate | Action::Pass => Ok(()),
            Action::InvokeStrategy { strategy, target } => self
                .resolver()
                .check(&self.state, player, *strategy, target)
                .map(|_| ()),
        }
    }

    fn require(&self, player: PlayerId, resource: Resource, amount: u32) -> Result<(), EngineError> {
        if self.state.ledger.has_at_least(player, resource, amount) {
            Ok(())
        } else {
            Err(EngineError::validation(format!("needs {} {}", amount, resource)))
        }
    }

    /// Validate and perform an action for the current player.
    pub fn execute(&mut self, action: Action) -> ActionResult {
        if let Err(err) = self.validate(&action) {
            debug!("{} rejected for {}: {}", action, self.state.current, err);
            return ActionResult::failure(&err);
        }

        let player = self.state.current;
        let performed = match &action {
            Action::PlayCard { card_index, zone } => Ok(self.play_card(player, *card_index, *zone)),
            Action::Move { to } => Ok(self.move_to(player, *to)),
            Action::Study => Ok(self.study(player)),
            Action::Meditate => Ok(self.meditate(player)),
            Action::InvokeStrategy { strategy, target } => self.invoke(player, *strategy, *target),
            Action::Pass => Ok(ActionResult::ok(
                format!("{} passes", self.name(player)),
                Vec::new(),
            )),
        };
        let result = ActionResult::from(performed);
        if !result.success {
            return result;
        }

        let seat = &mut self.state.players[player];
        seat.actions_remaining = if action.spends_action_point() {
            seat.actions_remaining.saturating_sub(1)
        } else {
            0
        };

        info!("round {}: {}", self.state.round, result.message);
        self.history.push_back(ActionRecord {
            round: self.state.round,
            sequence: u32::try_from(self.history.len()).unwrap_or(u32::MAX),
            player,
            action,
        });
        result
    }

    fn adjust(&mut self, player: PlayerId, resource: Resource, delta: i64) -> Delta {
        let before = self.state.ledger.get(player, resource);
        let after = self.state.ledger.adjust(player, resource, delta);
        Delta::Resource {
            player,
            resource,
            before,
            after,
        }
    }

    fn play_card(&mut self, player: PlayerId, card_index: usize, zone: Trigram) -> ActionResult {
        let card = self.state.players[player].hand.remove(card_index);
        let markers = self.state.board.add_influence(zone, player, 1);
        self.state.players[player].placed_influence_this_turn = true;

        let effects = vec![
            Delta::CardPlayed { player, card, zone },
            Delta::Influence {
                zone,
                player,
                markers,
                controller: self.state.board.controller(zone),
            },
        ];
        ActionResult::ok(
            format!("{} played {} on {}", self.name(player), card, zone),
            effects,
        )
    }

    fn move_to(&mut self, player: PlayerId, to: Position) -> ActionResult {
        let from = std::mem::replace(&mut self.state.players[player].position, to);
        let mut effects = vec![
            Delta::Position { player, from, to },
            self.adjust(player, Resource::Qi, -1),
        ];

        let bonus = match to {
            Position::Heaven => Resource::Qi,
            Position::Humanity => Resource::Sincerity,
            Position::Earth => Resource::Insight,
        };
        effects.push(self.adjust(player, bonus, 1));

        ActionResult::ok(format!("{} moved to {}", self.name(player), to), effects)
    }

    fn study(&mut self, player: PlayerId) -> ActionResult {
        let balance = self.state.ledger.balance(player);
        let insight = if (0.4..=0.6).contains(&balance) { 2 } else { 1 };

        let mut effects = vec![
            self.adjust(player, Resource::Qi, -2),
            self.adjust(player, Resource::Insight, insight),
        ];
        if let Some(card) = self.state.draw_card(player, self.config.hand_limit) {
            effects.push(Delta::CardDrawn { player, card });
        }

        ActionResult::ok(format!("{} studied", self.name(player)), effects)
    }

    fn meditate(&mut self, player: PlayerId) -> ActionResult {
        let qi = if self.state.players[player].position == Position::Heaven { 3 } else { 2 };
        let mut effects = vec![self.adjust(player, Resource::Qi, qi)];

        let before = self.state.ledger.balance(player);
        let shift = (0.5 - before).clamp(-0.1, 0.1);
        if shift != 0.0 {
            let after = self.state.ledger.shift_balance(player, shift);
            effects.push(Delta::Balance {
                player,
                before,
                after,
            });
        }

        ActionResult::ok(format!("{} meditated", self.name(player)), effects)
    }

    fn invoke(
        &mut self,
        player: PlayerId,
        strategy: StrategyId,
        target: StrategyTarget,
    ) -> Result<ActionResult, EngineError> {
        let catalog = Arc::clone(&self.catalog);
        let resolver = StrategyResolver::new(&catalog);
        let invocation = resolver.invoke(&mut self.state, player, strategy, target)?;
        let definition = catalog.get(strategy)?;

        let message = format!(
            "{} invoked {}: {}",
            self.name(player),
            definition,
            if invocation.succeeded { "success" } else { "failed" }
        );
        Ok(ActionResult::ok(message, invocation.deltas))
    }

    /// Move the game forward one turn.
    ///
    /// Checks victory, then the round cap, then passes the turn. Wrapping
    /// back to seat 0 starts a new round and regenerates Qi.
    pub fn advance_turn(&mut self) -> ActionResult {
        match self.phase {
            GamePhase::Setup => {
                return ActionResult::failure(&EngineError::validation("game has not started"))
            }
            GamePhase::Finished => {
                return ActionResult::failure(&EngineError::validation("game is over"))
            }
            GamePhase::EndGame => {
                self.phase = GamePhase::Finished;
                info!("game finished after round {}", self.state.round);
                return ActionResult::ok(self.conclusion(), Vec::new()).with_phase(GamePhase::Finished);
            }
            GamePhase::MainGame => {}
        }

        if let Some(victory) = self.check_victory_conditions() {
            self.outcome = Some(GameOutcome::Victory(victory));
            self.phase = GamePhase::Finished;
            info!("{} wins by {}", self.name(victory.player), victory.condition);
            return ActionResult::ok(self.conclusion(), Vec::new()).with_phase(GamePhase::Finished);
        }

        if self.state.round >= self.config.max_rounds {
            let leader = self.state.score_leader();
            let score = self.state.score(leader);
            self.outcome = Some(GameOutcome::RoundLimit { leader, score });
            self.phase = GamePhase::EndGame;
            info!("round limit reached, {} leads with {}", self.name(leader), score);
            return ActionResult::ok(self.conclusion(), Vec::new()).with_phase(GamePhase::EndGame);
        }

        self.state.tick_cooldowns();
        let next = self.state.current.next(self.state.player_count());
        self.state.current = next;

        let mut effects = Vec::new();
        if next.index() == 0 {
            self.state.round += 1;
            info!("round {} begins", self.state.round);
            let regen = i64::from(self.config.regen_qi);
            for player in PlayerId::all(self.state.player_count()) {
                effects.push(self.adjust(player, Resource::Qi, regen));
            }
        }
        self.begin_turn();

        ActionResult::ok(
            format!("{}'s turn, round {}", self.name(next), self.state.round),
            effects,
        )
    }

    fn begin_turn(&mut self) {
        let seat = &mut self.state.players[self.state.current];
        seat.placed_influence_this_turn = false;
        seat.actions_remaining = self.config.actions_per_turn;
    }

    fn conclusion(&self) -> String {
        match self.outcome {
            Some(GameOutcome::Victory(victory)) => {
                format!("{} wins by {}", self.name(victory.player), victory.condition)
            }
            Some(GameOutcome::RoundLimit { leader, score }) => {
                format!("{} leads with score {}", self.name(leader), score)
            }
            None => "game over".to_string(),
        }
    }

    /// First player, in seat order, meeting any victory threshold.
    ///
    /// Per player the thresholds are checked Insight, Sincerity, then zones.
    #[must_use]
    pub fn check_victory_conditions(&self) -> Option<Victory> {
        let victory = &self.config.victory;
        let ledger = &self.state.ledger;

        self.state.player_ids().find_map(|player| {
            let condition = if let Some(n) = victory
                .insight
                .filter(|&n| ledger.has_at_least(player, Resource::Insight, n))
            {
                VictoryCondition::Insight(n)
            } else if let Some(n) = victory
                .sincerity
                .filter(|&n| ledger.has_at_least(player, Resource::Sincerity, n))
            {
                VictoryCondition::Sincerity(n)
            } else if let Some(n) = victory
                .zones
                .filter(|&n| self.state.board.controlled_zone_count(player) >= n)
            {
                VictoryCondition::Zones(n)
            } else {
                return None;
            };
            Some(Victory { player, condition })
        })
    }

    /// Serializable snapshot of the session.
    #[must_use]
    pub fn get_game_status(&self) -> GameStatus {
        GameStatus::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hexagram;
    use crate::core::{ErrorKind, VictoryConfig};
    use crate::resources::ResourceAmounts;

    fn engine(config: EngineConfig) -> ActionEngine {
        let mut engine = ActionEngine::with_standard_catalog(config).unwrap();
        engine.start();
        engine
    }

    fn two_player() -> EngineConfig {
        EngineConfig::new(["Wen", "Wu"]).with_seed(1)
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ActionEngine::with_standard_catalog(EngineConfig::new(["Wen", "Wen"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_player_count_checked_without_panic() {
        // A deserialized config skips the count assertion in `EngineConfig::new`.
        let json = serde_json::to_string(&two_player()).unwrap();

        let mut empty: EngineConfig = serde_json::from_str(&json).unwrap();
        empty.players.clear();
        let err = ActionEngine::with_standard_catalog(empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "player count must be 2-8, got 0");

        let mut solo: EngineConfig = serde_json::from_str(&json).unwrap();
        solo.players.truncate(1);
        assert!(ActionEngine::with_standard_catalog(solo).is_err());

        let mut crowded: EngineConfig = serde_json::from_str(&json).unwrap();
        crowded.players = (0..9).map(|n| format!("P{}", n)).collect();
        assert!(ActionEngine::with_standard_catalog(crowded).is_err());
    }

    #[test]
    fn test_start_deals_hands() {
        let engine = engine(two_player());
        assert_eq!(engine.phase(), GamePhase::MainGame);
        assert!(engine.state().players.iter().all(|(_, p)| p.hand.len() == 3));
        assert_eq!(engine.state().deck.len(), 58);
        assert_eq!(engine.state().current_player().actions_remaining, 3);
    }

    #[test]
    fn test_actions_rejected_before_start() {
        let mut engine = ActionEngine::with_standard_catalog(two_player()).unwrap();
        let result = engine.execute(Action::Meditate);
        assert!(!result.success);
        assert_eq!(result.error, Some(ErrorKind::Validation));
        assert!(!engine.advance_turn().success);
        assert!(engine.start().success);
        assert!(!engine.start().success);
    }

    #[test]
    fn test_play_card_once_per_turn() {
        let mut engine = engine(two_player());
        let card = engine.state().current_player().hand[0];
        let zone = card.upper();

        let result = engine.execute(Action::PlayCard { card_index: 0, zone });
        assert!(result.success, "{}", result.message);
        let me = PlayerId::new(0);
        assert_eq!(engine.state().board.markers(zone, me), 1);
        assert_eq!(engine.state().current_player().hand.len(), 2);

        let second = engine.state().current_player().hand[0];
        let result = engine.execute(Action::PlayCard {
            card_index: 0,
            zone: second.lower(),
        });
        assert!(!result.success);
        assert_eq!(engine.state().current_player().hand.len(), 2);
    }

    #[test]
    fn test_play_card_wrong_zone() {
        let mut engine = engine(two_player());
        engine.state_mut().players[PlayerId::new(0)].hand = vec![Hexagram::by_number(1).unwrap()];

        let result = engine.execute(Action::PlayCard {
            card_index: 0,
            zone: Trigram::Kun,
        });
        assert!(!result.success);

        let result = engine.execute(Action::PlayCard {
            card_index: 3,
            zone: Trigram::Qian,
        });
        assert!(!result.success);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_move_costs_qi_and_grants_bonus() {
        let mut engine = engine(two_player());
        let me = PlayerId::new(0);

        let result = engine.execute(Action::Move { to: Position::Humanity });
        assert!(result.success);
        let ledger = &engine.state().ledger;
        assert_eq!(ledger.get(me, Resource::Qi), 2);
        assert_eq!(ledger.get(me, Resource::Sincerity), 1);

        let result = engine.execute(Action::Move { to: Position::Humanity });
        assert!(!result.success);
    }

    #[test]
    fn test_study_and_meditate() {
        let mut engine = engine(two_player());
        let me = PlayerId::new(0);

        assert!(engine.execute(Action::Study).success);
        assert_eq!(engine.state().ledger.get(me, Resource::Qi), 1);
        // Balance starts at 0.5, inside the bonus band.
        assert_eq!(engine.state().ledger.get(me, Resource::Insight), 2);
        assert_eq!(engine.state().current_player().hand.len(), 4);

        let result = engine.execute(Action::Study);
        assert!(!result.success);
        assert_eq!(result.message, "needs 2 Qi");

        assert!(engine.execute(Action::Meditate).success);
        assert_eq!(engine.state().ledger.get(me, Resource::Qi), 3);
    }

    #[test]
    fn test_meditate_moves_balance_toward_center() {
        let config = two_player().with_starting_balance(0.95);
        let mut engine = engine(config);
        let me = PlayerId::new(0);

        engine.execute(Action::Meditate);
        assert!((engine.state().ledger.balance(me) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_action_points_and_pass() {
        let mut engine = engine(two_player());
        for _ in 0..3 {
            assert!(engine.execute(Action::Meditate).success);
        }
        let result = engine.execute(Action::Meditate);
        assert_eq!(result.message, "no actions remaining this turn");
        assert!(engine.execute(Action::Pass).success);
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.history().back().map(|r| r.sequence), Some(3));
    }

    #[test]
    fn test_turn_wrap_regenerates() {
        let mut engine = engine(two_player());

        assert!(engine.advance_turn().success);
        assert_eq!(engine.state().round, 1);
        let result = engine.advance_turn();
        assert!(result.success);
        assert_eq!(engine.state().round, 2);
        assert_eq!(engine.current_player(), PlayerId::new(0));
        assert_eq!(result.effects.len(), 2);
        assert_eq!(engine.state().ledger.get(PlayerId::new(1), Resource::Qi), 4);
    }

    #[test]
    fn test_turn_start_resets_flag() {
        let mut engine = engine(two_player());
        let card = engine.state().current_player().hand[0];
        engine.execute(Action::PlayCard {
            card_index: 0,
            zone: card.lower(),
        });
        assert!(engine.state().current_player().placed_influence_this_turn);

        engine.advance_turn();
        engine.advance_turn();
        let seat = engine.state().current_player();
        assert!(!seat.placed_influence_this_turn);
        assert_eq!(seat.actions_remaining, 3);
    }

    #[test]
    fn test_victory_finishes_game() {
        let config = two_player().with_starting(ResourceAmounts::new(3, 19, 0));
        let mut engine = engine(config);
        assert!(engine.check_victory_conditions().is_none());

        engine.execute(Action::Study);
        let victory = engine.check_victory_conditions().unwrap();
        assert_eq!(victory.player, PlayerId::new(0));
        assert_eq!(victory.condition, VictoryCondition::Insight(20));

        let result = engine.advance_turn();
        assert_eq!(result.next_phase, Some(GamePhase::Finished));
        assert!(engine.is_finished());
        assert_eq!(engine.outcome().map(GameOutcome::winner), Some(PlayerId::new(0)));
        assert!(!engine.execute(Action::Pass).success);
        assert!(!engine.advance_turn().success);
    }

    #[test]
    fn test_round_limit_goes_through_end_game() {
        let config = two_player()
            .with_max_rounds(2)
            .with_victory(VictoryConfig::disabled());
        let mut engine = engine(config);
        engine.state_mut().ledger.adjust(PlayerId::new(1), Resource::Sincerity, 4);

        engine.advance_turn();
        engine.advance_turn();
        assert_eq!(engine.state().round, 2);

        let result = engine.advance_turn();
        assert_eq!(result.next_phase, Some(GamePhase::EndGame));
        assert_eq!(
            engine.outcome(),
            Some(&GameOutcome::RoundLimit {
                leader: PlayerId::new(1),
                score: 4
            })
        );
        assert!(!engine.execute(Action::Meditate).success);

        let result = engine.advance_turn();
        assert_eq!(result.next_phase, Some(GamePhase::Finished));
        assert!(result.message.contains("Wu"));
    }

    #[test]
    fn test_invoke_through_engine() {
        let config = two_player().with_starting(ResourceAmounts::new(5, 0, 0));
        let mut engine = engine(config);
        let id = StrategyId::new(4);

        let result = engine.execute(Action::InvokeStrategy {
            strategy: id,
            target: StrategyTarget::none(),
        });
        assert_eq!(result.error, Some(ErrorKind::Validation));

        let result = engine.execute(Action::InvokeStrategy {
            strategy: id,
            target: StrategyTarget::player(PlayerId::new(1)),
        });
        assert!(result.success);
        assert_eq!(engine.state().player(PlayerId::new(0)).history, vec![id]);
        assert!(!engine.resolver().is_available(engine.state(), PlayerId::new(0), id));

        let result = engine.execute(Action::invoke(StrategyId::new(77)));
        assert_eq!(result.error, Some(ErrorKind::NotFound));
    }
}

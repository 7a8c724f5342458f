//! Enumerating legal actions.
//!
//! Every listed action is one `validate` accepts, tagged with a static
//! priority hint in (0, 1] for decision providers.

use serde::{Deserialize, Serialize};

use crate::board::{Position, Trigram};
use crate::core::PlayerId;
use crate::resources::Resource;
use crate::strategies::{Strategy, StrategyTarget};

use super::action::Action;
use super::result::GamePhase;
use super::session::ActionEngine;

/// A legal action and how attractive it looks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegalAction {
    pub action: Action,
    pub priority: f64,
}

/// Priority of anything not worth doing but always allowed.
const PASS_PRIORITY: f64 = 0.1;

impl ActionEngine {
    /// All actions the current player may take now.
    ///
    /// Empty outside `MainGame`. `Pass` is always last.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<LegalAction> {
        if self.phase() != GamePhase::MainGame {
            return Vec::new();
        }

        let state = self.state();
        let player = state.current;
        let seat = state.current_player();
        let mut candidates = Vec::new();

        for (card_index, card) in seat.hand.iter().enumerate() {
            candidates.push(Action::PlayCard {
                card_index,
                zone: card.upper(),
            });
            if card.lower() != card.upper() {
                candidates.push(Action::PlayCard {
                    card_index,
                    zone: card.lower(),
                });
            }
        }
        candidates.extend(Position::ALL.iter().map(|&to| Action::Move { to }));
        candidates.push(Action::Study);
        candidates.push(Action::Meditate);

        let resolver = self.resolver();
        for strategy in self.catalog().iter() {
            if resolver.is_available(state, player, strategy.id) {
                candidates.extend(
                    targets(strategy, player, state.player_count()).map(|target| {
                        Action::InvokeStrategy {
                            strategy: strategy.id,
                            target,
                        }
                    }),
                );
            }
        }

        let mut legal: Vec<LegalAction> = candidates
            .into_iter()
            .filter(|action| self.validate(action).is_ok())
            .map(|action| LegalAction {
                priority: self.priority(&action),
                action,
            })
            .collect();

        legal.push(LegalAction {
            action: Action::Pass,
            priority: PASS_PRIORITY,
        });
        legal
    }

    /// Static priority hint for an action by the current player.
    #[must_use]
    pub fn priority(&self, action: &Action) -> f64 {
        let state = self.state();
        let player = state.current;
        let qi = state.ledger.get(player, Resource::Qi);

        match action {
            Action::PlayCard { zone, .. } => {
                let own = state.board.markers(*zone, player);
                let mut priority: f64 = 0.5;
                if own == 0 {
                    priority += 0.3;
                }
                if state
                    .player_ids()
                    .any(|p| p != player && state.board.markers(*zone, p) > own)
                {
                    priority += 0.2;
                }
                priority.min(1.0)
            }
            Action::Move { to } => {
                let bonus = match to {
                    Position::Heaven if qi < 5 => 0.4,
                    Position::Humanity if state.ledger.get(player, Resource::Sincerity) < 3 => 0.3,
                    Position::Earth => 0.1,
                    _ => 0.0,
                };
                f64::min(0.3 + bonus, 1.0)
            }
            Action::Study => 0.6,
            Action::Meditate => {
                if qi < 5 {
                    0.8
                } else {
                    0.2
                }
            }
            Action::InvokeStrategy { strategy, .. } => self
                .catalog()
                .get(*strategy)
                .map_or(PASS_PRIORITY, |s| 0.3 + 0.4 * s.success_rate),
            Action::Pass => PASS_PRIORITY,
        }
    }
}

/// Every target combination a strategy can be aimed at.
fn targets(
    strategy: &Strategy,
    invoker: PlayerId,
    player_count: usize,
) -> impl Iterator<Item = StrategyTarget> {
    let players: Vec<Option<PlayerId>> = if strategy.needs_target_player() {
        PlayerId::all(player_count)
            .filter(|&p| p != invoker)
            .map(Some)
            .collect()
    } else {
        vec![None]
    };
    let zones: Vec<Option<Trigram>> = if strategy.needs_target_zone() {
        Trigram::ALL.iter().copied().map(Some).collect()
    } else {
        vec![None]
    };

    players.into_iter().flat_map(move |player| {
        zones
            .clone()
            .into_iter()
            .map(move |zone| StrategyTarget { player, zone })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::engine::ActionKind;
    use crate::resources::ResourceAmounts;
    use crate::strategies::StrategyId;

    fn started(config: EngineConfig) -> ActionEngine {
        let mut engine = ActionEngine::with_standard_catalog(config).unwrap();
        engine.start();
        engine
    }

    #[test]
    fn test_not_running_lists_nothing() {
        let engine = ActionEngine::with_standard_catalog(EngineConfig::new(["A", "B"])).unwrap();
        assert!(engine.legal_actions().is_empty());
    }

    #[test]
    fn test_every_listed_action_validates() {
        let config = EngineConfig::new(["A", "B", "C"])
            .with_seed(4)
            .with_starting(ResourceAmounts::new(10, 10, 10));
        let engine = started(config);
        let legal = engine.legal_actions();

        assert!(legal.iter().all(|l| engine.validate(&l.action).is_ok()));
        assert!(legal.iter().all(|l| l.priority > 0.0 && l.priority <= 1.0));
        assert_eq!(legal.last().map(|l| &l.action), Some(&Action::Pass));
        assert!(legal.iter().any(|l| l.action.kind() == ActionKind::InvokeStrategy));
        // Already standing on Earth.
        assert!(legal.iter().all(|l| l.action != Action::Move { to: Position::Earth }));
    }

    #[test]
    fn test_targeted_strategies_expand_per_opponent() {
        let config = EngineConfig::new(["A", "B", "C"]).with_starting(ResourceAmounts::new(10, 10, 10));
        let engine = started(config);
        let pilfer = engine
            .legal_actions()
            .into_iter()
            .filter(|l| matches!(l.action, Action::InvokeStrategy { strategy, .. } if strategy == StrategyId::new(12)))
            .count();
        assert_eq!(pilfer, 2);

        let borrowed_knife = engine
            .legal_actions()
            .into_iter()
            .filter(|l| matches!(l.action, Action::InvokeStrategy { strategy, .. } if strategy == StrategyId::new(3)))
            .count();
        assert_eq!(borrowed_knife, 2 * 8);
    }

    #[test]
    fn test_low_qi_priorities() {
        let config = EngineConfig::new(["A", "B"]).with_starting(ResourceAmounts::new(1, 0, 0));
        let engine = started(config);
        let legal = engine.legal_actions();

        let meditate = legal.iter().find(|l| l.action == Action::Meditate).unwrap();
        assert_eq!(meditate.priority, 0.8);
        assert!(legal.iter().all(|l| l.action != Action::Study));

        let heaven = legal
            .iter()
            .find(|l| l.action == Action::Move { to: Position::Heaven })
            .unwrap();
        assert!((heaven.priority - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_card_priority() {
        let engine = started(EngineConfig::new(["A", "B"]).with_seed(2));
        let zone = engine.state().current_player().hand[0].upper();
        let action = Action::PlayCard { card_index: 0, zone };
        assert!((engine.priority(&action) - 0.8).abs() < 1e-9);
    }
}

//! Decision providers: anything that picks actions for a seat.
//!
//! Providers see the engine read-only and answer with a [`Decision`].
//! Opting out is a typed `NoDecision`, never a probe or a panic.

use log::debug;

use crate::core::{GameRng, PlayerId};
use crate::engine::{Action, ActionEngine, ActionResult, LegalAction};

use super::scorer::score;

/// A provider's answer.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    Act(Action),
    /// The provider has nothing to do; the caller ends the turn.
    NoDecision,
}

/// Picks actions for a player.
pub trait DecisionProvider {
    fn decide(&mut self, engine: &ActionEngine, player: PlayerId) -> Decision;
}

/// How a [`ScoringBot`] picks among scored options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Highest priority; the first listed wins ties.
    Greedy,
    /// Random, weighted by score.
    Weighted,
}

/// Scores the engine's legal actions and picks one.
#[derive(Clone, Debug)]
pub struct ScoringBot {
    selection: Selection,
    rng: GameRng,
    /// Passing counts as opting out.
    pass_as_no_decision: bool,
}

impl ScoringBot {
    #[must_use]
    pub fn greedy() -> Self {
        Self {
            selection: Selection::Greedy,
            rng: GameRng::new(0),
            pass_as_no_decision: false,
        }
    }

    #[must_use]
    pub fn weighted(seed: u64) -> Self {
        Self {
            selection: Selection::Weighted,
            rng: GameRng::new(seed).for_context("bot"),
            pass_as_no_decision: false,
        }
    }

    /// Return `NoDecision` instead of choosing `Pass`.
    #[must_use]
    pub fn opting_out_of_pass(mut self) -> Self {
        self.pass_as_no_decision = true;
        self
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Pick from a listing. `None` only for an empty listing.
    pub fn choose<'a>(&mut self, options: &'a [LegalAction]) -> Option<&'a LegalAction> {
        let priorities: Vec<f64> = options.iter().map(|o| o.priority).collect();

        let index = match self.selection {
            Selection::Greedy => options
                .iter()
                .enumerate()
                .fold(None, |best: Option<(usize, f64)>, (i, o)| match best {
                    Some((_, p)) if p >= o.priority => best,
                    _ => Some((i, o.priority)),
                })
                .map(|(i, _)| i)?,
            Selection::Weighted => {
                // f32 weights for GameRng; scores are in [0, 10].
                let weights: Vec<f32> = priorities
                    .iter()
                    .map(|&p| score(p, &priorities) as f32)
                    .collect();
                self.rng.choose_weighted(&weights).or_else(|| options.len().checked_sub(1))?
            }
        };
        options.get(index)
    }
}

impl DecisionProvider for ScoringBot {
    fn decide(&mut self, engine: &ActionEngine, player: PlayerId) -> Decision {
        if engine.current_player() != player {
            return Decision::NoDecision;
        }

        let options = engine.legal_actions();
        match self.choose(&options) {
            Some(choice) if self.pass_as_no_decision && choice.action == Action::Pass => {
                Decision::NoDecision
            }
            Some(choice) => {
                debug!("{} picks {} ({:.2})", player, choice.action, choice.priority);
                Decision::Act(choice.action.clone())
            }
            None => Decision::NoDecision,
        }
    }
}

/// What happened during one [`play_turn`].
#[derive(Clone, Debug, PartialEq)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// Results of the actions taken, in order.
    pub actions: Vec<ActionResult>,
    /// Result of the closing `advance_turn`.
    pub advance: ActionResult,
}

/// Play the current player's turn with `provider`, then advance.
///
/// Stops asking when the provider opts out, passes, runs out of action
/// points, or proposes an action the engine rejects.
pub fn play_turn(engine: &mut ActionEngine, provider: &mut dyn DecisionProvider) -> TurnSummary {
    let player = engine.current_player();
    let mut actions = Vec::new();

    // One more than the action points, so a closing pass fits.
    let limit = engine.config().actions_per_turn as usize + 1;
    for _ in 0..limit {
        let action = match provider.decide(engine, player) {
            Decision::Act(action) => action,
            Decision::NoDecision => break,
        };
        let passed = action == Action::Pass;
        let result = engine.execute(action);
        let failed = !result.success;
        actions.push(result);

        if passed || failed || engine.state().players[player].actions_remaining == 0 {
            break;
        }
    }

    TurnSummary {
        player,
        actions,
        advance: engine.advance_turn(),
    }
}

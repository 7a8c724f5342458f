//! Strategy resolution.
//!
//! ## Pipeline
//!
//! An invocation moves through these steps, in order:
//!
//! 1. **Check**: cooldown clear, every precondition holds, cost affordable,
//!    required target supplied. Any failure returns an error with nothing
//!    mutated.
//! 2. **Charge**: the full cost is paid before the roll.
//! 3. **Roll**: one uniform draw in `[0, 1)` from the session RNG, compared
//!    `< success_rate`.
//! 4. **Apply**: on success every effect runs in declared order, each one
//!    seeing the clamped result of the ones before it. On failure nothing
//!    runs.
//! 5. **Record**: cooldown set and history appended, win or lose.
//!
//! `is_available` is the read-only prefix of step 1 and is what the action
//! listing uses to enumerate legal invocations.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, LookupKind, PlayerId};
use crate::engine::{Delta, GameState};

use super::catalog::StrategyCatalog;
use super::definition::{Cost, Effect, Strategy, StrategyId, StrategyTarget};

/// Outcome of one invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub strategy: StrategyId,
    pub player: PlayerId,
    pub succeeded: bool,
    /// The uniform draw compared against the success rate.
    pub roll: f64,
    pub paid: Cost,
    /// Changes made by the cost and effects, in application order.
    pub deltas: Vec<Delta>,
    /// Cooldown now running on the strategy.
    pub cooldown: u32,
}

/// Evaluates and invokes strategies from one catalog.
#[derive(Clone, Copy, Debug)]
pub struct StrategyResolver<'a> {
    catalog: &'a StrategyCatalog,
}

impl<'a> StrategyResolver<'a> {
    #[must_use]
    pub fn new(catalog: &'a StrategyCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a StrategyCatalog {
        self.catalog
    }

    /// Whether `player` may invoke `id` right now. Unknown ids are never
    /// available. Target requirements are not considered here.
    #[must_use]
    pub fn is_available(&self, state: &GameState, player: PlayerId, id: StrategyId) -> bool {
        match self.catalog.get(id) {
            Ok(strategy) => Self::unmet(state, player, strategy).is_none(),
            Err(_) => false,
        }
    }

    /// Why `player` cannot invoke `strategy`, or `None` when they can.
    fn unmet(state: &GameState, player: PlayerId, strategy: &Strategy) -> Option<String> {
        if let Some(turns) = state.players[player].cooldown(strategy.id) {
            return Some(format!("cooling down for {} more turns", turns));
        }

        if let Some(failed) = strategy
            .preconditions
            .iter()
            .find(|p| !p.holds(state, player))
        {
            return Some(format!("requires {}", failed));
        }

        strategy
            .cost
            .iter()
            .find(|&&(resource, amount)| !state.ledger.has_at_least(player, resource, amount))
            .map(|&(resource, amount)| format!("needs {} {}", amount, resource))
    }

    /// Full read-only check of an invocation.
    ///
    /// Order: unknown id, then availability, then target requirements.
    pub fn check(
        &self,
        state: &GameState,
        player: PlayerId,
        id: StrategyId,
        target: &StrategyTarget,
    ) -> Result<&'a Strategy, EngineError> {
        let strategy = self.catalog.get(id)?;

        if let Some(reason) = Self::unmet(state, player, strategy) {
            debug!("{} cannot invoke {}: {}", player, strategy, reason);
            return Err(EngineError::InvalidAction { strategy: id });
        }

        if let Some(target_player) = target.player {
            if target_player.index() >= state.player_count() {
                return Err(EngineError::not_found(LookupKind::Player, target_player));
            }
        }

        if strategy.needs_target_player() {
            match target.player {
                None => {
                    return Err(EngineError::validation(format!(
                        "{} needs a target player",
                        strategy
                    )))
                }
                Some(p) if p == player => {
                    return Err(EngineError::validation(format!(
                        "{} cannot target its invoker",
                        strategy
                    )))
                }
                Some(_) => {}
            }
        }

        if strategy.needs_target_zone() && target.zone.is_none() {
            return Err(EngineError::validation(format!(
                "{} needs a target zone",
                strategy
            )));
        }

        Ok(strategy)
    }

    /// Invoke a strategy for `player`.
    ///
    /// Once the check passes the result is final: cost is charged, the roll
    /// is drawn, and cooldown and history are recorded whatever the outcome.
    pub fn invoke(
        &self,
        state: &mut GameState,
        player: PlayerId,
        id: StrategyId,
        target: StrategyTarget,
    ) -> Result<Invocation, EngineError> {
        let strategy = self.check(state, player, id, &target)?;
        let mut deltas = Vec::new();

        for &(resource, amount) in &strategy.cost {
            let before = state.ledger.get(player, resource);
            let after = state.ledger.adjust(player, resource, -i64::from(amount));
            deltas.push(Delta::Resource {
                player,
                resource,
                before,
                after,
            });
        }

        let roll = state.rng.roll();
        let succeeded = roll < strategy.success_rate;

        if succeeded {
            for effect in &strategy.effects {
                apply_effect(state, player, &target, effect, &mut deltas);
            }
        }

        let record = &mut state.players[player];
        record.set_cooldown(id, strategy.cooldown);
        record.history.push(id);
        if strategy.cooldown > 0 {
            deltas.push(Delta::Cooldown {
                player,
                strategy: id,
                turns: strategy.cooldown,
            });
        }

        info!(
            "{} invoked {}: {} (roll {:.3} vs {:.2})",
            player,
            strategy,
            if succeeded { "success" } else { "failure" },
            roll,
            strategy.success_rate
        );

        Ok(Invocation {
            strategy: id,
            player,
            succeeded,
            roll,
            paid: strategy.cost.clone(),
            deltas,
            cooldown: strategy.cooldown,
        })
    }
}

fn apply_effect(
    state: &mut GameState,
    invoker: PlayerId,
    target: &StrategyTarget,
    effect: &Effect,
    deltas: &mut Vec<Delta>,
) {
    match effect {
        Effect::Resource {
            subject,
            resource,
            delta,
        } => {
            let Some(player) = subject.resolve(invoker, target) else {
                return;
            };
            let before = state.ledger.get(player, *resource);
            let after = state.ledger.adjust(player, *resource, *delta);
            debug!("{} {} {} -> {}", player, resource, before, after);
            deltas.push(Delta::Resource {
                player,
                resource: *resource,
                before,
                after,
            });
        }
        Effect::Influence { subject, delta } => {
            let (Some(player), Some(zone)) = (subject.resolve(invoker, target), target.zone) else {
                return;
            };
            let markers = state.board.add_influence(zone, player, *delta);
            debug!("{} markers on {} now {}", player, zone, markers);
            deltas.push(Delta::Influence {
                zone,
                player,
                markers,
                controller: state.board.controller(zone),
            });
        }
        Effect::BalanceShift(shift) => {
            let before = state.ledger.balance(invoker);
            let after = state.ledger.shift_balance(invoker, *shift);
            deltas.push(Delta::Balance {
                player: invoker,
                before,
                after,
            });
        }
        Effect::HistoryNote(text) => {
            state.players[invoker].transformations.push(text.clone());
            deltas.push(Delta::Note {
                player: invoker,
                text: text.clone(),
            });
        }
    }
}

//! Strategy definitions: the immutable half of the stratagem system.
//!
//! A [`Strategy`] is plain data. Preconditions and effects are closed enums
//! so that evaluation and application are exhaustive matches.
//!
//! ## Example
//!
//! ```
//! use tianji::strategies::{Category, Effect, Strategy, StrategyId, Subject};
//! use tianji::resources::Resource;
//!
//! let meditate = Strategy::new(StrategyId::new(1), Category::Victory, "Meditate")
//!     .with_effect(Effect::Resource {
//!         subject: Subject::SelfPlayer,
//!         resource: Resource::Qi,
//!         delta: 2,
//!     });
//!
//! assert_eq!(meditate.cooldown, 0);
//! assert_eq!(meditate.success_rate, 1.0);
//! assert!(!meditate.needs_target_player());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Position, Trigram};
use crate::core::PlayerId;
use crate::engine::GameState;
use crate::resources::Resource;

/// Catalog id of a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StrategyId(pub u8);

impl StrategyId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The six chapters of the stratagems, six strategies each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Stratagems for when victory is in hand.
    Victory,
    /// Stratagems for confronting an evenly matched enemy.
    Enemy,
    Attack,
    /// Stratagems for confused situations.
    Chaos,
    /// Stratagems for dealing with neighbours and allies.
    Proximate,
    /// Stratagems for desperate situations.
    Defeat,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Victory,
        Category::Enemy,
        Category::Attack,
        Category::Chaos,
        Category::Proximate,
        Category::Defeat,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Victory => "victory",
            Category::Enemy => "enemy",
            Category::Attack => "attack",
            Category::Chaos => "chaos",
            Category::Proximate => "proximate",
            Category::Defeat => "defeat",
        };
        f.write_str(name)
    }
}

/// Who an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    /// The invoking player.
    SelfPlayer,
    /// The invocation's target player.
    Target,
}

impl Subject {
    /// Resolve to a seat. `None` only for `Target` without a target player.
    #[must_use]
    pub fn resolve(self, invoker: PlayerId, target: &StrategyTarget) -> Option<PlayerId> {
        match self {
            Subject::SelfPlayer => Some(invoker),
            Subject::Target => target.player,
        }
    }
}

/// A predicate over the invoker and the game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Precondition {
    ResourceAtLeast(Resource, u32),
    ResourceAtMost(Resource, u32),
    BalanceAtLeast(f64),
    BalanceAtMost(f64),
    AtPosition(Position),
    /// The table has at least this many opponents.
    MinOpponents(usize),
    ControlsAtLeast(usize),
    /// Some opponent controls more zones than the invoker.
    Trailing,
    /// The invoker controls strictly more zones than every opponent.
    Leading,
    HandAtLeast(usize),
    RoundAtLeast(u32),
}

impl Precondition {
    /// Evaluate against the current state. Never mutates.
    #[must_use]
    pub fn holds(&self, state: &GameState, player: PlayerId) -> bool {
        let ledger = &state.ledger;
        let controlled = |p| state.board.controlled_zone_count(p);
        let opponents = || state.player_ids().filter(move |&p| p != player);

        match *self {
            Precondition::ResourceAtLeast(resource, amount) => {
                ledger.has_at_least(player, resource, amount)
            }
            Precondition::ResourceAtMost(resource, amount) => ledger.get(player, resource) <= amount,
            Precondition::BalanceAtLeast(value) => ledger.balance(player) >= value,
            Precondition::BalanceAtMost(value) => ledger.balance(player) <= value,
            Precondition::AtPosition(position) => state.players[player].position == position,
            Precondition::MinOpponents(count) => state.player_count().saturating_sub(1) >= count,
            Precondition::ControlsAtLeast(count) => controlled(player) >= count,
            Precondition::Trailing => {
                let own = controlled(player);
                opponents().any(|p| controlled(p) > own)
            }
            Precondition::Leading => {
                let own = controlled(player);
                opponents().all(|p| controlled(p) < own)
            }
            Precondition::HandAtLeast(count) => state.players[player].hand.len() >= count,
            Precondition::RoundAtLeast(round) => state.round >= round,
        }
    }
}

impl std::fmt::Display for Precondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precondition::ResourceAtLeast(r, n) => write!(f, "{} at least {}", r, n),
            Precondition::ResourceAtMost(r, n) => write!(f, "{} at most {}", r, n),
            Precondition::BalanceAtLeast(v) => write!(f, "balance at least {:.2}", v),
            Precondition::BalanceAtMost(v) => write!(f, "balance at most {:.2}", v),
            Precondition::AtPosition(p) => write!(f, "standing in {}", p),
            Precondition::MinOpponents(n) => write!(f, "at least {} opponents", n),
            Precondition::ControlsAtLeast(n) => write!(f, "controls at least {} zones", n),
            Precondition::Trailing => f.write_str("an opponent controls more zones"),
            Precondition::Leading => f.write_str("controls more zones than every opponent"),
            Precondition::HandAtLeast(n) => write!(f, "at least {} cards in hand", n),
            Precondition::RoundAtLeast(n) => write!(f, "round {} or later", n),
        }
    }
}

/// One step of a successful invocation. Applied in declared order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Clamped resource change.
    Resource {
        subject: Subject,
        resource: Resource,
        delta: i64,
    },
    /// Markers on the invocation's target zone.
    Influence { subject: Subject, delta: i64 },
    /// Shift the invoker's balance metric.
    BalanceShift(f64),
    /// Append to the invoker's transformation history.
    HistoryNote(String),
}

impl Effect {
    #[must_use]
    pub fn needs_target_player(&self) -> bool {
        matches!(
            self,
            Effect::Resource {
                subject: Subject::Target,
                ..
            } | Effect::Influence {
                subject: Subject::Target,
                ..
            }
        )
    }

    #[must_use]
    pub fn needs_target_zone(&self) -> bool {
        matches!(self, Effect::Influence { .. })
    }
}

/// Who and where an invocation is aimed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyTarget {
    pub player: Option<PlayerId>,
    pub zone: Option<Trigram>,
}

impl StrategyTarget {
    /// No target.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player(player: PlayerId) -> Self {
        Self {
            player: Some(player),
            zone: None,
        }
    }

    #[must_use]
    pub fn zone(zone: Trigram) -> Self {
        Self {
            player: None,
            zone: Some(zone),
        }
    }

    #[must_use]
    pub fn with_zone(mut self, zone: Trigram) -> Self {
        self.zone = Some(zone);
        self
    }
}

/// Resource cost. Three entries cover every resource without allocating.
pub type Cost = SmallVec<[(Resource, u32); 3]>;

/// An immutable strategy definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: StrategyId,
    pub category: Category,
    pub name: String,
    pub preconditions: Vec<Precondition>,
    pub cost: Cost,
    /// Turn-advances before the strategy can be invoked again.
    pub cooldown: u32,
    /// Probability of success, in (0, 1].
    pub success_rate: f64,
    pub effects: Vec<Effect>,
}

impl Strategy {
    /// A free, always-successful strategy with no cooldown and no effects.
    #[must_use]
    pub fn new(id: StrategyId, category: Category, name: impl Into<String>) -> Self {
        Self {
            id,
            category,
            name: name.into(),
            preconditions: Vec::new(),
            cost: SmallVec::new(),
            cooldown: 0,
            success_rate: 1.0,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_precondition(mut self, precondition: Precondition) -> Self {
        self.preconditions.push(precondition);
        self
    }

    /// Add a cost entry. Entries for the same resource are merged.
    #[must_use]
    pub fn with_cost(mut self, resource: Resource, amount: u32) -> Self {
        match self.cost.iter_mut().find(|(r, _)| *r == resource) {
            Some(entry) => entry.1 += amount,
            None => self.cost.push((resource, amount)),
        }
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = turns;
        self
    }

    #[must_use]
    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = rate;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Cost of one resource (0 when not part of the cost).
    #[must_use]
    pub fn cost_of(&self, resource: Resource) -> u32 {
        self.cost
            .iter()
            .find(|(r, _)| *r == resource)
            .map_or(0, |&(_, amount)| amount)
    }

    #[must_use]
    pub fn needs_target_player(&self) -> bool {
        self.effects.iter().any(Effect::needs_target_player)
    }

    #[must_use]
    pub fn needs_target_zone(&self) -> bool {
        self.effects.iter().any(Effect::needs_target_zone)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

//! The strategy catalog.
//!
//! Built once, then shared read-only (usually behind an `Arc`) by every
//! session that plays with it.

use rustc_hash::FxHashMap;

use crate::board::Position;
use crate::core::{EngineError, LookupKind};
use crate::resources::Resource::{self, Insight, Qi, Sincerity};

use super::definition::{Category, Effect, Precondition, Strategy, StrategyId, Subject};

/// Immutable table of strategy definitions, kept in id order.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyCatalog {
    strategies: Vec<Strategy>,
    index: FxHashMap<StrategyId, usize>,
}

impl StrategyCatalog {
    /// Build a catalog from definitions.
    ///
    /// Panics on duplicate ids or a success rate outside (0, 1].
    #[must_use]
    pub fn new(strategies: impl IntoIterator<Item = Strategy>) -> Self {
        let mut strategies: Vec<Strategy> = strategies.into_iter().collect();
        strategies.sort_by_key(|s| s.id);

        let mut index = FxHashMap::default();
        for (i, strategy) in strategies.iter().enumerate() {
            assert!(
                strategy.success_rate > 0.0 && strategy.success_rate <= 1.0,
                "Success rate of {} must be in (0, 1]",
                strategy
            );
            let previous = index.insert(strategy.id, i);
            assert!(previous.is_none(), "Duplicate strategy id {}", strategy.id);
        }

        Self { strategies, index }
    }

    /// The 36 stratagems, ids 1 to 36, six per category.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_strategies())
    }

    /// Look up a strategy.
    pub fn get(&self, id: StrategyId) -> Result<&Strategy, EngineError> {
        self.index
            .get(&id)
            .map(|&i| &self.strategies[i])
            .ok_or_else(|| EngineError::not_found(LookupKind::Strategy, id))
    }

    #[must_use]
    pub fn contains(&self, id: StrategyId) -> bool {
        self.index.contains_key(&id)
    }

    /// Strategies of one category, in id order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Strategy> {
        self.strategies
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Find a strategy by its name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Strategy> {
        self.strategies
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

fn gain(resource: Resource, delta: i64) -> Effect {
    Effect::Resource {
        subject: Subject::SelfPlayer,
        resource,
        delta,
    }
}

fn drain(resource: Resource, delta: i64) -> Effect {
    Effect::Resource {
        subject: Subject::Target,
        resource,
        delta: -delta,
    }
}

fn place(delta: i64) -> Effect {
    Effect::Influence {
        subject: Subject::SelfPlayer,
        delta,
    }
}

fn uproot(delta: i64) -> Effect {
    Effect::Influence {
        subject: Subject::Target,
        delta: -delta,
    }
}

fn note(text: &str) -> Effect {
    Effect::HistoryNote(text.to_string())
}

fn strategy(id: u8, category: Category, name: &str, cooldown: u32, success_rate: f64) -> Strategy {
    Strategy::new(StrategyId::new(id), category, name)
        .with_cooldown(cooldown)
        .with_success_rate(success_rate)
}

#[rustfmt::skip]
fn standard_strategies() -> Vec<Strategy> {
    use super::definition::Category::*;

    vec![
        // Victory
        strategy(1, Victory, "Cross the Sea Under Camouflage", 5, 0.7)
            .with_cost(Qi, 2).with_cost(Insight, 1)
            .with_precondition(Precondition::BalanceAtLeast(0.3))
            .with_effect(gain(Insight, 2))
            .with_effect(note("hid true intent")),
        strategy(2, Victory, "Besiege Wei to Rescue Zhao", 4, 0.65)
            .with_cost(Qi, 3).with_cost(Insight, 2)
            .with_effect(drain(Qi, 2))
            .with_effect(gain(Qi, 1)),
        strategy(3, Victory, "Kill with a Borrowed Knife", 6, 0.6)
            .with_cost(Qi, 3).with_cost(Sincerity, 1)
            .with_precondition(Precondition::MinOpponents(1))
            .with_effect(uproot(2)),
        strategy(4, Victory, "Wait at Leisure While the Enemy Labors", 3, 0.8)
            .with_cost(Qi, 2)
            .with_effect(gain(Qi, 3))
            .with_effect(drain(Qi, 1)),
        strategy(5, Victory, "Loot a Burning House", 4, 0.75)
            .with_cost(Qi, 2).with_cost(Insight, 2)
            .with_precondition(Precondition::RoundAtLeast(3))
            .with_effect(drain(Insight, 2))
            .with_effect(gain(Insight, 2)),
        strategy(6, Victory, "Make a Sound in the East, Strike in the West", 5, 0.7)
            .with_cost(Qi, 3).with_cost(Insight, 1)
            .with_effect(place(2)),

        // Enemy
        strategy(7, Enemy, "Create Something from Nothing", 6, 0.6)
            .with_cost(Qi, 3).with_cost(Insight, 2)
            .with_precondition(Precondition::ResourceAtMost(Insight, 12))
            .with_effect(gain(Insight, 4)),
        strategy(8, Enemy, "Openly Repair the Walkway, Secretly March to Chencang", 7, 0.65)
            .with_cost(Qi, 4).with_cost(Insight, 2)
            .with_effect(place(2))
            .with_effect(note("struck by a hidden route")),
        strategy(9, Enemy, "Watch the Fire from Across the River", 2, 0.9)
            .with_cost(Qi, 1)
            .with_precondition(Precondition::Trailing)
            .with_effect(gain(Sincerity, 1))
            .with_effect(Effect::BalanceShift(0.05)),
        strategy(10, Enemy, "Hide a Knife Behind a Smile", 8, 0.8)
            .with_cost(Qi, 4).with_cost(Sincerity, 2)
            .with_effect(drain(Sincerity, 3))
            .with_effect(uproot(1)),
        strategy(11, Enemy, "Sacrifice the Plum Tree for the Peach", 4, 0.85)
            .with_cost(Qi, 1).with_cost(Insight, 1)
            .with_effect(gain(Sincerity, 2)),
        strategy(12, Enemy, "Take the Opportunity to Pilfer a Goat", 1, 0.95)
            .with_cost(Qi, 1)
            .with_effect(drain(Qi, 1))
            .with_effect(gain(Qi, 1)),

        // Attack
        strategy(13, Attack, "Beat the Grass to Startle the Snake", 3, 0.8)
            .with_cost(Qi, 2).with_cost(Insight, 1)
            .with_effect(drain(Insight, 1))
            .with_effect(gain(Insight, 2)),
        strategy(14, Attack, "Borrow a Corpse to Resurrect the Soul", 5, 0.7)
            .with_cost(Qi, 3).with_cost(Insight, 2)
            .with_precondition(Precondition::ResourceAtMost(Sincerity, 5))
            .with_effect(gain(Qi, 2))
            .with_effect(gain(Sincerity, 2)),
        strategy(15, Attack, "Lure the Tiger off the Mountain", 6, 0.65)
            .with_cost(Qi, 3).with_cost(Insight, 2)
            .with_effect(uproot(2))
            .with_effect(place(1)),
        strategy(16, Attack, "In Order to Capture, One Must Let Loose", 7, 0.6)
            .with_cost(Qi, 4).with_cost(Insight, 3)
            .with_effect(drain(Qi, 3))
            .with_effect(gain(Insight, 3)),
        strategy(17, Attack, "Tossing Out a Brick to Get a Jade Gem", 4, 0.75)
            .with_cost(Qi, 2)
            .with_precondition(Precondition::HandAtLeast(1))
            .with_effect(gain(Insight, 3)),
        strategy(18, Attack, "Defeat the Enemy by Capturing Their Chief", 8, 0.55)
            .with_cost(Qi, 5).with_cost(Insight, 3)
            .with_precondition(Precondition::Trailing)
            .with_effect(uproot(3))
            .with_effect(place(2)),

        // Chaos
        strategy(19, Chaos, "Remove the Firewood from Under the Pot", 7, 0.6)
            .with_cost(Qi, 4).with_cost(Insight, 3)
            .with_effect(drain(Qi, 4))
            .with_effect(drain(Insight, 1)),
        strategy(20, Chaos, "Disturb the Water and Catch a Fish", 4, 0.8)
            .with_cost(Qi, 2).with_cost(Insight, 2)
            .with_precondition(Precondition::MinOpponents(2))
            .with_effect(gain(Qi, 1))
            .with_effect(gain(Insight, 3)),
        strategy(21, Chaos, "Slough Off the Cicada's Golden Shell", 6, 0.75)
            .with_cost(Qi, 3).with_cost(Insight, 2)
            .with_effect(gain(Qi, 2))
            .with_effect(gain(Sincerity, 1))
            .with_effect(note("withdrew intact")),
        strategy(22, Chaos, "Shut the Door to Catch the Thief", 6, 0.7)
            .with_cost(Qi, 4).with_cost(Insight, 3)
            .with_precondition(Precondition::ControlsAtLeast(1))
            .with_effect(place(2)),
        strategy(23, Chaos, "Befriend a Distant State While Attacking a Neighbour", 5, 0.65)
            .with_cost(Qi, 3).with_cost(Sincerity, 2)
            .with_precondition(Precondition::MinOpponents(2))
            .with_effect(gain(Sincerity, 3))
            .with_effect(drain(Sincerity, 1)),
        strategy(24, Chaos, "Obtain Safe Passage to Conquer the State of Guo", 7, 0.6)
            .with_cost(Qi, 4).with_cost(Insight, 2)
            .with_effect(place(1))
            .with_effect(drain(Qi, 2)),

        // Proximate
        strategy(25, Proximate, "Replace the Beams with Rotten Timbers", 8, 0.55)
            .with_cost(Qi, 5).with_cost(Insight, 3)
            .with_effect(uproot(2))
            .with_effect(gain(Insight, 2)),
        strategy(26, Proximate, "Point at the Mulberry Tree While Cursing the Locust Tree", 3, 0.85)
            .with_cost(Qi, 2).with_cost(Sincerity, 1)
            .with_effect(drain(Sincerity, 2)),
        strategy(27, Proximate, "Feign Madness but Keep Your Balance", 4, 0.9)
            .with_cost(Qi, 2).with_cost(Sincerity, 2)
            .with_precondition(Precondition::BalanceAtLeast(0.3))
            .with_precondition(Precondition::BalanceAtMost(0.7))
            .with_effect(gain(Qi, 2))
            .with_effect(gain(Insight, 2)),
        strategy(28, Proximate, "Remove the Ladder When the Enemy Has Ascended", 6, 0.65)
            .with_cost(Qi, 4).with_cost(Insight, 3)
            .with_precondition(Precondition::AtPosition(Position::Heaven))
            .with_effect(drain(Qi, 3))
            .with_effect(place(1)),
        strategy(29, Proximate, "Deck the Tree with False Blossoms", 5, 0.7)
            .with_cost(Qi, 3).with_cost(Insight, 2)
            .with_precondition(Precondition::Trailing)
            .with_effect(gain(Sincerity, 2))
            .with_effect(place(1)),
        strategy(30, Proximate, "Make the Host and the Guest Exchange Roles", 9, 0.5)
            .with_cost(Qi, 5).with_cost(Insight, 4)
            .with_precondition(Precondition::Trailing)
            .with_precondition(Precondition::RoundAtLeast(4))
            .with_effect(uproot(2))
            .with_effect(place(2))
            .with_effect(note("seized the initiative")),

        // Defeat
        strategy(31, Defeat, "The Beauty Trap", 8, 0.6)
            .with_cost(Qi, 4).with_cost(Sincerity, 3)
            .with_effect(drain(Insight, 3))
            .with_effect(gain(Insight, 2)),
        strategy(32, Defeat, "The Empty Fort Strategy", 7, 0.4)
            .with_cost(Qi, 3).with_cost(Insight, 3)
            .with_precondition(Precondition::Trailing)
            .with_effect(gain(Qi, 4))
            .with_effect(gain(Sincerity, 3)),
        strategy(33, Defeat, "Let the Enemy's Own Spy Sow Discord", 8, 0.55)
            .with_cost(Qi, 5).with_cost(Insight, 3)
            .with_effect(drain(Sincerity, 3))
            .with_effect(uproot(1)),
        strategy(34, Defeat, "Inflict Injury on Oneself to Win Trust", 10, 0.8)
            .with_cost(Qi, 2)
            .with_effect(gain(Qi, -2))
            .with_effect(gain(Sincerity, 4)),
        strategy(35, Defeat, "Chain Stratagems", 12, 0.45)
            .with_cost(Qi, 6).with_cost(Insight, 4)
            .with_precondition(Precondition::ControlsAtLeast(1))
            .with_effect(place(2))
            .with_effect(drain(Qi, 2))
            .with_effect(drain(Insight, 2)),
        strategy(36, Defeat, "If All Else Fails, Retreat", 2, 0.95)
            .with_cost(Qi, 1).with_cost(Sincerity, 2)
            .with_effect(gain(Qi, 2))
            .with_effect(Effect::BalanceShift(-0.05)),
    ]
}

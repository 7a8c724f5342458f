//! The resource ledger.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// One of the three bounded resource pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    /// Vigor, spent by movement, study and most stratagems.
    Qi,
    /// Accumulated understanding (dao xing). A victory resource.
    Insight,
    /// Earnestness (cheng yi). A victory resource.
    Sincerity,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Qi, Resource::Insight, Resource::Sincerity];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Qi => "Qi",
            Resource::Insight => "Insight",
            Resource::Sincerity => "Sincerity",
        };
        f.write_str(name)
    }
}

/// One amount per resource. Used for caps, starting pools and live pools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAmounts {
    pub qi: u32,
    pub insight: u32,
    pub sincerity: u32,
}

impl ResourceAmounts {
    #[must_use]
    pub const fn new(qi: u32, insight: u32, sincerity: u32) -> Self {
        Self {
            qi,
            insight,
            sincerity,
        }
    }

    #[must_use]
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Qi => self.qi,
            Resource::Insight => self.insight,
            Resource::Sincerity => self.sincerity,
        }
    }

    fn slot(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Qi => &mut self.qi,
            Resource::Insight => &mut self.insight,
            Resource::Sincerity => &mut self.sincerity,
        }
    }
}

/// A single player's pools and balance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub amounts: ResourceAmounts,
    /// 0.0 is fully yin, 1.0 fully yang.
    pub balance: f64,
}

/// Clamped resource storage for every seat.
///
/// All writes go through [`ResourceLedger::adjust`] and
/// [`ResourceLedger::shift_balance`], so no pool ever leaves `[0, cap]`
/// and the balance never leaves `[0, 1]`.
///
/// ```
/// use tianji::core::PlayerId;
/// use tianji::resources::{Resource, ResourceAmounts, ResourceLedger};
///
/// let mut ledger = ResourceLedger::new(2, ResourceAmounts::new(10, 25, 20), ResourceAmounts::new(1, 0, 0), 0.5);
/// let p = PlayerId::new(0);
///
/// assert_eq!(ledger.adjust(p, Resource::Qi, 20), 10);
/// assert_eq!(ledger.adjust(p, Resource::Qi, -50), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceLedger {
    caps: ResourceAmounts,
    pools: PlayerMap<ResourcePool>,
}

impl ResourceLedger {
    /// Create a ledger where every seat starts from `starting`.
    ///
    /// Starting values above a cap are clamped.
    #[must_use]
    pub fn new(player_count: usize, caps: ResourceAmounts, starting: ResourceAmounts, balance: f64) -> Self {
        let mut start = ResourceAmounts::default();
        for resource in Resource::ALL {
            *start.slot(resource) = starting.get(resource).min(caps.get(resource));
        }

        let pool = ResourcePool {
            amounts: start,
            balance: balance.clamp(0.0, 1.0),
        };

        Self {
            caps,
            pools: PlayerMap::with_value(player_count, pool),
        }
    }

    #[must_use]
    pub fn caps(&self) -> ResourceAmounts {
        self.caps
    }

    #[must_use]
    pub fn cap(&self, resource: Resource) -> u32 {
        self.caps.get(resource)
    }

    #[must_use]
    pub fn pool(&self, player: PlayerId) -> &ResourcePool {
        &self.pools[player]
    }

    /// Current amount of a resource.
    #[must_use]
    pub fn get(&self, player: PlayerId, resource: Resource) -> u32 {
        self.pools[player].amounts.get(resource)
    }

    #[must_use]
    pub fn balance(&self, player: PlayerId) -> f64 {
        self.pools[player].balance
    }

    /// Add `delta` (possibly negative), saturating at `0` and the cap.
    ///
    /// Returns the new value.
    pub fn adjust(&mut self, player: PlayerId, resource: Resource, delta: i64) -> u32 {
        let cap = i64::from(self.caps.get(resource));
        let slot = self.pools[player].amounts.slot(resource);
        let next = (i64::from(*slot) + delta).clamp(0, cap);
        *slot = next as u32;
        *slot
    }

    #[must_use]
    pub fn has_at_least(&self, player: PlayerId, resource: Resource, amount: u32) -> bool {
        self.get(player, resource) >= amount
    }

    /// Move the balance metric by `delta`, saturating at `[0, 1]`.
    ///
    /// Returns the new balance.
    pub fn shift_balance(&mut self, player: PlayerId, delta: f64) -> f64 {
        let pool = &mut self.pools[player];
        if delta.is_finite() {
            pool.balance = (pool.balance + delta).clamp(0.0, 1.0);
        }
        pool.balance
    }
}

//! Session configuration.
//!
//! A session is configured once, before `ActionEngine::new`:
//! - seats and names
//! - resource caps and starting pools
//! - victory thresholds and the round cap
//! - per-turn limits (action points, hand size)
//!
//! Defaults follow the standard rules; tests and variants override
//! individual values with the builder methods.

use serde::{Deserialize, Serialize};

use crate::resources::ResourceAmounts;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Victory thresholds. `None` disables a condition.
///
/// Checked per player in field order: insight, sincerity, zone control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VictoryConfig {
    /// Insight needed to win.
    pub insight: Option<u32>,
    /// Sincerity needed to win.
    pub sincerity: Option<u32>,
    /// Controlled zones needed to win.
    pub zones: Option<usize>,
}

impl Default for VictoryConfig {
    fn default() -> Self {
        Self {
            insight: Some(20),
            sincerity: Some(15),
            zones: Some(5),
        }
    }
}

impl VictoryConfig {
    /// No thresholds at all; only the round cap ends the game.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            insight: None,
            sincerity: None,
            zones: None,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Player names in seat order. Must be unique.
    pub players: Vec<String>,

    /// Upper bound of each resource pool.
    pub caps: ResourceAmounts,

    /// Pools every player starts with.
    pub starting: ResourceAmounts,

    /// Starting balance metric, in [0, 1].
    pub starting_balance: f64,

    pub victory: VictoryConfig,

    /// The game is forced to conclude once this round is reached.
    pub max_rounds: u32,

    /// Non-pass actions a player may take per turn.
    pub actions_per_turn: u32,

    pub hand_limit: usize,

    pub starting_hand: usize,

    /// Qi every player regains when a round completes.
    pub regen_qi: u32,

    /// Seed for the session RNG.
    pub seed: u64,
}

impl EngineConfig {
    /// Create a configuration with standard rules.
    ///
    /// Panics unless there are 2 to 8 players.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        let players: Vec<String> = players.into_iter().map(Into::into).collect();
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()),
            "Player count must be {}-{}",
            MIN_PLAYERS,
            MAX_PLAYERS
        );

        Self {
            players,
            caps: ResourceAmounts::new(10, 25, 20),
            starting: ResourceAmounts::new(3, 0, 0),
            starting_balance: 0.5,
            victory: VictoryConfig::default(),
            max_rounds: 20,
            actions_per_turn: 3,
            hand_limit: 5,
            starting_hand: 3,
            regen_qi: 1,
            seed: 0,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn with_caps(mut self, caps: ResourceAmounts) -> Self {
        self.caps = caps;
        self
    }

    #[must_use]
    pub fn with_starting(mut self, starting: ResourceAmounts) -> Self {
        self.starting = starting;
        self
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_victory(mut self, victory: VictoryConfig) -> Self {
        self.victory = victory;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_actions_per_turn(mut self, actions: u32) -> Self {
        self.actions_per_turn = actions;
        self
    }

    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    #[must_use]
    pub fn with_starting_hand(mut self, size: usize) -> Self {
        self.starting_hand = size;
        self
    }

    #[must_use]
    pub fn with_regen_qi(mut self, qi: u32) -> Self {
        self.regen_qi = qi;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Per-zone influence capacity for this table size.
    ///
    /// Control requires strictly more than half of it.
    #[must_use]
    pub fn zone_capacity(&self) -> u32 {
        match self.player_count() {
            2 => 5,
            3 => 6,
            _ => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Resource;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new(["Wen", "Zhou"]);

        assert_eq!(config.player_count(), 2);
        assert_eq!(config.caps.get(Resource::Qi), 10);
        assert_eq!(config.starting.get(Resource::Qi), 3);
        assert_eq!(config.max_rounds, 20);
        assert_eq!(config.victory.insight, Some(20));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new(["a", "b", "c"])
            .with_max_rounds(5)
            .with_actions_per_turn(1)
            .with_starting_balance(3.0)
            .with_victory(VictoryConfig::disabled())
            .with_seed(9);

        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.actions_per_turn, 1);
        assert_eq!(config.starting_balance, 1.0);
        assert_eq!(config.victory.zones, None);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_zone_capacity_by_table_size() {
        assert_eq!(EngineConfig::new(["a", "b"]).zone_capacity(), 5);
        assert_eq!(EngineConfig::new(["a", "b", "c"]).zone_capacity(), 6);
        assert_eq!(EngineConfig::new(["a", "b", "c", "d"]).zone_capacity(), 7);
    }

    #[test]
    fn test_config_serde() {
        let config = EngineConfig::new(["a", "b"]).with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-8")]
    fn test_single_player_rejected() {
        EngineConfig::new(["solo"]);
    }
}

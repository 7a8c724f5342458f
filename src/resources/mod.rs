//! Per-player resource pools.
//!
//! Three bounded pools (Qi, Insight, Sincerity) and the balance metric,
//! a scalar in [0, 1] for the player's place on the yin/yang axis.
//! All mutation is clamped: values saturate at their bounds instead of
//! failing.

mod ledger;

pub use ledger::{Resource, ResourceAmounts, ResourceLedger, ResourcePool};

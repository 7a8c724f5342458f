//! The stratagem system.
//!
//! - [`definition`]: strategy data, preconditions and effects
//! - [`catalog`]: the immutable table, including the standard 36
//! - [`resolver`]: availability and the invoke pipeline

pub mod definition;
pub mod catalog;
pub mod resolver;

pub use definition::{
    Category, Cost, Effect, Precondition, Strategy, StrategyId, StrategyTarget, Subject,
};
pub use catalog::StrategyCatalog;
pub use resolver::{Invocation, StrategyResolver};

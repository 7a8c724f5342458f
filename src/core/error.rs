//! Engine error taxonomy.
//!
//! Every error here is recoverable: the engine reports it in a failed
//! `ActionResult` and leaves state untouched, and the caller retries with
//! corrected input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategies::StrategyId;

/// What kind of name or id failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupKind {
    Strategy,
    Zone,
    Position,
    Player,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LookupKind::Strategy => "strategy",
            LookupKind::Zone => "zone",
            LookupKind::Position => "position",
            LookupKind::Player => "player",
        };
        f.write_str(name)
    }
}

/// Coarse error category, stable across message wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    InvalidAction,
    NotFound,
    Encoding,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// An action's preconditions are not met.
    #[error("{0}")]
    Validation(String),

    /// A strategy was invoked while `is_available` is false.
    #[error("strategy {strategy} is not available")]
    InvalidAction { strategy: StrategyId },

    /// Unknown strategy id, zone name, position or player.
    #[error("{kind} not found: {key}")]
    Lookup { kind: LookupKind, key: String },

    /// Snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Encoding(String),
}

impl EngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(kind: LookupKind, key: impl ToString) -> Self {
        Self::Lookup {
            kind,
            key: key.to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Validation(_) => ErrorKind::Validation,
            EngineError::InvalidAction { .. } => ErrorKind::InvalidAction,
            EngineError::Lookup { .. } => ErrorKind::NotFound,
            EngineError::Encoding(_) => ErrorKind::Encoding,
        }
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::not_found(LookupKind::Zone, "void");
        assert_eq!(err.to_string(), "zone not found: void");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = EngineError::InvalidAction {
            strategy: StrategyId::new(4),
        };
        assert_eq!(err.to_string(), "strategy #4 is not available");
        assert_eq!(err.kind(), ErrorKind::InvalidAction);

        assert_eq!(EngineError::validation("not enough qi").to_string(), "not enough qi");
    }
}

//! Player actions and the action-history ledger entries.
//!
//! Every action acts for the current player. All but `Pass` spend one
//! action point.

use serde::{Deserialize, Serialize};

use crate::board::{Position, Trigram};
use crate::core::PlayerId;
use crate::strategies::{StrategyId, StrategyTarget};

/// A primitive action.
///
/// ## Example
///
/// ```
/// use tianji::engine::{Action, ActionKind};
/// use tianji::board::Trigram;
///
/// let play = Action::PlayCard { card_index: 0, zone: Trigram::Kan };
/// assert_eq!(play.kind(), ActionKind::PlayCard);
/// assert!(play.spends_action_point());
/// assert!(!Action::Pass.spends_action_point());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `card_index` of the hand, placing one marker on
    /// `zone` (one of the card's trigrams).
    PlayCard { card_index: usize, zone: Trigram },
    /// Move to another position for 1 Qi.
    Move { to: Position },
    /// Spend 2 Qi for Insight and a card.
    Study,
    /// Recover Qi and drift toward balance.
    Meditate,
    InvokeStrategy {
        strategy: StrategyId,
        target: StrategyTarget,
    },
    /// End this player's actions for the turn.
    Pass,
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::PlayCard { .. } => ActionKind::PlayCard,
            Action::Move { .. } => ActionKind::Move,
            Action::Study => ActionKind::Study,
            Action::Meditate => ActionKind::Meditate,
            Action::InvokeStrategy { .. } => ActionKind::InvokeStrategy,
            Action::Pass => ActionKind::Pass,
        }
    }

    #[must_use]
    pub fn spends_action_point(&self) -> bool {
        !matches!(self, Action::Pass)
    }

    #[must_use]
    pub fn invoke(strategy: StrategyId) -> Self {
        Action::InvokeStrategy {
            strategy,
            target: StrategyTarget::none(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlayCard { card_index, zone } => write!(f, "play card {} on {}", card_index, zone),
            Action::Move { to } => write!(f, "move to {}", to),
            Action::Study => f.write_str("study"),
            Action::Meditate => f.write_str("meditate"),
            Action::InvokeStrategy { strategy, target } => {
                write!(f, "invoke {}", strategy)?;
                if let Some(player) = target.player {
                    write!(f, " against {}", player)?;
                }
                if let Some(zone) = target.zone {
                    write!(f, " on {}", zone)?;
                }
                Ok(())
            }
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// Action discriminant, for dispatch tables and summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PlayCard,
    Move,
    Study,
    Meditate,
    InvokeStrategy,
    Pass,
}

/// One entry of the action-history ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub round: u32,
    /// Position in the whole game, starting at 0.
    pub sequence: u32,
    pub player: PlayerId,
    pub action: Action,
}

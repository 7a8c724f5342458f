//! The action engine and the state it owns.
//!
//! - [`state`]: players, ledger, board and pile for one session
//! - [`action`]: primitive actions and history records
//! - [`result`]: `ActionResult`, deltas and game phases
//! - [`session`]: the `ActionEngine` turn state machine
//! - [`legal`]: action listing with priority hints
//! - [`status`]: serializable snapshots

pub mod state;
pub mod action;
pub mod result;
pub mod session;
pub mod legal;
pub mod status;

pub use state::{GameState, Player};
pub use action::{Action, ActionKind, ActionRecord};
pub use result::{ActionResult, Delta, GamePhase};
pub use session::{ActionEngine, GameOutcome, Victory, VictoryCondition};
pub use legal::LegalAction;
pub use status::{GameStatus, PlayerStatus, ZoneStatus};

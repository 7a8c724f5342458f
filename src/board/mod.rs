//! The board: eight trigram zones and the three realms players stand in.
//!
//! Each zone counts influence markers per player. Its controller is
//! always derived from those counts, never set directly.

mod trigram;
mod zone;
mod model;

pub use trigram::{Position, Trigram};
pub use zone::{derive_controller, BoardZone};
pub use model::BoardModel;

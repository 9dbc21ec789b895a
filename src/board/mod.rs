// board module
mod board;
// error module
mod error;
// settlement module
mod settlement;

#[cfg(test)]
pub mod fixtures;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the board module.
//─────────────────────────────────────────────────────────────────────────────
pub use board::Board;
pub use error::BoardError;
pub use settlement::{Settlement, SettlementId, SettlementKind, Visitation};

use super::settlement::SettlementId;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for board construction.
/// Any of these aborts construction; no partially built board is handed out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Error when no settlement is a start port.
    #[error("Board must contain a start port.")]
    MissingStart,

    /// Error when a second start port is found.
    #[error("Board can only contain one start port (another one at settlement {0}).")]
    DuplicateStart(SettlementId),

    /// Error when no settlement is a finish port.
    #[error("Board must contain a finish port.")]
    MissingFinish,

    /// Error when a second finish port is found.
    #[error("Board can only contain one finish port (another one at settlement {0}).")]
    DuplicateFinish(SettlementId),

    /// Error when a road leads from a settlement back to itself.
    #[error("Settlement {0} cannot have a road to itself.")]
    SelfLoop(SettlementId),

    /// Error when a road references an identity outside the board.
    #[error("Road to settlement {id} requested, but the board only has {size} settlements.")]
    UnknownSettlement { id: SettlementId, size: usize },

    /// Error when two cities are directly connected.
    #[error("Two cities cannot be connected: '{first}' and '{second}'.")]
    AdjacentCities { first: String, second: String },
}

use thiserror::Error;

use crate::board::{BoardError, SettlementId};

//─────────────────────────────────────────────────────────────────────────────

/// Error type for board loading operations.
/// Line numbers are 1-based and count every line of the input, comments included.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when reading a file.
    #[error("Failed to read board file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a line lacks the structure its section expects.
    #[error("Misaligned on line {line}: {reason}")]
    Misaligned { line: usize, reason: &'static str },

    /// Error when a settlement id is not a number.
    #[error("Line {line}: '{token}' is not a settlement id")]
    InvalidId { line: usize, token: String },

    /// Error when a settlement kind code is not one of SP, FP, V or C.
    #[error("Line {line}: unknown settlement kind '{code}'")]
    UnknownKind { line: usize, code: String },

    /// Error when a road references a settlement that was never declared.
    #[error("Line {line}: road to non-existent settlement {id} requested")]
    UnknownSettlement { line: usize, id: SettlementId },

    /// Error when the parsed settlements and roads do not form a valid board.
    #[error("Invalid board: {0}")]
    Board(#[from] BoardError),
}

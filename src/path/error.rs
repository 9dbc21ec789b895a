use thiserror::Error;

// Error type for path search configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when a traversal mode number is not 1, 2 or 3.
    #[error("Unknown traversal mode {0}, expected 1, 2 or 3.")]
    UnknownMode(u8),
}

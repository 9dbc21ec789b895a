use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Board loading error: {0}")]
    BoardLoad(#[from] crate::board_loader::LoadError),
    #[error("Search configuration error: {0}")]
    Path(#[from] crate::path::PathError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}

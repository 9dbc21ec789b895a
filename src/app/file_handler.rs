//! File system helpers for the application: validating the board file path
//! and writing the finished report.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Validates that `board_file_path` exists and points to a file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_board_file(board_file_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !board_file_path.exists() {
        let error_msg = format!("File not found: {}", board_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !board_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", board_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

//! Per-step work of a run: loading the board and searching it under one
//! traversal mode.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::board::Board;
use crate::board_loader;
use crate::path::{PathFinder, TraversalMode};
use crate::report;

/// Loads and validates the board described by `board_file_path`.
///
/// # Errors
/// Returns `AppError::BoardLoad` if the file cannot be read or parsed, or the
/// board it describes is invalid.
pub fn load_board(board_file_path: &Path, quiet_mode: bool) -> Result<Board, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading board from file...");
    let board = board_loader::load_board_from_file(board_file_path).map_err(|e| {
        verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
        AppError::BoardLoad(e)
    })?;

    verbose_println!(
        quiet_mode,
        "   => {} settlement(s), {} road(s). Start: {}, finish: {}.",
        board.len(),
        board.road_count(),
        board.start(),
        board.finish()
    );
    for settlement in board.settlements() {
        verbose_println!(
            quiet_mode,
            "      {}@{}@{}",
            settlement.id(),
            settlement,
            settlement.kind().code()
        );
    }
    for (a, b) in board.all_roads() {
        verbose_println!(quiet_mode, "      road {} <-> {}", a, b);
    }
    Ok(board)
}

/// Searches `board` under `mode` and writes the mode's report block.
/// Routes are enumerated and listed only when `print_paths` is set.
///
/// Returns the number of routes found.
pub fn search_mode(
    board: &Board,
    mode: TraversalMode,
    print_paths: bool,
    quiet_mode: bool,
    writer: &mut dyn Write,
) -> Result<u64, AppError> {
    verbose_println!(
        quiet_mode,
        "\n------------------------------------------------------------"
    );
    verbose_println!(quiet_mode, "Traversal {}", mode);
    verbose_println!(
        quiet_mode,
        "------------------------------------------------------------"
    );

    let finder = PathFinder::new(board, mode);
    let started = Instant::now();
    let found = if print_paths {
        let (found, routes) = finder.enumerate_paths();
        report::write_mode_report(writer, finder.mode(), found, Some(routes.as_slice()))?;
        found
    } else {
        let found = finder.count_paths();
        report::write_mode_report(writer, finder.mode(), found, None)?;
        found
    };

    verbose_println!(
        quiet_mode,
        "   => {} route(s) in {:.3?}.",
        found,
        started.elapsed()
    );
    Ok(found)
}

//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes the verbose log unless quiet.
//! 2. Validates the board file path.
//! 3. Loads the board.
//! 4. Searches it under the selected traversal mode, or all three in order,
//!    writing one report block per mode.
//! 5. Sends the report to stdout or to the `--output` file.

use std::io::{self, Write};

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::path::TraversalMode;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the board file is invalid, the mode is unknown, or
/// writing the report fails.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without the file log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_searches(&cli, quiet_mode);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }

    // Final flush of the verbose log before exiting.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_searches(cli: &Cli, quiet_mode: bool) -> Result<(), AppError> {
    file_handler::validate_board_file(&cli.board_file, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Board File: {}", cli.board_file.display());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let board = processing::load_board(&cli.board_file, quiet_mode)?;

    let modes = match cli.mode {
        Some(number) => vec![TraversalMode::try_from(number)?],
        None => TraversalMode::ALL.to_vec(),
    };

    let mut report: Vec<u8> = Vec::new();
    for mode in modes {
        processing::search_mode(&board, mode, cli.print_paths, quiet_mode, &mut report)?;
        if !quiet_mode {
            if let Err(e) = logger::flush_global_logger() {
                eprintln!("[WARNING] Failed to flush verbose log after {}: {}", mode, e);
            }
        }
    }

    match &cli.output {
        Some(output_path) => {
            let content = String::from_utf8_lossy(&report);
            file_handler::write_content_to_file(output_path, &content).map_err(|e| {
                verbose_eprintln!(
                    quiet_mode,
                    "[ERROR] Failed to write report ({}): {}",
                    output_path.display(),
                    e
                );
                AppError::Io(e)
            })?;
            verbose_println!(
                quiet_mode,
                "\n[INFO] Report written to {}",
                output_path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&report)?;
            handle.flush()?;
        }
    }
    Ok(())
}

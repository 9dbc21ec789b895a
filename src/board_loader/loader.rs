//! Parses board description files.
//!
//! ```text
//! # BEGIN
//! 0@InPort@SP
//! 1@Pallet@V
//! 2@Pewter@C
//! 3@OutPort@FP
//! ==============
//! 0: 1, 2
//! 1: 0, 3
//! 2: 3
//! # END
//! ```
//!
//! Settlement lines come first, then a line of `=` switches to road lines.
//! Blank lines and lines containing `#` are ignored.

use std::fs;
use std::path::Path;

use super::error::LoadError;
use crate::board::{Board, Settlement, SettlementId, SettlementKind};

//─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Settlements,
    Roads,
}

/// Loads and parses the board description at `file_path`.
pub fn load_board_from_file(file_path: &Path) -> Result<Board, LoadError> {
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| LoadError::ReadFile(file_path.display().to_string(), e))?;
    let lines: Vec<&str> = file_content.lines().collect();
    parse_board(lines.as_slice())
}

/// Parses a board description, one entry per line. The board is only built
/// once every line parsed.
pub fn parse_board<S: AsRef<str>>(lines: &[S]) -> Result<Board, LoadError> {
    let mut settlements: Vec<Settlement> = Vec::new();
    let mut roads: Vec<(SettlementId, SettlementId)> = Vec::new();
    let mut section = Section::Settlements;

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        let line_no = index + 1;
        if line.is_empty() || line.contains('#') {
            continue;
        }
        // Multiple '=' demarcate the road section.
        if line.contains('=') {
            section = Section::Roads;
            continue;
        }
        match section {
            Section::Settlements => {
                settlements.push(extract_settlement(line, line_no, settlements.len())?)
            }
            Section::Roads => extract_roads(line, line_no, settlements.len(), &mut roads)?,
        }
    }

    Ok(Board::new(settlements, &roads)?)
}

/// Parses an `id@name@kind` line. `expected_id` is the number of settlements read so far.
fn extract_settlement(
    line: &str,
    line_no: usize,
    expected_id: SettlementId,
) -> Result<Settlement, LoadError> {
    let fields: Vec<&str> = line.split('@').map(str::trim).collect();
    let [id, name, code] = fields[..] else {
        return Err(LoadError::Misaligned {
            line: line_no,
            reason: "expected `id@name@kind`",
        });
    };

    if parse_id(id, line_no)? != expected_id {
        return Err(LoadError::Misaligned {
            line: line_no,
            reason: "settlement ids must count up from 0",
        });
    }
    let kind = SettlementKind::from_code(code).ok_or_else(|| LoadError::UnknownKind {
        line: line_no,
        code: code.to_string(),
    })?;
    Ok(Settlement::new(name, kind))
}

/// Parses an `id: id, id, ...` line into roads leaving the first settlement.
fn extract_roads(
    line: &str,
    line_no: usize,
    size: usize,
    roads: &mut Vec<(SettlementId, SettlementId)>,
) -> Result<(), LoadError> {
    let (from, targets) = line.split_once(':').ok_or(LoadError::Misaligned {
        line: line_no,
        reason: "expected `id: id, id, ...`",
    })?;

    let from = known_id(from, line_no, size)?;
    for target in targets.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        roads.push((from, known_id(target, line_no, size)?));
    }
    Ok(())
}

fn parse_id(token: &str, line_no: usize) -> Result<SettlementId, LoadError> {
    token.trim().parse().map_err(|_| LoadError::InvalidId {
        line: line_no,
        token: token.trim().to_string(),
    })
}

fn known_id(token: &str, line_no: usize, size: usize) -> Result<SettlementId, LoadError> {
    let id = parse_id(token, line_no)?;
    if id >= size {
        return Err(LoadError::UnknownSettlement { line: line_no, id });
    }
    Ok(id)
}

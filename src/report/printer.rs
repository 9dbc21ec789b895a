use std::io::Write;

use crate::board::Settlement;
use crate::path::{Route, TraversalMode};

/// Joins settlement names with arrows: `A -> B -> C`.
pub fn format_route(route: &[&Settlement]) -> String {
    route
        .iter()
        .map(|settlement| settlement.name())
        .collect::<Vec<&str>>()
        .join(" -> ")
}

/// Writes the result block of one traversal mode to the given writer.
/// Routes are listed only when `routes` is given.
pub fn write_mode_report(
    writer: &mut dyn Write,
    mode: TraversalMode,
    found: u64,
    routes: Option<&[Route<'_>]>,
) -> std::io::Result<()> {
    writeln!(writer, "=== MODE {} ===", mode.number())?;
    writeln!(writer, "Routes found: {}", found)?;
    if let Some(routes) = routes {
        for route in routes {
            writeln!(writer, "{}", format_route(route))?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

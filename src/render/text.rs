//! Plain text output.

use crate::ascii::AsciiGrid;

/// One line per grid row, trailing whitespace stripped, joined with `\n`.
///
/// Leading and interior spaces are kept; they are the light regions.
pub fn render(grid: &AsciiGrid) -> String {
    grid.rows()
        .map(|row| {
            let line: String = row.collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Text rendering of the board.

use crate::grid::Grid;
use reef_core::Occupant;
use std::fmt;

/// Glyph drawn for a cell that has not been initialized
pub const EMPTY_GLYPH: &str = "?";

/// Render the board as a framed block of glyphs, one line per row.
pub fn render(grid: &Grid) -> String {
    let border = format!("+{}+\n", "-".repeat(grid.width()));
    let mut out = String::with_capacity(border.len() * (grid.height() + 2));

    out.push_str(&border);
    for y in 0..grid.height() {
        out.push('|');
        for cell in grid.row(y) {
            out.push_str(cell.as_ref().map_or(EMPTY_GLYPH, Occupant::glyph));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);

    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

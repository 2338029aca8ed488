use std::io::Write;

use crossterm::{queue, style::Print};

use crate::maze::Grid;

/// Printable lines of the grid, two characters per cell, without styling.
pub fn render_lines(grid: &Grid) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

/// Writes the grid, one line per row.
pub fn print_grid<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    for line in render_lines(grid) {
        queue!(out, Print(line), Print("\n"))?;
    }
    out.flush()
}

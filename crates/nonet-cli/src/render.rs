//! Text rendering of grids, boxes, and duplicate reports.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use nonet_core::{BOX_SIZE, Block, Cell, DigitSet, Grid};
use nonet_solver::DuplicateReport;

const GRID_BORDER: &str = "+-------+-------+-------+";
const BOX_BORDER: &str = "+-------+";

fn render_cells(line: &mut String, cells: &[Cell]) {
    line.push('|');
    for (c, cell) in cells.iter().enumerate() {
        line.push(' ');
        line.push(match cell {
            Cell::Blank => ' ',
            Cell::Digit(digit) => digit.as_char(),
        });
        if (c + 1) % BOX_SIZE == 0 {
            line.push_str(" |");
        }
    }
}

/// Renders a full grid as a boxed text layout with 3×3 sub-block
/// separators. Blank cells render as spaces.
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::from(GRID_BORDER);
    for (r, row) in grid.rows_iter().enumerate() {
        out.push('\n');
        render_cells(&mut out, row);
        if (r + 1) % BOX_SIZE == 0 {
            out.push('\n');
            out.push_str(GRID_BORDER);
        }
    }
    out
}

/// Renders a single 3×3 box in the same boxed layout as
/// [`render_grid`].
#[must_use]
pub fn render_box(block: &Block) -> String {
    let mut out = String::from(BOX_BORDER);
    for row in block.rows() {
        out.push('\n');
        render_cells(&mut out, row);
    }
    out.push('\n');
    out.push_str(BOX_BORDER);
    out
}

fn render_section(out: &mut String, title: &str, unit: &str, entries: &BTreeMap<usize, DigitSet>) {
    let _ = writeln!(out, "Duplicates in {title}:");
    if entries.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for (number, digits) in entries {
        let _ = writeln!(out, "  {unit} {number}: {digits}");
    }
}

/// Renders a duplicate report as one section per unit kind, listing each
/// unit that repeats a digit.
#[must_use]
pub fn render_duplicates(report: &DuplicateReport) -> String {
    let mut out = String::new();
    render_section(&mut out, "boxes", "box", report.boxes());
    render_section(&mut out, "rows", "row", report.rows());
    render_section(&mut out, "columns", "column", report.columns());
    out
}

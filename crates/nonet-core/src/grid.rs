//! The 9×9 grid and its structural accessors.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Cell;

/// Number of rows and columns in a grid.
pub const GRID_SIZE: usize = 9;

/// Number of rows and columns in a 3×3 box.
pub const BOX_SIZE: usize = 3;

/// Structural access failure: an out-of-range index or an invalid cell value.
///
/// These signal a programming or input error by the caller and are not
/// recoverable by the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A row index outside `0..9`.
    #[display("row index {row} is out of range (0-8)")]
    RowOutOfRange {
        /// The offending row index.
        row: usize,
    },
    /// A column index outside `0..9`.
    #[display("column index {column} is out of range (0-8)")]
    ColumnOutOfRange {
        /// The offending column index.
        column: usize,
    },
    /// A box number outside `0..9`.
    #[display("box number {number} is out of range (0-8)")]
    BoxOutOfRange {
        /// The offending box number.
        number: usize,
    },
    /// A character that is neither a digit `1`-`9` nor the blank marker.
    #[display("'{found}' is not a digit 1-9 or '-'")]
    InvalidCell {
        /// The rejected character.
        found: char,
    },
}

/// Failure parsing the nine-line comma-separated puzzle format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input did not contain exactly nine non-empty rows.
    #[display("expected 9 rows, found {found}")]
    BadRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row did not contain exactly nine cells.
    #[display("row {row} has {found} cells, expected 9")]
    BadRowLength {
        /// The offending row index.
        row: usize,
        /// Number of cells found in that row.
        found: usize,
    },
    /// A cell token was neither a digit `1`-`9` nor the blank marker.
    #[display("row {row}, column {column}: '{found}' is not a digit 1-9 or '-'")]
    BadCell {
        /// Row index of the offending token.
        row: usize,
        /// Column index of the offending token.
        column: usize,
        /// The rejected token.
        found: String,
    },
}

/// A 3×3 box sliced out of a grid.
///
/// Boxes are returned by [`Grid::box_by_number`] and [`Grid::box_by_cell`].
/// Duplicate checks and candidate generation treat a box as an unordered bag
/// of nine values, which [`flatten`](Self::flatten) provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    cells: [[Cell; BOX_SIZE]; BOX_SIZE],
}

impl Block {
    /// Returns the three rows of the box, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; BOX_SIZE]; BOX_SIZE] {
        &self.cells
    }

    /// Linearizes the box into nine values in row-major order.
    #[must_use]
    pub fn flatten(&self) -> [Cell; GRID_SIZE] {
        let mut flat = [Cell::Blank; GRID_SIZE];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                flat[i * BOX_SIZE + j] = *cell;
            }
        }
        flat
    }
}

/// A 9×9 Sudoku grid of [`Cell`]s.
///
/// Rows are indexed 0-8 top to bottom, columns 0-8 left to right. Boxes are
/// numbered 0-8 in row-major order over the 3×3 arrangement of 3×3 sub-grids,
/// so box `b` has its top-left corner at `(b / 3 * 3, b % 3 * 3)`.
///
/// All accessors read the live matrix: a mutation through
/// [`insert`](Self::insert) or [`clear`](Self::clear) is visible to the next
/// accessor call. Columns and boxes are freshly projected on every call, not
/// cached.
///
/// # Examples
///
/// ```
/// use nonet_core::{Cell, Digit, Grid};
///
/// let grid: Grid = "
///     5,3,-,-,7,-,-,-,-
///     6,-,-,1,9,5,-,-,-
///     -,9,8,-,-,-,-,6,-
///     8,-,-,-,6,-,-,-,3
///     4,-,-,8,-,3,-,-,1
///     7,-,-,-,2,-,-,-,6
///     -,6,-,-,-,-,2,8,-
///     -,-,-,4,1,9,-,-,5
///     -,-,-,-,8,-,-,7,9
/// "
/// .parse()?;
///
/// assert_eq!(grid.cell(0, 0)?, Cell::Digit(Digit::D5));
/// assert_eq!(grid.column(8)?[4], Cell::Digit(Digit::D1));
/// assert_eq!(grid.box_by_number(4)?.flatten()[4].as_char(), '-');
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an all-blank grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from a full 9×9 cell matrix.
    #[must_use]
    pub const fn from_cells(cells: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    fn check_row(row: usize) -> Result<(), GridError> {
        if row < GRID_SIZE {
            Ok(())
        } else {
            Err(GridError::RowOutOfRange { row })
        }
    }

    fn check_column(column: usize) -> Result<(), GridError> {
        if column < GRID_SIZE {
            Ok(())
        } else {
            Err(GridError::ColumnOutOfRange { column })
        }
    }

    /// Returns the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if either index is out of range.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, GridError> {
        Self::check_row(row)?;
        Self::check_column(column)?;
        Ok(self.cells[row][column])
    }

    /// Returns the cell sequence for one row.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowOutOfRange`] if `row` is not in `0..9`.
    pub fn row(&self, row: usize) -> Result<&[Cell; GRID_SIZE], GridError> {
        Self::check_row(row)?;
        Ok(&self.cells[row])
    }

    /// Returns the ordered sequence of rows `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowOutOfRange`] if the range does not fit in
    /// `0..=9` or `start > end`.
    pub fn rows(&self, start: usize, end: usize) -> Result<&[[Cell; GRID_SIZE]], GridError> {
        if end > GRID_SIZE {
            return Err(GridError::RowOutOfRange { row: end });
        }
        if start > end {
            return Err(GridError::RowOutOfRange { row: start });
        }
        Ok(&self.cells[start..end])
    }

    fn project_column(&self, column: usize) -> [Cell; GRID_SIZE] {
        let mut cells = [Cell::Blank; GRID_SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            cells[row] = line[column];
        }
        cells
    }

    /// Returns the cell sequence for one column, top to bottom.
    ///
    /// The column is materialized by projecting cell `column` out of every
    /// row on each call, since the grid mutates between calls.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ColumnOutOfRange`] if `column` is not in `0..9`.
    pub fn column(&self, column: usize) -> Result<[Cell; GRID_SIZE], GridError> {
        Self::check_column(column)?;
        Ok(self.project_column(column))
    }

    /// Returns the ordered sequence of columns `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ColumnOutOfRange`] if the range does not fit in
    /// `0..=9` or `start > end`.
    pub fn columns(&self, start: usize, end: usize) -> Result<Vec<[Cell; GRID_SIZE]>, GridError> {
        if end > GRID_SIZE {
            return Err(GridError::ColumnOutOfRange { column: end });
        }
        if start > end {
            return Err(GridError::ColumnOutOfRange { column: start });
        }
        Ok((start..end).map(|c| self.project_column(c)).collect())
    }

    /// Slices out the 3×3 block whose top-left corner is `(top, left)`.
    ///
    /// Both box lookups funnel through this helper so their slicing
    /// semantics are identical.
    fn box_array(&self, top: usize, left: usize) -> Block {
        let mut cells = [[Cell::Blank; BOX_SIZE]; BOX_SIZE];
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[top + i][left + j];
            }
        }
        Block { cells }
    }

    /// Returns the 3×3 box with the given box number.
    ///
    /// Box `number` has its top-left corner at
    /// `(number / 3 * 3, number % 3 * 3)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::BoxOutOfRange`] if `number` is not in `0..9`.
    pub fn box_by_number(&self, number: usize) -> Result<Block, GridError> {
        if number >= GRID_SIZE {
            return Err(GridError::BoxOutOfRange { number });
        }
        Ok(self.box_array(number / BOX_SIZE * BOX_SIZE, number % BOX_SIZE * BOX_SIZE))
    }

    /// Returns the 3×3 box containing the cell `(row, column)`.
    ///
    /// The box is found by rounding both coordinates down to the nearest
    /// multiple of 3.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if either index is out of range.
    pub fn box_by_cell(&self, row: usize, column: usize) -> Result<Block, GridError> {
        Self::check_row(row)?;
        Self::check_column(column)?;
        Ok(self.box_array(row - row % BOX_SIZE, column - column % BOX_SIZE))
    }

    /// Overwrites the cell at `(row, column)`.
    ///
    /// The mutation is immediately visible to subsequent accessor calls.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if either index is out of range.
    pub fn insert(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), GridError> {
        Self::check_row(row)?;
        Self::check_column(column)?;
        self.cells[row][column] = cell;
        Ok(())
    }

    /// Overwrites the cell at `(row, column)` with a cell parsed from its
    /// textual form.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCell`] if `value` is neither a digit
    /// `'1'`-`'9'` nor the blank marker, or a range error as for
    /// [`insert`](Self::insert).
    pub fn insert_char(&mut self, row: usize, column: usize, value: char) -> Result<(), GridError> {
        let cell = Cell::from_char(value).ok_or(GridError::InvalidCell { found: value })?;
        self.insert(row, column, cell)
    }

    /// Resets the cell at `(row, column)` to blank.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if either index is out of range.
    pub fn clear(&mut self, row: usize, column: usize) -> Result<(), GridError> {
        self.insert(row, column, Cell::Blank)
    }

    /// Returns `true` if any cell in the grid is blank.
    #[must_use]
    pub fn has_blank(&self) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|cell| cell.is_blank()))
    }

    /// Returns the coordinates of every blank cell, in row-major order.
    pub fn blank_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_blank())
                .map(move |(c, _)| (r, c))
        })
    }

    /// Returns the nine rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Returns the nine columns, left to right.
    ///
    /// Each column is projected on demand, as for [`column`](Self::column).
    pub fn columns_iter(&self) -> impl Iterator<Item = [Cell; GRID_SIZE]> + '_ {
        (0..GRID_SIZE).map(|c| self.project_column(c))
    }

    /// Returns the nine boxes in box-number order.
    pub fn boxes_iter(&self) -> impl Iterator<Item = Block> + '_ {
        (0..GRID_SIZE)
            .map(|b| self.box_array(b / BOX_SIZE * BOX_SIZE, b % BOX_SIZE * BOX_SIZE))
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses the puzzle wire format: nine non-empty lines, each holding
    /// nine comma-separated cells (`1`-`9` or `-`). Surrounding whitespace
    /// on lines and cell tokens is ignored; blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != GRID_SIZE {
            return Err(GridParseError::BadRowCount { found: lines.len() });
        }

        let mut cells = [[Cell::Blank; GRID_SIZE]; GRID_SIZE];
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
            if tokens.len() != GRID_SIZE {
                return Err(GridParseError::BadRowLength {
                    row,
                    found: tokens.len(),
                });
            }
            for (column, token) in tokens.iter().enumerate() {
                let mut chars = token.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(c), None) => Cell::from_char(c),
                    _ => None,
                };
                let Some(cell) = cell else {
                    return Err(GridParseError::BadCell {
                        row,
                        column,
                        found: (*token).to_string(),
                    });
                };
                cells[row][column] = cell;
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    /// Writes the grid back in the puzzle wire format, one comma-separated
    /// line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

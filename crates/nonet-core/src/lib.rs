//! Core grid model for the Nonet Sudoku solver.
//!
//! This crate owns the data the solver operates on and nothing else: there is
//! no solving logic here. It provides:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Cell`]: a grid cell, either blank or holding a digit
//! - [`DigitSet`]: a set of digits backed by a 9-bit mask, used for candidate
//!   sets and duplicate sets alike
//! - [`Grid`]: the 9×9 cell matrix with row, column, and box accessors and
//!   single-cell mutation
//!
//! The textual boundary of the whole system is single characters: digits are
//! `'1'`-`'9'` and a blank cell is [`BLANK_CHAR`] (`'-'`). [`Grid`] parses and
//! prints the nine-line comma-separated puzzle format through [`FromStr`] and
//! [`Display`].
//!
//! [`FromStr`]: std::str::FromStr
//! [`Display`]: std::fmt::Display
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Cell, Digit, Grid};
//!
//! let mut grid = Grid::new();
//! grid.insert(1, 0, Cell::Digit(Digit::D5))?;
//!
//! assert_eq!(grid.cell(1, 0)?, Cell::Digit(Digit::D5));
//! assert_eq!(grid.row(1)?[0].as_char(), '5');
//!
//! grid.clear(1, 0)?;
//! assert!(grid.cell(1, 0)?.is_blank());
//! # Ok::<(), nonet_core::GridError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;

pub use self::{
    cell::{BLANK_CHAR, Cell},
    digit::Digit,
    digit_set::DigitSet,
    grid::{BOX_SIZE, Block, GRID_SIZE, Grid, GridError, GridParseError},
};

//! Naked-single elimination solver for 9×9 Sudoku grids.
//!
//! The solver drives a [`Grid`](nonet_core::Grid) toward a complete valid
//! solution with a single rule, applied round after round:
//!
//! 1. For every blank cell, compute the set of digits absent from its row,
//!    its column, and its 3×3 box, and record the intersection in an
//!    ephemeral scratch space.
//! 2. Write every cell whose candidate set holds exactly one digit (a
//!    "naked single") back into the grid.
//! 3. Discard the scratch space and start over against the updated grid.
//!
//! Rounds repeat until the grid is a valid complete solution or a fixed
//! round budget ([`ROUND_BUDGET`]) runs out. There is no search and no
//! backtracking: a puzzle that needs any technique beyond naked singles is
//! reported as [`SolverError::BudgetExhausted`]. That is the expressed limit
//! of the algorithm, not a defect.
//!
//! Independent of solving, the solver exposes validity and duplicate
//! diagnostics over the same grid: [`Solver::check_solve`] and
//! [`Solver::find_duplicates`].
//!
//! # Examples
//!
//! ```
//! use nonet_core::Grid;
//! use nonet_solver::Solver;
//!
//! let mut grid: Grid = "
//!     -,2,3,4,5,6,7,8,9
//!     4,5,6,7,8,9,1,2,3
//!     7,8,9,1,2,3,4,5,6
//!     2,3,1,5,6,4,8,9,7
//!     5,6,4,8,9,7,2,3,1
//!     8,9,7,2,3,1,5,6,4
//!     3,1,2,6,4,5,9,7,8
//!     6,4,5,9,7,8,3,1,2
//!     9,7,8,3,1,2,6,4,5
//! "
//! .parse()?;
//!
//! let mut solver = Solver::new(&mut grid);
//! let report = solver.solve()?;
//! assert_eq!(report.rounds(), 1);
//! assert!(solver.check_solve());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod duplicates;
mod scratch;
pub mod solver;

pub use self::{
    duplicates::DuplicateReport,
    solver::{ROUND_BUDGET, SolveReport, Solver, SolverError},
};

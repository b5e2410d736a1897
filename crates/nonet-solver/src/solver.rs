//! The naked-single elimination loop.

use nonet_core::{Cell, DigitSet, GRID_SIZE, Grid, GridError};

use crate::{duplicates::DuplicateReport, scratch::Scratch};

/// Maximum number of elimination rounds [`Solver::solve`] will run before
/// giving up.
///
/// The budget is the sole termination mechanism for puzzles the algorithm
/// cannot crack: because rounds never guess, an unsolvable-by-naked-singles
/// puzzle simply stops making progress and spins until the counter runs out.
pub const ROUND_BUDGET: usize = 10_000;

/// Failure modes of the solver.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The round budget ran out before the grid became a valid complete
    /// solution.
    ///
    /// This is the expected negative outcome of [`Solver::solve`] for any
    /// puzzle that needs techniques beyond naked singles, not a crash.
    #[display("no solution found within {rounds} rounds")]
    BudgetExhausted {
        /// Rounds run before giving up.
        rounds: usize,
    },
    /// Candidate options were requested for a cell with no scratch entry,
    /// for example a cell that is not currently blank.
    #[display("no candidates recorded for cell ({row}, {column})")]
    ScratchMiss {
        /// Row index of the queried cell.
        row: usize,
        /// Column index of the queried cell.
        column: usize,
    },
    /// A structural grid access failed.
    #[display("grid access failed: {_0}")]
    Grid(#[from] GridError),
}

/// Outcome of a successful [`Solver::solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    rounds: usize,
}

impl SolveReport {
    /// Number of elimination rounds consumed to reach the solution.
    ///
    /// A grid that was already solved reports zero rounds.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }
}

/// Drives a grid toward a complete valid solution by naked-single
/// elimination.
///
/// A solver borrows its grid exclusively for its whole lifetime and owns the
/// per-round candidate scratch space. The diagnostic queries
/// ([`check_solve`](Self::check_solve), [`find_duplicates`](Self::find_duplicates))
/// are pure reads, callable at any time independent of the elimination
/// loop's progress.
///
/// # Examples
///
/// ```
/// use nonet_core::Grid;
/// use nonet_solver::Solver;
///
/// let mut grid = Grid::new();
/// grid.insert_char(0, 0, '5')?;
/// grid.insert_char(0, 1, '5')?;
///
/// let solver = Solver::new(&mut grid);
/// assert!(!solver.check_solve());
/// assert!(!solver.find_duplicates().is_empty());
/// # Ok::<(), nonet_core::GridError>(())
/// ```
#[derive(Debug)]
pub struct Solver<'g> {
    grid: &'g mut Grid,
    scratch: Scratch,
}

impl<'g> Solver<'g> {
    /// Creates a solver over the given grid.
    pub fn new(grid: &'g mut Grid) -> Self {
        Self {
            grid,
            scratch: Scratch::new(),
        }
    }

    /// Returns a read view of the grid being solved.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Returns `true` if the grid is a valid complete solution: no cell is
    /// blank and no row, column, or box repeats a digit.
    ///
    /// Both conditions are evaluated in full on every call; nothing is
    /// cached between calls.
    #[must_use]
    pub fn check_solve(&self) -> bool {
        let duplicates = self.find_duplicates();
        let has_blank = self.grid.has_blank();
        duplicates.is_empty() && !has_blank
    }

    /// Scans all 27 units for repeated digits.
    ///
    /// See [`DuplicateReport`] for the shape of the result.
    #[must_use]
    pub fn find_duplicates(&self) -> DuplicateReport {
        DuplicateReport::find(self.grid)
    }

    /// Computes the feasible digits for a single blank cell: the
    /// intersection of the digits absent from its row, absent from its
    /// column, and absent from its box.
    ///
    /// Only the current grid state is consulted. No lookahead or chained
    /// deduction happens here.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if the coordinates are out of range.
    pub fn generate_candidate(&self, row: usize, column: usize) -> Result<DigitSet, SolverError> {
        let row_cells = self.grid.row(row)?;
        let column_cells = self.grid.column(column)?;
        let box_cells = self.grid.box_by_cell(row, column)?.flatten();
        Ok(missing_digits(row_cells) & missing_digits(&column_cells) & missing_digits(&box_cells))
    }

    /// Computes and records the candidate set of every currently-blank
    /// cell into the scratch space.
    ///
    /// Rerunning this without mutating the grid in between reproduces the
    /// same scratch space.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if a grid access fails.
    pub fn generate_candidates(&mut self) -> Result<(), SolverError> {
        let blanks: Vec<(usize, usize)> = self.grid.blank_cells().collect();
        for (row, column) in blanks {
            let candidates = self.generate_candidate(row, column)?;
            self.scratch.record(row, column, candidates);
        }
        Ok(())
    }

    /// Writes every naked single in the scratch space into the grid.
    ///
    /// The scratch space is iterated through a point-in-time copy taken
    /// before any write, so all resolutions in one round are computed
    /// against the grid state as it stood when the round's candidates were
    /// generated; a cell never sees another cell resolved earlier in the
    /// same round. Written cells are dropped from the live scratch space;
    /// entries with more than one candidate stay untouched, and entries
    /// with no candidates are left to make no progress.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if a grid write fails.
    pub fn implement_candidates(&mut self) -> Result<(), SolverError> {
        for (row, column, candidates) in self.scratch.snapshot() {
            if let Some(digit) = candidates.as_single() {
                self.grid.insert(row, column, Cell::Digit(digit))?;
                self.scratch.remove(row, column);
            }
        }
        Ok(())
    }

    /// Returns the candidate set recorded for a cell in the current round.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::ScratchMiss`] if the cell has no scratch
    /// entry, for example because it was not blank when candidates were
    /// generated or the round already resolved it.
    pub fn candidate_options(&self, row: usize, column: usize) -> Result<DigitSet, SolverError> {
        self.scratch
            .options(row, column)
            .ok_or(SolverError::ScratchMiss { row, column })
    }

    /// Discards the scratch space.
    ///
    /// Called at the end of every round so the next round recomputes all
    /// candidates from the updated grid.
    pub fn reset_scratch_space(&mut self) {
        self.scratch.clear();
    }

    /// Runs elimination rounds until the grid is a valid complete solution
    /// or the round budget is exhausted.
    ///
    /// One round is: generate candidates for every blank cell, write back
    /// all naked singles, discard the scratch space.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::BudgetExhausted`] once [`ROUND_BUDGET`] rounds
    /// have run without producing a solution. This is the normal negative
    /// result for puzzles that need guessing or any technique beyond naked
    /// singles; the grid keeps whatever progress was made.
    pub fn solve(&mut self) -> Result<SolveReport, SolverError> {
        let mut rounds = 0;
        while !self.check_solve() {
            if rounds >= ROUND_BUDGET {
                return Err(SolverError::BudgetExhausted { rounds });
            }
            self.generate_candidates()?;
            self.implement_candidates()?;
            self.reset_scratch_space();
            rounds += 1;
        }
        Ok(SolveReport { rounds })
    }
}

/// Returns the digits that do not appear among the non-blank values of a
/// nine-cell unit.
fn missing_digits(cells: &[Cell; GRID_SIZE]) -> DigitSet {
    let present: DigitSet = cells.iter().filter_map(|cell| cell.digit()).collect();
    DigitSet::FULL.difference(present)
}

#[cfg(test)]
mod tests {
    use nonet_core::Digit;

    use super::*;

    fn grid_from(rows: [&str; GRID_SIZE]) -> Grid {
        let mut cells = [[Cell::Blank; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                cells[r][c] = Cell::from_char(ch).unwrap();
            }
        }
        Grid::from_cells(cells)
    }

    /// A complete valid solution used as the base for solvable puzzles.
    fn solved_rows() -> [&'static str; GRID_SIZE] {
        [
            "123456789",
            "456789123",
            "789123456",
            "231564897",
            "564897231",
            "897231564",
            "312645978",
            "645978312",
            "978312645",
        ]
    }

    #[test]
    fn test_missing_digits() {
        let unit: [Cell; GRID_SIZE] =
            std::array::from_fn(|i| Cell::from_char("3-7---96-".as_bytes()[i] as char).unwrap());
        assert_eq!(
            missing_digits(&unit),
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D4, Digit::D5, Digit::D8])
        );
        assert_eq!(missing_digits(&[Cell::Blank; GRID_SIZE]), DigitSet::FULL);
    }

    #[test]
    fn test_generate_candidate_complement_of_row() {
        // Row 0 holds 3, 7, 9, 6; the column and box of (0, 1) add no
        // further constraint, so the candidates are exactly the complement
        // within 1-9.
        let mut rows = ["---------"; GRID_SIZE];
        rows[0] = "3-7---96-";
        let mut grid = grid_from(rows);
        let solver = Solver::new(&mut grid);

        let candidates = solver.generate_candidate(0, 1).unwrap();
        assert_eq!(
            candidates,
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D4, Digit::D5, Digit::D8])
        );
    }

    #[test]
    fn test_generate_candidate_intersects_all_three_units() {
        // (4, 4) sees 1 in its row, 2 in its column, and 3 in its box; the
        // candidate set excludes all three.
        let mut rows = ["---------"; GRID_SIZE];
        rows[4] = "1--------";
        rows[0] = "----2----";
        rows[3] = "---3-----";
        let mut grid = grid_from(rows);
        let solver = Solver::new(&mut grid);

        let candidates = solver.generate_candidate(4, 4).unwrap();
        assert_eq!(
            candidates,
            DigitSet::FULL.difference(DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]))
        );
    }

    #[test]
    fn test_generate_candidate_out_of_range() {
        let mut grid = Grid::new();
        let solver = Solver::new(&mut grid);
        assert_eq!(
            solver.generate_candidate(9, 0),
            Err(SolverError::Grid(GridError::RowOutOfRange { row: 9 }))
        );
    }

    #[test]
    fn test_candidate_options_requires_scratch_entry() {
        let mut rows = solved_rows();
        rows[0] = "-23456789";
        let mut grid = grid_from(rows);
        let mut solver = Solver::new(&mut grid);

        // Nothing recorded yet
        assert_eq!(
            solver.candidate_options(0, 0),
            Err(SolverError::ScratchMiss { row: 0, column: 0 })
        );

        solver.generate_candidates().unwrap();
        assert_eq!(
            solver.candidate_options(0, 0),
            Ok(DigitSet::from_iter([Digit::D1]))
        );

        // Non-blank cells never get an entry
        assert_eq!(
            solver.candidate_options(0, 1),
            Err(SolverError::ScratchMiss { row: 0, column: 1 })
        );

        solver.reset_scratch_space();
        assert_eq!(
            solver.candidate_options(0, 0),
            Err(SolverError::ScratchMiss { row: 0, column: 0 })
        );
    }

    #[test]
    fn test_generate_candidates_is_idempotent() {
        let mut rows = solved_rows();
        rows[0] = "---------";
        let mut grid = grid_from(rows);
        let mut solver = Solver::new(&mut grid);

        solver.generate_candidates().unwrap();
        let first = solver.scratch.clone();
        solver.generate_candidates().unwrap();
        assert_eq!(solver.scratch, first);
    }

    #[test]
    fn test_implement_candidates_writes_singletons_and_drops_entries() {
        let mut rows = solved_rows();
        rows[0] = "-23456789";
        let mut grid = grid_from(rows);
        let mut solver = Solver::new(&mut grid);

        solver.generate_candidates().unwrap();
        solver.implement_candidates().unwrap();
        assert_eq!(solver.grid().cell(0, 0).unwrap(), Cell::Digit(Digit::D1));
        // Written entries are dropped from the live scratch space
        assert_eq!(
            solver.candidate_options(0, 0),
            Err(SolverError::ScratchMiss { row: 0, column: 0 })
        );
    }

    #[test]
    fn test_implement_candidates_leaves_multi_candidate_entries() {
        // All four blank cells hold the candidate pair {1, 2}; implementing
        // writes nothing and leaves every entry in place.
        let mut grid = grid_from([
            "--3456789",
            "--6789345",
            "459999999",
            "569999999",
            "679999999",
            "789999999",
            "899999999",
            "939999999",
            "349999999",
        ]);
        let before = grid.clone();
        let mut solver = Solver::new(&mut grid);

        solver.generate_candidates().unwrap();
        solver.implement_candidates().unwrap();
        for (row, column) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(
                solver.candidate_options(row, column),
                Ok(DigitSet::from_iter([Digit::D1, Digit::D2]))
            );
        }
        drop(solver);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_round_writes_are_atomic_within_a_round() {
        // (0, 0) and (0, 8) are both pinned to 5 by their columns at the
        // start of the round. Resolving one would empty the other's
        // candidates if candidates were re-derived mid-round; instead both
        // writes land, proving each was computed against the round-start
        // grid state.
        let mut grid = grid_from([
            "---------",
            "1-------1",
            "2-------2",
            "3-------3",
            "4-------4",
            "6-------6",
            "7-------7",
            "8-------8",
            "9-------9",
        ]);
        let mut solver = Solver::new(&mut grid);

        solver.generate_candidates().unwrap();
        assert_eq!(
            solver.candidate_options(0, 0),
            Ok(DigitSet::from_iter([Digit::D5]))
        );
        assert_eq!(
            solver.candidate_options(0, 8),
            Ok(DigitSet::from_iter([Digit::D5]))
        );

        solver.implement_candidates().unwrap();
        assert_eq!(solver.grid().cell(0, 0).unwrap(), Cell::Digit(Digit::D5));
        assert_eq!(solver.grid().cell(0, 8).unwrap(), Cell::Digit(Digit::D5));

        // The two 5s now clash in row 0, which the diagnostics report
        let report = solver.find_duplicates();
        assert_eq!(report.rows()[&0], DigitSet::from_iter([Digit::D5]));
    }

    #[test]
    fn test_check_solve() {
        let mut complete = grid_from(solved_rows());
        {
            let solver = Solver::new(&mut complete);
            assert!(solver.check_solve());
        }

        // A blank cell fails the check even with no duplicates
        let mut rows = solved_rows();
        rows[4] = "5648-7231";
        let mut with_blank = grid_from(rows);
        {
            let solver = Solver::new(&mut with_blank);
            assert!(!solver.check_solve());
        }

        // A duplicate fails the check even with no blanks
        let mut rows = solved_rows();
        rows[4] = "564897232";
        let mut with_duplicate = grid_from(rows);
        let solver = Solver::new(&mut with_duplicate);
        assert!(!solver.check_solve());
    }

    #[test]
    fn test_solve_already_solved_takes_zero_rounds() {
        let mut grid = grid_from(solved_rows());
        let mut solver = Solver::new(&mut grid);
        let report = solver.solve().unwrap();
        assert_eq!(report.rounds(), 0);
    }

    #[test]
    fn test_solve_naked_singles_in_one_round() {
        // Each blanked cell is the only blank in its row, so every one of
        // them is an immediate naked single.
        let mut rows = solved_rows();
        rows[0] = "-23456789";
        rows[3] = "231-64897";
        rows[8] = "97831264-";
        let mut grid = grid_from(rows);
        let mut solver = Solver::new(&mut grid);

        let report = solver.solve().unwrap();
        assert_eq!(report.rounds(), 1);
        assert!(solver.check_solve());
        assert_eq!(solver.grid(), &grid_from(solved_rows()));
    }

    #[test]
    fn test_solve_cascades_across_rounds() {
        // Blanking all of row 0 and column 0 leaves (0, 0) without a naked
        // single until the first round has filled in the rest of its row
        // and column.
        let mut rows = solved_rows();
        rows[0] = "---------";
        let mut grid = grid_from(rows);
        for r in 1..GRID_SIZE {
            grid.clear(r, 0).unwrap();
        }
        let mut solver = Solver::new(&mut grid);

        let report = solver.solve().unwrap();
        assert_eq!(report.rounds(), 2);
        assert_eq!(solver.grid(), &grid_from(solved_rows()));
    }

    #[test]
    fn test_solve_exhausts_budget_without_singles() {
        // The four blank cells each hold the stable candidate pair {1, 2}:
        // no round ever commits anything, so the budget is the outcome.
        let mut grid = grid_from([
            "--3456789",
            "--6789345",
            "459999999",
            "569999999",
            "679999999",
            "789999999",
            "899999999",
            "939999999",
            "349999999",
        ]);
        let before = grid.clone();
        let mut solver = Solver::new(&mut grid);

        assert_eq!(
            solver.solve(),
            Err(SolverError::BudgetExhausted {
                rounds: ROUND_BUDGET
            })
        );

        // No progress was made on the grid
        drop(solver);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SolverError::BudgetExhausted { rounds: 10_000 }.to_string(),
            "no solution found within 10000 rounds"
        );
        assert_eq!(
            SolverError::ScratchMiss { row: 2, column: 7 }.to_string(),
            "no candidates recorded for cell (2, 7)"
        );
        assert_eq!(
            SolverError::from(GridError::BoxOutOfRange { number: 12 }).to_string(),
            "grid access failed: box number 12 is out of range (0-8)"
        );
    }
}

//! Command-line harness for the Nonet Sudoku solver.
//!
//! Wires puzzle loading, solving, and text rendering together:
//!
//! ```sh
//! nonet solve puzzles/beginner.txt
//! nonet check puzzles/beginner-dupes.txt
//! nonet show puzzles/classic.txt --box-number 4
//! ```
//!
//! Puzzle files are nine lines of nine comma-separated cells, each cell a
//! digit `1`-`9` or `-` for blank. Set `RUST_LOG=info` for progress output.

mod loader;
mod render;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use log::{debug, info};
use nonet_solver::{Solver, SolverError};

use crate::loader::LoadError;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a puzzle file and solve it by naked-single elimination.
    Solve {
        /// Puzzle file: nine lines of nine comma-separated cells.
        file: PathBuf,

        /// Print the parsed grid before solving.
        #[arg(long)]
        show_input: bool,
    },
    /// Load a puzzle file and report duplicate digits per box, row, and column.
    Check {
        /// Puzzle file: nine lines of nine comma-separated cells.
        file: PathBuf,
    },
    /// Load a puzzle file and print it without solving.
    Show {
        /// Puzzle file: nine lines of nine comma-separated cells.
        file: PathBuf,

        /// Print only the given 3x3 box (0-8, row-major) instead of the
        /// full grid.
        #[arg(long, value_name = "N")]
        box_number: Option<usize>,
    },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, LoadError> {
    match args.command {
        Command::Solve { file, show_input } => {
            let mut grid = loader::load_puzzle(&file)?;
            if show_input {
                println!("{}", render::render_grid(&grid));
                println!();
            }

            let outcome = {
                let mut solver = Solver::new(&mut grid);
                solver.solve()
            };
            match outcome {
                Ok(report) => {
                    info!("solved {} in {} rounds", file.display(), report.rounds());
                    println!("{}", render::render_grid(&grid));
                    println!();
                    println!("SOLVED");
                    println!("Took {} rounds", report.rounds());
                    Ok(ExitCode::SUCCESS)
                }
                Err(SolverError::BudgetExhausted { rounds }) => {
                    debug!("gave up on {} after {rounds} rounds", file.display());
                    eprintln!("Could not find a solution");
                    Ok(ExitCode::FAILURE)
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Check { file } => {
            let mut grid = loader::load_puzzle(&file)?;
            let solver = Solver::new(&mut grid);
            let report = solver.find_duplicates();
            print!("{}", render::render_duplicates(&report));
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { file, box_number } => {
            let grid = loader::load_puzzle(&file)?;
            match box_number {
                None => println!("{}", render::render_grid(&grid)),
                Some(number) => match grid.box_by_number(number) {
                    Ok(block) => println!("{}", render::render_box(&block)),
                    Err(err) => {
                        eprintln!("error: {err}");
                        return Ok(ExitCode::FAILURE);
                    }
                },
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

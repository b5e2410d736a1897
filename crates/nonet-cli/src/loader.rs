//! Puzzle-file loading.

use std::{fs, io, path::Path};

use nonet_core::{Grid, GridParseError};

/// Failure loading a puzzle file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read {path}: {source}")]
    Read {
        /// Path of the puzzle file.
        path: String,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The file contents are not a valid puzzle grid.
    #[display("{path}: {source}")]
    Parse {
        /// Path of the puzzle file.
        path: String,
        /// The underlying parse failure.
        source: GridParseError,
    },
}

/// Reads a puzzle file and parses it into a grid.
///
/// The format is nine lines of nine comma-separated cells, each cell a digit
/// `1`-`9` or `-` for blank.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or its contents do not
/// parse.
pub fn load_puzzle(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    text.parse().map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

//! Ephemeral per-round candidate storage.

use std::collections::BTreeMap;

use nonet_core::DigitSet;

/// Candidate scratch space for one elimination round.
///
/// A two-level ordered map from row index to column index to candidate set.
/// Entries exist only for cells that were blank when the round generated
/// candidates, and the whole structure is discarded at the end of every
/// round: candidates are always recomputed from the current grid, never
/// carried over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scratch {
    rows: BTreeMap<usize, BTreeMap<usize, DigitSet>>,
}

impl Scratch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the candidate set for a cell, replacing any previous entry.
    pub(crate) fn record(&mut self, row: usize, column: usize, candidates: DigitSet) {
        self.rows.entry(row).or_default().insert(column, candidates);
    }

    /// Returns the recorded candidate set for a cell, if any.
    pub(crate) fn options(&self, row: usize, column: usize) -> Option<DigitSet> {
        self.rows.get(&row)?.get(&column).copied()
    }

    /// Drops the entry for a cell. Empty row maps are pruned so a key
    /// exists only while it holds candidates.
    pub(crate) fn remove(&mut self, row: usize, column: usize) {
        if let Some(columns) = self.rows.get_mut(&row) {
            columns.remove(&column);
            if columns.is_empty() {
                self.rows.remove(&row);
            }
        }
    }

    /// Takes a point-in-time copy of every entry, in row-major order.
    pub(crate) fn snapshot(&self) -> Vec<(usize, usize, DigitSet)> {
        self.rows
            .iter()
            .flat_map(|(&row, columns)| {
                columns
                    .iter()
                    .map(move |(&column, &candidates)| (row, column, candidates))
            })
            .collect()
    }

    /// Discards every entry.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

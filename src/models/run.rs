use std::collections::BTreeMap;

use super::point::Coordinate;

/// Contiguous vertical stretch of black pixels in one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First row of the run
    pub start_row: usize,
    /// Last row seen so far
    pub current_row: usize,
    /// Number of rows covered (`current_row - start_row + 1`)
    pub length: usize,
}

impl Run {
    /// Start a run of length 1 at `row`
    pub fn new(row: usize) -> Self {
        Self {
            start_row: row,
            current_row: row,
            length: 1,
        }
    }

    /// True when `row` directly follows the last row of this run
    pub fn continues_at(&self, row: usize) -> bool {
        self.current_row + 1 == row
    }

    /// Grow the run by one row ending at `row`
    pub fn extend(&mut self, row: usize) {
        self.length += 1;
        self.current_row = row;
    }
}

/// Per-column run lists, iterated in ascending column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunIndex {
    columns: BTreeMap<usize, Vec<Run>>,
}

impl RunIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one black pixel. Pixels of a column must arrive with increasing rows.
    pub fn push(&mut self, coord: Coordinate) {
        let runs = self.columns.entry(coord.x).or_default();
        match runs.last_mut() {
            Some(last) if last.continues_at(coord.y) => last.extend(coord.y),
            _ => runs.push(Run::new(coord.y)),
        }
    }

    /// Runs recorded for `column`
    pub fn runs(&self, column: usize) -> Option<&[Run]> {
        self.columns.get(&column).map(Vec::as_slice)
    }

    /// Iterate `(column, runs)` in ascending column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Run])> {
        self.columns.iter().map(|(&x, runs)| (x, runs.as_slice()))
    }

    /// Number of columns holding at least one black pixel
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no pixel has been indexed
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of runs across all columns
    pub fn run_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }
}

impl Extend<Coordinate> for RunIndex {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        for coord in iter {
            self.push(coord);
        }
    }
}

impl FromIterator<Coordinate> for RunIndex {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

//! Per-cell candidate tracking.
//!
//! [`CandidateGrid`] stores one [`HeightSet`] per cell in row-major order. It is a plain
//! container: removing a candidate here has no side effects on other cells. Cascading
//! eliminations are the solver's job.
//!
//! # Examples
//!
//! ```
//! use skyline_core::{CandidateGrid, GridSize};
//!
//! let size = GridSize::new(3).unwrap();
//! let mut grid = CandidateGrid::new(size);
//! assert_eq!(grid.total_candidates(), 27);
//!
//! grid.remove_candidate(4, 2);
//! assert_eq!(grid[4].to_string(), "13");
//! assert!(!grid.is_solved());
//! ```

use std::ops::Index;

use crate::{ConsistencyError, GridSize, HeightSet, Line, LineCells};

/// Candidate heights for every cell of an `N×N` grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateGrid {
    size: GridSize,
    cells: Vec<HeightSet>,
}

impl CandidateGrid {
    /// Creates a grid in which every cell may hold any height `1..=N`.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![size.heights(); size.cell_count()],
        }
    }

    /// Creates a grid from explicit candidate sets in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not hold exactly `N²` sets.
    #[must_use]
    pub fn from_cells(size: GridSize, cells: Vec<HeightSet>) -> Self {
        assert_eq!(
            cells.len(),
            size.cell_count(),
            "expected {} cells for a {size} grid",
            size.cell_count()
        );
        Self { size, cells }
    }

    /// Returns the grid size.
    #[must_use]
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the candidates of a cell.
    #[must_use]
    #[inline]
    pub fn candidates_at(&self, cell: usize) -> HeightSet {
        self.cells[cell]
    }

    /// Removes a candidate from a single cell.
    ///
    /// Returns `true` if the candidate was present.
    #[inline]
    pub fn remove_candidate(&mut self, cell: usize, height: u8) -> bool {
        self.cells[cell].remove(height)
    }

    /// Returns all candidate sets in row-major order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[HeightSet] {
        &self.cells
    }

    /// Returns the cells of `line` that still hold `height`.
    #[must_use]
    pub fn holders(&self, line: Line, height: u8) -> LineCells {
        self.size
            .line_cells(line)
            .into_iter()
            .filter(|&cell| self.cells[cell].contains(height))
            .collect()
    }

    /// Returns the total number of candidates over `cells`.
    #[must_use]
    pub fn count_candidates(&self, cells: &[usize]) -> usize {
        cells.iter().map(|&cell| self.cells[cell].len()).sum()
    }

    /// Returns the total number of candidates over the whole grid.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.cells.iter().map(|set| set.len()).sum()
    }

    /// Returns the number of cells with exactly one candidate.
    #[must_use]
    pub fn decided_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if every cell is down to a single candidate.
    ///
    /// Since no cell of a consistent grid is empty, this is the same as the candidate
    /// total being exactly `N²`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.total_candidates() == self.size.cell_count()
    }

    /// Returns `true` if every cell's candidates are a subset of the same cell in `other`.
    ///
    /// # Panics
    ///
    /// Panics if the grids differ in size.
    #[must_use]
    pub fn is_refinement_of(&self, other: &Self) -> bool {
        assert_eq!(self.size, other.size);
        self.cells
            .iter()
            .zip(&other.cells)
            .all(|(mine, theirs)| mine.is_subset(*theirs))
    }

    /// Returns the decided height of each cell, or `None` for undecided cells.
    #[must_use]
    pub fn to_heights(&self) -> Vec<Option<u8>> {
        self.cells.iter().map(|set| set.as_single()).collect()
    }

    /// Checks that no cell is empty and no line repeats a decided height.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        if let Some(cell) = self.cells.iter().position(|set| set.is_empty()) {
            return Err(ConsistencyError::EmptyCell {
                cell,
                position: self.size.position(cell),
            });
        }
        for line in self.size.lines() {
            let mut seen = HeightSet::new();
            for cell in self.size.line_cells(line) {
                if let Some(height) = self.cells[cell].as_single()
                    && !seen.insert(height)
                {
                    return Err(ConsistencyError::DuplicateHeight { line, height });
                }
            }
        }
        Ok(())
    }
}

impl Index<usize> for CandidateGrid {
    type Output = HeightSet;

    #[inline]
    fn index(&self, cell: usize) -> &HeightSet {
        &self.cells[cell]
    }
}

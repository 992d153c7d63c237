//! Test utilities for solver stages.
//!
//! [`GridTester`] tracks the initial and current state of a [`PropagationGrid`], runs
//! solver stages on it, and asserts how candidates changed.

use skyline_core::{Clues, HeightSet};

use crate::{PropagationGrid, SolverStats, apply_edge_clues, reconcile_line};

/// A test harness for solver stages.
///
/// # Method Chaining
///
/// All methods take and return `self`, enabling fluent chaining.
///
/// # Panics
///
/// Stage methods panic if the stage fails, and assertion methods panic with detailed
/// messages. Both use `#[track_caller]` to report the calling test.
#[derive(Debug)]
pub struct GridTester {
    initial: PropagationGrid,
    current: PropagationGrid,
}

impl GridTester {
    /// Creates a tester for a blank board with the given clues.
    #[track_caller]
    pub fn new(clues: &[u8]) -> Self {
        let grid = PropagationGrid::new(Clues::try_from(clues).unwrap());
        Self {
            initial: grid.clone(),
            current: grid,
        }
    }

    /// Returns the current grid.
    pub fn into_grid(self) -> PropagationGrid {
        self.current
    }

    /// Applies the direct clue bounds without draining the queue.
    #[track_caller]
    pub fn apply_edge_clues(mut self) -> Self {
        apply_edge_clues(&mut self.current).unwrap();
        self
    }

    /// Drains the queue.
    #[track_caller]
    pub fn propagate(mut self) -> Self {
        self.current.propagate().unwrap();
        self
    }

    /// Reconciles the line of one clue slot.
    #[track_caller]
    pub fn reconcile(mut self, clue_index: usize, stats: &mut SolverStats) -> Self {
        reconcile_line(&mut self.current, clue_index, stats).unwrap();
        self
    }

    /// Asserts that a cell is exactly `heights`.
    #[track_caller]
    pub fn assert_candidates<C>(self, cell: usize, heights: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let expected = HeightSet::from_iter(heights);
        let current = self.current.candidates_at(cell);
        assert_eq!(
            current, expected,
            "Expected cell {cell} to hold {expected:?}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that an initially undecided cell now holds only `height`.
    #[track_caller]
    pub fn assert_resolved(self, cell: usize, height: u8) -> Self {
        let initial = self.initial.candidates_at(cell);
        assert!(
            initial.len() > 1,
            "Expected cell {cell} to start undecided, but had {initial:?}"
        );
        self.assert_candidates(cell, [height])
    }

    /// Asserts that exactly `heights` were removed from a cell.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, cell: usize, heights: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let expected = HeightSet::from_iter(heights);
        let initial = self.initial.candidates_at(cell);
        let current = self.current.candidates_at(cell);
        let removed = initial.difference(current);
        assert_eq!(
            removed, expected,
            "Expected exactly {expected:?} to be removed from cell {cell}, but removed {removed:?} (initial: {initial:?}, current: {current:?})"
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    #[track_caller]
    pub fn assert_no_change(self, cell: usize) -> Self {
        let initial = self.initial.candidates_at(cell);
        let current = self.current.candidates_at(cell);
        assert_eq!(
            initial, current,
            "Expected no change at cell {cell}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }

    /// Asserts the whole grid.
    ///
    /// `expected` lists every cell in row-major order as its formatted candidates
    /// (`"3"`, `"124"`), separated by whitespace.
    #[track_caller]
    pub fn assert_grid(self, expected: &str) -> Self {
        let expected: Vec<&str> = expected.split_whitespace().collect();
        let current: Vec<String> = self
            .current
            .candidates()
            .as_slice()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(current, expected, "Unexpected candidates");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_initial_state() {
        GridTester::new(&[0; 12])
            .assert_no_change(0)
            .assert_candidates(0, [1, 2, 3])
            .assert_removed_exact(0, Vec::new());
    }

    #[test]
    #[should_panic(expected = "Expected no change at cell 0")]
    fn test_assert_no_change_panics_on_change() {
        GridTester::new(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
            .apply_edge_clues()
            .assert_no_change(0);
    }

    #[test]
    #[should_panic(expected = "to start undecided")]
    fn test_assert_resolved_requires_undecided_start() {
        GridTester::new(&[0; 4]).assert_resolved(0, 1);
    }

    #[test]
    fn test_assert_grid() {
        GridTester::new(&[0; 8]).assert_grid("12 12 12 12");
    }
}

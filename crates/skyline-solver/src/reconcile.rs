use skyline_core::{HeightSet, MAX_SIZE, visible_count};
use tinyvec::ArrayVec;

use crate::{LinePermutations, PropagationGrid, SolverError, SolverStats};

fn matches_clue<I>(heights: I, clue: u8) -> bool
where
    I: IntoIterator<Item = u8>,
{
    clue == 0 || visible_count(heights) == usize::from(clue)
}

/// Prunes one line against the clue at `clue_index` and its opposite clue.
///
/// Every assignment of distinct candidate heights to the line that satisfies both clues
/// is enumerated. A height that appears at a position in none of those assignments is
/// removed from that cell, and the queue is drained before returning. Lines with no
/// clue on either end are skipped.
///
/// Returns `Ok(true)` if any candidate was removed from the line itself.
///
/// # Errors
///
/// Returns [`SolverError::Contradiction`] if no assignment satisfies the clues, or if
/// the resulting propagation finds one.
///
/// # Examples
///
/// ```
/// use skyline_core::Clues;
/// use skyline_solver::{PropagationGrid, SolverStats, reconcile_line};
///
/// // Column 0 of a 3x3 grid sees two buildings from both the top and the bottom.
/// let clues = Clues::new(vec![2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0])?;
/// let mut grid = PropagationGrid::new(clues);
/// let mut stats = SolverStats::default();
///
/// assert!(reconcile_line(&mut grid, 0, &mut stats)?);
/// assert_eq!(grid.candidates_at(3).to_string(), "3");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn reconcile_line(
    grid: &mut PropagationGrid,
    clue_index: usize,
    stats: &mut SolverStats,
) -> Result<bool, SolverError> {
    let size = grid.size();
    let (clue, opposite) = grid.clues().get_pair(clue_index);
    if clue == 0 && opposite == 0 {
        return Ok(false);
    }

    let cells = size.clue_cells(clue_index);
    let domains: ArrayVec<[HeightSet; MAX_SIZE]> =
        cells.iter().map(|&cell| grid.candidates_at(cell)).collect();
    let mut allowed: ArrayVec<[HeightSet; MAX_SIZE]> =
        domains.iter().map(|_| HeightSet::new()).collect();

    for heights in LinePermutations::new(&domains) {
        stats.permutations_examined += 1;
        if !matches_clue(heights.iter().copied(), clue)
            || !matches_clue(heights.iter().rev().copied(), opposite)
        {
            continue;
        }
        stats.permutations_accepted += 1;
        for (allowed, &height) in allowed.iter_mut().zip(&heights) {
            allowed.insert(height);
        }
        // Nothing left to learn once every candidate has been seen.
        if allowed == domains {
            break;
        }
    }
    stats.lines_reconciled += 1;

    let mut changed = false;
    for ((&cell, domain), allowed) in cells.iter().zip(&domains).zip(&allowed) {
        for height in domain.difference(*allowed) {
            changed |= grid.eliminate(cell, height)?;
        }
    }
    log::debug!(
        "reconciled {} (clues {clue}/{opposite}), changed: {changed}",
        size.clue_line(clue_index)
    );
    grid.propagate()?;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GridTester;

    const TWO_TWO: [u8; 12] = [2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0];

    #[test]
    fn test_unclued_line_is_skipped() {
        let mut grid = GridTester::new(&TWO_TWO).into_grid();
        let mut stats = SolverStats::default();
        assert!(!reconcile_line(&mut grid, 1, &mut stats).unwrap());
        assert_eq!(stats, SolverStats::default());
    }

    #[test]
    fn test_keeps_only_heights_of_matching_permutations() {
        // Only 1-3-2 and 2-3-1 show two buildings from both ends.
        let mut stats = SolverStats::default();
        GridTester::new(&TWO_TWO)
            .reconcile(0, &mut stats)
            .assert_grid(
                "
                12 123 123
                3  12  12
                12 123 123
                ",
            );
        assert_eq!(stats.lines_reconciled, 1);
        assert_eq!(stats.permutations_examined, 6);
        assert_eq!(stats.permutations_accepted, 2);
    }

    #[test]
    fn test_stops_early_once_nothing_can_be_pruned() {
        let mut stats = SolverStats::default();
        let tester = GridTester::new(&TWO_TWO).reconcile(0, &mut stats);

        let mut stats = SolverStats::default();
        let mut grid = tester.into_grid();
        assert!(!reconcile_line(&mut grid, 0, &mut stats).unwrap());
        assert_eq!(stats.permutations_examined, 2);
    }

    #[test]
    fn test_opposite_slot_reads_line_backwards() {
        // Same line, addressed from the bottom clue.
        let mut stats = SolverStats::default();
        GridTester::new(&TWO_TWO)
            .reconcile(8, &mut stats)
            .assert_resolved(3, 3);
    }

    #[test]
    fn test_unsatisfiable_clues_are_contradiction() {
        let mut grid = GridTester::new(&[3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0]).into_grid();
        let mut stats = SolverStats::default();
        let err = reconcile_line(&mut grid, 0, &mut stats).unwrap_err();
        assert!(err.is_contradiction());
        assert_eq!(stats.permutations_accepted, 0);
    }
}

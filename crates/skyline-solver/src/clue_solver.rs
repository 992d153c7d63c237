use skyline_core::{Board, Clues};

use crate::{PropagationGrid, SolverError, apply_edge_clues, reconcile_line};

/// Counters collected during a solving run.
///
/// # Examples
///
/// ```
/// use skyline_solver::ClueSolver;
///
/// let solution = ClueSolver::new().solve_values(&[0, 0, 1, 2, 0, 2, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0])?;
/// let stats = solution.stats();
/// assert!(stats.permutations_accepted <= stats.permutations_examined);
/// println!("{} sweeps, {} eliminations", stats.sweeps, stats.eliminations);
/// # Ok::<(), skyline_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Full sweeps over the clued lines.
    pub sweeps: usize,
    /// Lines passed through the reconciler.
    pub lines_reconciled: usize,
    /// Candidate-consistent permutations enumerated.
    pub permutations_examined: usize,
    /// Permutations that satisfied both clues of their line.
    pub permutations_accepted: usize,
    /// Candidates removed, including by propagation.
    pub eliminations: usize,
    /// Queued tasks executed.
    pub tasks_processed: usize,
}

impl SolverStats {
    fn record_grid(&mut self, grid: &PropagationGrid) {
        self.eliminations = grid.eliminations();
        self.tasks_processed = grid.tasks_processed();
    }
}

/// The order in which a sweep visits clued lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SweepOrder {
    /// Lines with the fewest remaining candidates first, recomputed every sweep.
    #[default]
    CheapestFirst,
    /// Top clues left to right, then left clues bottom to top.
    Clockwise,
}

/// How a run without contradictions ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// Every cell holds exactly one height.
    #[display("solved")]
    Solved,
    /// A full sweep removed nothing and some cells are still undecided.
    ///
    /// The clues may admit several solutions, or need search to tell them apart.
    #[display("stalled")]
    Stalled,
}

/// The result of [`ClueSolver::solve`].
#[derive(Debug, Clone)]
pub struct Solution {
    outcome: SolveOutcome,
    board: Board,
    stats: SolverStats,
}

impl Solution {
    /// Returns how the run ended.
    #[must_use]
    pub fn outcome(&self) -> SolveOutcome {
        self.outcome
    }

    /// Returns `true` if the board is fully solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Returns the final board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the run statistics.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Consumes the solution and returns the final board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// A propagation-only skyscraper solver.
///
/// A run has three phases:
///
/// 1. [`prepare`](Self::prepare) applies every clue's direct bounds and drains the queue.
/// 2. [`sweep`](Self::sweep) reconciles each clued line against its clues, in
///    [`SweepOrder`].
/// 3. [`run`](Self::run) repeats sweeps until the board is solved or a sweep removes
///    nothing.
///
/// There is no search: puzzles that propagation cannot finish end as
/// [`SolveOutcome::Stalled`].
///
/// # Examples
///
/// ```
/// use skyline_solver::{ClueSolver, SolveOutcome};
///
/// let solver = ClueSolver::new();
/// let solution = solver.solve_values(&[0, 0, 1, 2, 0, 2, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0])?;
/// assert_eq!(solution.outcome(), SolveOutcome::Solved);
/// assert_eq!(
///     solution.board().heights(),
///     Some(vec![2, 1, 4, 3, 3, 4, 1, 2, 4, 2, 3, 1, 1, 3, 2, 4])
/// );
/// # Ok::<(), skyline_solver::SolverError>(())
/// ```
///
/// # Step-by-step solving
///
/// ```
/// use skyline_core::Clues;
/// use skyline_solver::{ClueSolver, SolverStats};
///
/// let solver = ClueSolver::new();
/// let clues: Clues = "0,0,1,2, 0,2,0,0, 0,3,0,0, 0,1,0,0".parse()?;
/// let mut grid = solver.prepare(clues)?;
/// let mut stats = SolverStats::default();
///
/// while !grid.is_solved() && solver.sweep(&mut grid, &mut stats)? {
///     println!("{} candidates left", grid.candidates().total_candidates());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClueSolver {
    order: SweepOrder,
}

impl ClueSolver {
    /// Creates a solver that visits the cheapest lines first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given sweep order.
    #[must_use]
    pub fn with_order(order: SweepOrder) -> Self {
        Self { order }
    }

    /// Returns the sweep order.
    #[must_use]
    pub fn order(&self) -> SweepOrder {
        self.order
    }

    /// Solves a puzzle from raw clue values.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidClues`] if the values do not form a clue set, and
    /// otherwise the errors of [`solve`](Self::solve).
    pub fn solve_values(&self, values: &[u8]) -> Result<Solution, SolverError> {
        self.solve(Clues::try_from(values)?)
    }

    /// Solves a puzzle as far as propagation allows.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the clues admit no solution.
    pub fn solve(&self, clues: Clues) -> Result<Solution, SolverError> {
        log::debug!("solving {} puzzle: {clues}", clues.size());
        let mut stats = SolverStats::default();
        let mut grid = self.prepare(clues)?;
        let outcome = self.run(&mut grid, &mut stats)?;
        stats.record_grid(&grid);
        log::debug!("{outcome} after {} sweeps", stats.sweeps);
        Ok(Solution {
            outcome,
            board: grid.into_board(),
            stats,
        })
    }

    /// Builds a grid for `clues`, applies the direct clue bounds, and drains the queue.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the clues contradict each other directly.
    pub fn prepare(&self, clues: Clues) -> Result<PropagationGrid, SolverError> {
        let mut grid = PropagationGrid::new(clues);
        apply_edge_clues(&mut grid)?;
        grid.propagate()?;
        Ok(grid)
    }

    /// Sweeps until the grid is solved or a sweep removes nothing.
    ///
    /// Running again on the result changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if a line admits no assignment.
    pub fn run(
        &self,
        grid: &mut PropagationGrid,
        stats: &mut SolverStats,
    ) -> Result<SolveOutcome, SolverError> {
        grid.propagate()?;
        loop {
            if grid.is_solved() {
                return Ok(SolveOutcome::Solved);
            }
            if !self.sweep(grid, stats)? {
                return Ok(SolveOutcome::Stalled);
            }
        }
    }

    /// Reconciles every clued line once, stopping early if the grid becomes solved.
    ///
    /// Returns `Ok(true)` if any candidate was removed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if a line admits no assignment.
    pub fn sweep(
        &self,
        grid: &mut PropagationGrid,
        stats: &mut SolverStats,
    ) -> Result<bool, SolverError> {
        stats.sweeps += 1;
        let before = grid.candidates().total_candidates();
        let schedule = self.schedule(grid);
        log::debug!(
            "sweep {}: {} lines, {before} candidates",
            stats.sweeps,
            schedule.len()
        );
        for clue_index in schedule {
            reconcile_line(grid, clue_index, stats)?;
            if grid.is_solved() {
                break;
            }
        }
        Ok(grid.candidates().total_candidates() != before)
    }

    /// Returns the canonical clue slots whose line carries a clue, in visiting order.
    fn schedule(self, grid: &PropagationGrid) -> Vec<usize> {
        let size = grid.size();
        let clues = grid.clues();
        let candidates = grid.candidates();
        let mut schedule: Vec<usize> = size
            .canonical_clues()
            .filter(|&index| clues.get_pair(index) != (0, 0))
            .collect();
        if self.order == SweepOrder::CheapestFirst {
            // Stable, so ties keep their clockwise order.
            schedule.sort_by_key(|&index| candidates.count_candidates(&size.clue_cells(index)));
        }
        schedule
    }
}

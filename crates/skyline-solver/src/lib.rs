//! Constraint-propagation solver for skyscraper puzzles.
//!
//! # Overview
//!
//! - [`PropagationGrid`] owns the candidates and a FIFO task queue. Removing a candidate
//!   queues peer eliminations for newly decided cells and resolutions for heights left
//!   with a single place in a line; [`PropagationGrid::propagate`] drains the queue.
//! - [`apply_edge_clues`] seeds the bounds each clue implies on its own.
//! - [`reconcile_line`] enumerates the candidate-consistent permutations of one line
//!   with [`LinePermutations`] and removes every height no clue-satisfying permutation
//!   uses.
//! - [`ClueSolver`] sweeps the clued lines, cheapest first, until the board is solved
//!   or a sweep makes no progress.
//!
//! The solver never guesses. A run ends [`SolveOutcome::Solved`],
//! [`SolveOutcome::Stalled`], or with a [`SolverError`].
//!
//! # Examples
//!
//! ```
//! use skyline_solver::{ClueSolver, SolveOutcome};
//!
//! let solution = ClueSolver::new().solve_values(&[0; 16])?;
//! assert_eq!(solution.outcome(), SolveOutcome::Stalled);
//! # Ok::<(), skyline_solver::SolverError>(())
//! ```

pub use self::{
    clue_solver::*, edge_clues::*, error::*, permutations::*, propagation_grid::*, reconcile::*,
    task::*,
};

mod clue_solver;
mod edge_clues;
mod error;
mod permutations;
mod propagation_grid;
mod reconcile;
mod task;

#[cfg(test)]
mod testing;

use std::collections::VecDeque;

use skyline_core::{Board, CandidateGrid, Clues, GridSize, HeightSet};

use crate::{Contradiction, InternalError, SolverError, Task};

/// Solver state: candidates, clues, and the pending task queue.
///
/// `PropagationGrid` is the only surface through which the solver mutates candidates.
/// Every removal goes through [`eliminate`](Self::eliminate), which checks for
/// contradictions and queues the follow-up work a removal implies:
///
/// - a cell that drops to one candidate queues [`Task::PropagateFrom`];
/// - a line left with a single holder of the removed height queues [`Task::ResolveTo`].
///
/// Queued work runs in FIFO order when [`propagate`](Self::propagate) drains the queue.
/// The order only affects intermediate states; the drained fixpoint is the same.
///
/// # Examples
///
/// ```
/// use skyline_core::Clues;
/// use skyline_solver::PropagationGrid;
///
/// let mut grid = PropagationGrid::new(Clues::new(vec![0; 12])?);
/// grid.eliminate(0, 1)?;
/// grid.eliminate(0, 2)?;
/// grid.propagate()?;
///
/// assert_eq!(grid.candidates_at(0).to_string(), "3");
/// assert_eq!(grid.candidates_at(1).to_string(), "12");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PropagationGrid {
    clues: Clues,
    candidates: CandidateGrid,
    queue: VecDeque<Task>,
    eliminations: usize,
    tasks_processed: usize,
}

impl From<Board> for PropagationGrid {
    fn from(board: Board) -> Self {
        let (clues, candidates) = board.into_parts();
        Self {
            clues,
            candidates,
            queue: VecDeque::new(),
            eliminations: 0,
            tasks_processed: 0,
        }
    }
}

impl PropagationGrid {
    /// Creates a grid with every height possible in every cell.
    #[must_use]
    pub fn new(clues: Clues) -> Self {
        Self::from(Board::new(clues))
    }

    /// Returns the grid size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.clues.size()
    }

    /// Returns the clues.
    #[inline]
    #[must_use]
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Returns the candidates.
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &CandidateGrid {
        &self.candidates
    }

    /// Returns the candidates of a cell.
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, cell: usize) -> HeightSet {
        self.candidates[cell]
    }

    /// Returns `true` if every cell is decided.
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.is_solved()
    }

    /// Returns the number of tasks waiting in the queue.
    #[inline]
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// Returns the number of candidates removed so far.
    #[inline]
    #[must_use]
    pub fn eliminations(&self) -> usize {
        self.eliminations
    }

    /// Returns the number of tasks executed so far.
    #[inline]
    #[must_use]
    pub fn tasks_processed(&self) -> usize {
        self.tasks_processed
    }

    /// Returns a snapshot of the board.
    #[must_use]
    pub fn to_board(&self) -> Board {
        Board::from_parts(self.clues.clone(), self.candidates.clone())
    }

    /// Consumes the grid and returns the board, dropping any pending tasks.
    #[must_use]
    pub fn into_board(self) -> Board {
        Board::from_parts(self.clues, self.candidates)
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        log::trace!("queue {task}");
        self.queue.push_back(task);
    }

    /// Removes `height` from the candidates of `cell`.
    ///
    /// Does nothing and returns `Ok(false)` if `height` was not a candidate. Otherwise
    /// queues the tasks implied by the removal and returns `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction::EmptyCell`] if the cell has no candidates left, or
    /// [`Contradiction::MissingHeight`] if the cell's row or column no longer has any
    /// place for `height`.
    pub fn eliminate(&mut self, cell: usize, height: u8) -> Result<bool, Contradiction> {
        if !self.candidates.remove_candidate(cell, height) {
            return Ok(false);
        }
        self.eliminations += 1;
        let size = self.size();
        let remaining = self.candidates[cell];
        log::trace!("eliminate {height} from {cell}, leaving {{{remaining}}}");

        if remaining.is_empty() {
            let contradiction = Contradiction::EmptyCell {
                cell,
                position: size.position(cell),
                height,
            };
            log::debug!("{contradiction}");
            return Err(contradiction);
        }
        if remaining.len() == 1 {
            self.push_task(Task::PropagateFrom { cell });
        }

        for line in size.lines_through(cell) {
            let holders = self.candidates.holders(line, height);
            match holders.as_slice() {
                [] => {
                    let contradiction = Contradiction::MissingHeight { line, height };
                    log::debug!("{contradiction}");
                    return Err(contradiction);
                }
                &[holder] => self.push_task(Task::ResolveTo {
                    cell: holder,
                    height,
                }),
                _ => {}
            }
        }
        Ok(true)
    }

    /// Removes every candidate of `cell` except `height`.
    ///
    /// Returns `Ok(true)` if any candidate was removed.
    ///
    /// # Errors
    ///
    /// Returns a [`Contradiction`] if any of the removals does, in particular when
    /// `height` was not a candidate of `cell`.
    pub fn resolve_to(&mut self, cell: usize, height: u8) -> Result<bool, Contradiction> {
        let mut changed = false;
        for other in self.candidates[cell] {
            if other != height {
                changed |= self.eliminate(cell, other)?;
            }
        }
        Ok(changed)
    }

    /// Runs queued tasks until the queue is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if a task empties a cell or a line, and
    /// [`SolverError::Internal`] if a [`Task::PropagateFrom`] finds its cell undecided.
    pub fn propagate(&mut self) -> Result<(), SolverError> {
        while let Some(task) = self.queue.pop_front() {
            self.tasks_processed += 1;
            match task {
                Task::PropagateFrom { cell } => {
                    let remaining = self.candidates[cell];
                    let Some(height) = remaining.as_single() else {
                        return Err(
                            InternalError::PropagateFromUndecided { cell, remaining }.into(),
                        );
                    };
                    let size = self.size();
                    for line in size.lines_through(cell) {
                        for peer in size.line_cells(line) {
                            if peer != cell {
                                self.eliminate(peer, height)?;
                            }
                        }
                    }
                }
                Task::ResolveTo { cell, height } => {
                    self.resolve_to(cell, height)?;
                }
            }
        }
        Ok(())
    }
}

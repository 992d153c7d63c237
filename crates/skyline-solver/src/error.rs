use skyline_core::{ClueError, ConsistencyError, HeightSet, Line, Position};

/// Errors that abort a solving run.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolverError {
    /// The clues admit no solution.
    #[display("contradiction: {_0}")]
    Contradiction(Contradiction),
    /// The clue list was malformed.
    #[display("invalid clues: {_0}")]
    InvalidClues(ClueError),
    /// The candidate grid was inconsistent.
    #[display("inconsistent candidates: {_0}")]
    Inconsistent(ConsistencyError),
    /// The solver broke one of its own invariants.
    #[display("internal error: {_0}")]
    Internal(InternalError),
}

/// A proof that the current candidates admit no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Contradiction {
    /// Removing a height left a cell without candidates.
    #[display("removing {height} emptied cell {cell} {position}")]
    EmptyCell {
        /// Cell index.
        cell: usize,
        /// Cell coordinate.
        position: Position,
        /// The height whose removal emptied the cell.
        height: u8,
    },
    /// A height has no remaining place in a line.
    #[display("height {height} has no place left in {line}")]
    MissingHeight {
        /// The line that lost every holder.
        line: Line,
        /// The missing height.
        height: u8,
    },
}

/// Invariant violations inside the solver.
///
/// These indicate a defect in task sequencing, never a property of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InternalError {
    /// A propagation task ran on a cell that was not decided.
    #[display("cannot propagate from undecided cell {cell} (candidates {remaining})")]
    PropagateFromUndecided {
        /// Cell index.
        cell: usize,
        /// The candidates the cell still held.
        remaining: HeightSet,
    },
}

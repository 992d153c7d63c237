//! Error types for clue parsing and board consistency.

use crate::{Line, Position};

/// Errors raised while building [`Clues`](crate::Clues) from raw input.
///
/// Every variant is detected before any solving work begins.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClueError {
    /// No clues were given.
    #[display("no clues given")]
    Empty,
    /// The clue count is not `4N` for any integer `N`.
    #[display("clue count {len} is not a multiple of 4")]
    LengthNotMultipleOfFour {
        /// Number of clues given.
        len: usize,
    },
    /// The derived grid size exceeds the supported maximum.
    #[display("grid size {size} is larger than 32")]
    TooLarge {
        /// The derived grid size `N`.
        size: usize,
    },
    /// A clue is larger than the grid size.
    #[display("clue {clue} at index {index} exceeds the grid size {size}")]
    OutOfRange {
        /// Clue slot.
        index: usize,
        /// Clue value.
        clue: u8,
        /// Grid size `N`.
        size: usize,
    },
    /// A token in a textual clue list is not a number.
    #[display("invalid clue token {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
}

/// Contradictions found by [`CandidateGrid::check_consistency`](crate::CandidateGrid::check_consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A cell has no candidates left.
    #[display("no candidates remain at cell {cell} {position}")]
    EmptyCell {
        /// Cell index.
        cell: usize,
        /// Cell coordinate.
        position: Position,
    },
    /// Two decided cells of one line hold the same height.
    #[display("height {height} is decided more than once in {line}")]
    DuplicateHeight {
        /// The offending line.
        line: Line,
        /// The duplicated height.
        height: u8,
    },
}

//! The puzzle board handed to consumers.
//!
//! A [`Board`] pairs the [`Clues`] with the [`CandidateGrid`] reached by a solving run.
//! Renderers read it; they never solve.

use crate::{CandidateGrid, Clues, GridSize, HeightSet, visible_count};

/// Clues plus per-cell candidates.
///
/// # Examples
///
/// ```
/// use skyline_core::{Board, Clues};
///
/// let clues = Clues::new(vec![0; 16])?;
/// let board = Board::new(clues);
/// assert!(!board.is_solved());
/// assert_eq!(board.heights(), None);
/// # Ok::<(), skyline_core::ClueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    clues: Clues,
    candidates: CandidateGrid,
}

impl Board {
    /// Creates a board with every height possible in every cell.
    #[must_use]
    pub fn new(clues: Clues) -> Self {
        let candidates = CandidateGrid::new(clues.size());
        Self { clues, candidates }
    }

    /// Assembles a board from its parts.
    ///
    /// # Panics
    ///
    /// Panics if the clues and the candidates describe different grid sizes.
    #[must_use]
    pub fn from_parts(clues: Clues, candidates: CandidateGrid) -> Self {
        assert_eq!(
            clues.size(),
            candidates.size(),
            "clues and candidates disagree on the grid size"
        );
        Self { clues, candidates }
    }

    /// Splits the board into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Clues, CandidateGrid) {
        (self.clues, self.candidates)
    }

    /// Returns the grid size.
    #[must_use]
    #[inline]
    pub fn size(&self) -> GridSize {
        self.clues.size()
    }

    /// Returns the clues.
    #[must_use]
    #[inline]
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Returns the candidates.
    #[must_use]
    #[inline]
    pub fn candidates(&self) -> &CandidateGrid {
        &self.candidates
    }

    /// Returns `true` if every cell holds exactly one height.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.is_solved()
    }

    /// Returns the height of every cell in row-major order, if the board is solved.
    #[must_use]
    pub fn heights(&self) -> Option<Vec<u8>> {
        self.candidates.to_heights().into_iter().collect()
    }

    /// Returns `true` if the board is solved and every row and column is a
    /// permutation of `1..=N`.
    #[must_use]
    pub fn is_latin_square(&self) -> bool {
        let Some(heights) = self.heights() else {
            return false;
        };
        let size = self.size();
        size.lines().all(|line| {
            let seen: HeightSet = size
                .line_cells(line)
                .into_iter()
                .map(|cell| heights[cell])
                .collect();
            seen == size.heights()
        })
    }

    /// Returns `true` if the board is solved and every nonzero clue matches the number
    /// of buildings visible from its slot.
    #[must_use]
    pub fn satisfies_clues(&self) -> bool {
        let Some(heights) = self.heights() else {
            return false;
        };
        let size = self.size();
        (0..size.clue_count()).all(|index| {
            let clue = self.clues.get(index);
            clue == 0
                || visible_count(size.clue_cells(index).into_iter().map(|cell| heights[cell]))
                    == usize::from(clue)
        })
    }
}

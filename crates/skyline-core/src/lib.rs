//! Core data structures for skyscraper puzzles.
//!
//! A skyscraper puzzle is an `N×N` grid in which every row and column is a permutation of
//! the heights `1..=N`, framed by `4N` edge clues counting the buildings visible from that
//! edge. This crate provides the board model shared by the solver and by renderers.
//!
//! # Overview
//!
//! 1. **Line indexing** - [`line`]: [`GridSize`] maps between cell indices, coordinates,
//!    rows/columns, and the clockwise clue slots, including each slot's opposite.
//! 2. **Candidates** - [`height_set`]: [`HeightSet`], a `u32` bitset of possible heights.
//!    [`candidate_grid`]: [`CandidateGrid`], one set per cell.
//! 3. **Puzzle frame** - [`clues`]: validated [`Clues`]. [`board`]: the [`Board`] handed to
//!    consumers, with validity checks for solved boards.
//! 4. **Visibility** - [`visible_count`], the clue function itself.
//!
//! # Examples
//!
//! ```
//! use skyline_core::{Board, Clues, GridSize};
//!
//! let clues: Clues = "0,0,1,2,0,2,0,0,0,3,0,0,0,1,0,0".parse()?;
//! let board = Board::new(clues);
//!
//! let size = board.size();
//! assert_eq!(size, GridSize::new(4).unwrap());
//! assert_eq!(board.candidates()[0].to_string(), "1234");
//! # Ok::<(), skyline_core::ClueError>(())
//! ```

pub mod board;
pub mod candidate_grid;
pub mod clues;
pub mod error;
pub mod height_set;
pub mod line;
pub mod position;
mod visibility;

pub use self::{
    board::Board,
    candidate_grid::CandidateGrid,
    clues::Clues,
    error::{ClueError, ConsistencyError},
    height_set::{HeightSet, MAX_SIZE},
    line::{Edge, GridSize, Line, LineCells},
    position::Position,
    visibility::visible_count,
};

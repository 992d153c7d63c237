//! Edge clues.
//!
//! [`Clues`] holds the `4N` clue values in clockwise slot order (see [`line`](crate::line)),
//! where `0` means "no information". Construction validates the input, so a `Clues` value
//! always describes a well-formed puzzle frame.
//!
//! # Examples
//!
//! ```
//! use skyline_core::{Clues, Edge};
//!
//! let clues: Clues = "0,0,1,2, 0,2,0,0, 0,3,0,0, 0,1,0,0".parse()?;
//! assert_eq!(clues.size().get(), 4);
//!
//! // Bottom clues in visual order (left to right).
//! assert_eq!(clues.edge(Edge::Bottom).collect::<Vec<_>>(), vec![0, 0, 3, 0]);
//! # Ok::<(), skyline_core::ClueError>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{ClueError, Edge, GridSize};

/// The `4N` edge clues of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clues {
    size: GridSize,
    values: Vec<u8>,
}

impl Clues {
    /// Validates raw clue values.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError`] if the list is empty, its length is not a multiple of four,
    /// the derived size is too large, or any clue exceeds the derived size.
    pub fn new(values: Vec<u8>) -> Result<Self, ClueError> {
        let len = values.len();
        if len == 0 {
            return Err(ClueError::Empty);
        }
        if !len.is_multiple_of(4) {
            return Err(ClueError::LengthNotMultipleOfFour { len });
        }
        let n = len / 4;
        let size = GridSize::new(n).ok_or(ClueError::TooLarge { size: n })?;
        if let Some((index, &clue)) = values
            .iter()
            .enumerate()
            .find(|&(_, &clue)| usize::from(clue) > n)
        {
            return Err(ClueError::OutOfRange {
                index,
                clue,
                size: n,
            });
        }
        Ok(Self { size, values })
    }

    /// Creates an all-zero clue set.
    #[must_use]
    pub fn blank(size: GridSize) -> Self {
        Self {
            size,
            values: vec![0; size.clue_count()],
        }
    }

    /// Returns the grid size.
    #[must_use]
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the clue at a slot (`0` when absent).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `4N`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.values[index]
    }

    /// Returns the clue at a slot together with the clue of its opposite slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `4N`.
    #[must_use]
    pub fn get_pair(&self, index: usize) -> (u8, u8) {
        (self.get(index), self.get(self.size.opposite_clue(index)))
    }

    /// Returns all clues in slot order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    /// Returns `true` if no clue carries information.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|&clue| clue == 0)
    }

    /// Returns the clues along one edge in visual order: top and bottom left to right,
    /// left and right top to bottom.
    pub fn edge(&self, edge: Edge) -> impl Iterator<Item = u8> + '_ {
        let size = self.size;
        (0..size.get()).map(move |offset| self.values[size.clue_index(edge, offset)])
    }
}

impl TryFrom<Vec<u8>> for Clues {
    type Error = ClueError;

    fn try_from(values: Vec<u8>) -> Result<Self, ClueError> {
        Self::new(values)
    }
}

impl TryFrom<&[u8]> for Clues {
    type Error = ClueError;

    fn try_from(values: &[u8]) -> Result<Self, ClueError> {
        Self::new(values.to_vec())
    }
}

/// Parses clues separated by commas and/or whitespace.
impl FromStr for Clues {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, ClueError> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u8>().map_err(|_| ClueError::InvalidToken {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }
}

/// Formats clues as a comma-separated list, the format accepted by [`FromStr`].
impl fmt::Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clue) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{clue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_size() {
        let clues = Clues::new(vec![0; 28]).unwrap();
        assert_eq!(clues.size().get(), 7);
        assert!(clues.is_blank());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(Clues::new(vec![]), Err(ClueError::Empty));
        assert_eq!(
            Clues::new(vec![0; 6]),
            Err(ClueError::LengthNotMultipleOfFour { len: 6 })
        );
        assert_eq!(
            Clues::new(vec![0; 132]),
            Err(ClueError::TooLarge { size: 33 })
        );
        assert_eq!(
            Clues::new(vec![0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            Err(ClueError::OutOfRange {
                index: 2,
                clue: 5,
                size: 4
            })
        );
    }

    #[test]
    fn test_parse() {
        let clues: Clues = "1 ,2,0,0\n0 0 0 0,0,0,0,0 0,0,0,3".parse().unwrap();
        assert_eq!(clues.get(0), 1);
        assert_eq!(clues.get(15), 3);
        assert_eq!(
            "1,x".parse::<Clues>(),
            Err(ClueError::InvalidToken {
                token: "x".to_owned()
            })
        );
        assert_eq!("".parse::<Clues>(), Err(ClueError::Empty));
    }

    #[test]
    fn test_display_round_trip() {
        let clues = Clues::new(vec![0, 0, 1, 2, 0, 2, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0]).unwrap();
        assert_eq!(clues.to_string(), "0,0,1,2,0,2,0,0,0,3,0,0,0,1,0,0");
        assert_eq!(clues.to_string().parse::<Clues>().unwrap(), clues);
    }

    #[test]
    fn test_edges_in_visual_order() {
        let clues = Clues::new((1..=16).map(|v| v % 5).collect()).unwrap();
        // slots: 1 2 3 4 | 0 1 2 3 | 4 0 1 2 | 3 4 0 1
        let edge_values = |edge| clues.edge(edge).collect::<Vec<_>>();
        assert_eq!(edge_values(Edge::Top), [1, 2, 3, 4]);
        assert_eq!(edge_values(Edge::Right), [0, 1, 2, 3]);
        assert_eq!(edge_values(Edge::Bottom), [2, 1, 0, 4]);
        assert_eq!(edge_values(Edge::Left), [1, 0, 4, 3]);
    }

    #[test]
    fn test_get_pair() {
        let clues = Clues::new(vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0]).unwrap();
        assert_eq!(clues.get_pair(0), (3, 2));
        assert_eq!(clues.get_pair(11), (2, 3));
    }
}

//! Line indexing: grid dimensions, rows, columns, and the clue addressing scheme.
//!
//! Cells are numbered row-major: cell `i` sits at `(i mod N, i div N)`.
//!
//! Clues occupy `4N` slots, numbered clockwise:
//!
//! | Slots        | Edge     | Order along the edge |
//! |--------------|----------|----------------------|
//! | `0..N`       | top      | left to right        |
//! | `N..2N`      | right    | top to bottom        |
//! | `2N..3N`     | bottom   | right to left        |
//! | `3N..4N`     | left     | bottom to top        |
//!
//! A clue addresses one full [`Line`], read from the edge it touches.
//! [`GridSize::clue_cells`] returns that line's cells nearest-first, and
//! [`GridSize::opposite_clue`] returns the slot reading the same line from the far edge.
//!
//! # Examples
//!
//! ```
//! use skyline_core::{GridSize, Line};
//!
//! let size = GridSize::new(4).unwrap();
//!
//! // Slot 5 is the right-edge clue of row 1, read right to left.
//! assert_eq!(size.clue_line(5), Line::Row { y: 1 });
//! assert_eq!(size.clue_cells(5).as_slice(), &[7, 6, 5, 4]);
//!
//! // Slot 14 reads the same row from the left.
//! assert_eq!(size.opposite_clue(5), 14);
//! assert_eq!(size.clue_cells(14).as_slice(), &[4, 5, 6, 7]);
//! ```

use std::ops::Range;

use tinyvec::ArrayVec;

use crate::{HeightSet, MAX_SIZE, Position};

/// The cell indices of one line, in reading order.
pub type LineCells = ArrayVec<[usize; MAX_SIZE]>;

/// One of the four edges of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Edge {
    /// The top edge; its clues look down the columns.
    #[display("top")]
    Top,
    /// The right edge; its clues look left along the rows.
    #[display("right")]
    Right,
    /// The bottom edge; its clues look up the columns.
    #[display("bottom")]
    Bottom,
    /// The left edge; its clues look right along the rows.
    #[display("left")]
    Left,
}

impl Edge {
    /// All edges in clockwise clue order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A row or a column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Line {
    /// A row identified by its y coordinate.
    #[display("row {y}")]
    Row {
        /// Row index.
        y: u8,
    },
    /// A column identified by its x coordinate.
    #[display("column {x}")]
    Column {
        /// Column index.
        x: u8,
    },
}

/// The side length `N` of a square grid, `1..=MAX_SIZE`.
///
/// All index arithmetic between cells, lines, and clue slots lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{size}x{size}")]
pub struct GridSize {
    size: u8,
}

#[expect(clippy::cast_possible_truncation)]
const fn coord(value: usize) -> u8 {
    debug_assert!(value < MAX_SIZE);
    value as u8
}

impl GridSize {
    /// Creates a grid size, or `None` if `size` is zero or exceeds [`MAX_SIZE`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(size: usize) -> Option<Self> {
        if size == 0 || size > MAX_SIZE {
            return None;
        }
        Some(Self { size: size as u8 })
    }

    /// Returns `N`.
    #[must_use]
    #[inline]
    pub const fn get(self) -> usize {
        self.size as usize
    }

    /// Returns `N²`.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.get() * self.get()
    }

    /// Returns `4N`.
    #[must_use]
    #[inline]
    pub const fn clue_count(self) -> usize {
        self.get() * 4
    }

    /// Returns the tallest height, `N`.
    #[must_use]
    #[inline]
    pub const fn max_height(self) -> u8 {
        self.size
    }

    /// Returns every height `1..=N`.
    #[must_use]
    #[inline]
    pub const fn heights(self) -> HeightSet {
        HeightSet::full(self.get())
    }

    /// Returns the range of all cell indices.
    #[must_use]
    #[inline]
    pub const fn cells(self) -> Range<usize> {
        0..self.cell_count()
    }

    /// Converts a cell index into its coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[must_use]
    pub fn position(self, cell: usize) -> Position {
        assert!(
            cell < self.cell_count(),
            "cell {cell} out of range for {self}"
        );
        let n = self.get();
        Position::new(coord(cell % n), coord(cell / n))
    }

    /// Converts a coordinate into its cell index.
    #[must_use]
    #[inline]
    pub fn cell_index(self, pos: Position) -> usize {
        usize::from(pos.y()) * self.get() + usize::from(pos.x())
    }

    /// Returns the cells of `line`: rows left to right, columns top to bottom.
    #[must_use]
    pub fn line_cells(self, line: Line) -> LineCells {
        let n = self.get();
        match line {
            Line::Row { y } => (0..n).map(|x| usize::from(y) * n + x).collect(),
            Line::Column { x } => (0..n).map(|y| y * n + usize::from(x)).collect(),
        }
    }

    /// Returns every row, then every column.
    pub fn lines(self) -> impl Iterator<Item = Line> {
        let n = self.size;
        (0..n)
            .map(|y| Line::Row { y })
            .chain((0..n).map(|x| Line::Column { x }))
    }

    /// Returns the row and the column passing through `cell`.
    #[must_use]
    pub fn lines_through(self, cell: usize) -> [Line; 2] {
        let pos = self.position(cell);
        [Line::Row { y: pos.y() }, Line::Column { x: pos.x() }]
    }

    /// Returns the edge a clue slot sits on.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `4N`.
    #[must_use]
    pub fn clue_edge(self, index: usize) -> Edge {
        assert!(
            index < self.clue_count(),
            "clue index {index} out of range for {self}"
        );
        Edge::ALL[index / self.get()]
    }

    /// Returns the line addressed by a clue slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `4N`.
    #[must_use]
    pub fn clue_line(self, index: usize) -> Line {
        let n = self.get();
        match self.clue_edge(index) {
            Edge::Top => Line::Column { x: coord(index) },
            Edge::Right => Line::Row {
                y: coord(index - n),
            },
            Edge::Bottom => Line::Column {
                x: coord(3 * n - 1 - index),
            },
            Edge::Left => Line::Row {
                y: coord(4 * n - 1 - index),
            },
        }
    }

    /// Returns the cells addressed by a clue slot, nearest to the clue first.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `4N`.
    #[must_use]
    pub fn clue_cells(self, index: usize) -> LineCells {
        let mut cells = self.line_cells(self.clue_line(index));
        if matches!(self.clue_edge(index), Edge::Right | Edge::Bottom) {
            cells.reverse();
        }
        cells
    }

    /// Returns the clue slot reading the same line from the far edge.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `4N`.
    #[must_use]
    pub fn opposite_clue(self, index: usize) -> usize {
        let n = self.get();
        match self.clue_edge(index) {
            Edge::Top | Edge::Bottom => 3 * n - 1 - index,
            Edge::Right | Edge::Left => 5 * n - 1 - index,
        }
    }

    /// Returns the slot of the `offset`-th clue along `edge` in visual order
    /// (top and bottom left to right, left and right top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below `N`.
    #[must_use]
    pub fn clue_index(self, edge: Edge, offset: usize) -> usize {
        let n = self.get();
        assert!(offset < n, "clue offset {offset} out of range for {self}");
        match edge {
            Edge::Top => offset,
            Edge::Right => n + offset,
            Edge::Bottom => 3 * n - 1 - offset,
            Edge::Left => 4 * n - 1 - offset,
        }
    }

    /// Returns the top-edge and left-edge clue slots, in that order.
    ///
    /// Together with their opposites these address every line exactly once.
    pub fn canonical_clues(self) -> impl Iterator<Item = usize> {
        let n = self.get();
        (0..n).chain(3 * n..4 * n)
    }
}

//! Cell coordinates.

/// A cell coordinate `(x, y)`, with `x` the column and `y` the row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 5).to_string(), "(2, 5)");
    }
}

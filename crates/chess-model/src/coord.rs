//! Board coordinate representation.

use std::fmt;

/// A (column, row) pair addressing a board cell.
///
/// Column 0 is the queenside file; row 0 is Black's back rank and row 7 is
/// White's. Construction is deliberately unvalidated: offset arithmetic
/// during move generation routinely produces off-board values, which are
/// rejected at board lookup rather than at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: i8,
    pub row: i8,
}

impl Coord {
    /// Creates a coordinate. Out-of-range values are allowed.
    #[inline]
    pub const fn new(col: i8, row: i8) -> Self {
        Coord { col, row }
    }

    /// Returns this coordinate shifted by the given column/row deltas.
    #[inline]
    pub const fn offset(self, dc: i8, dr: i8) -> Self {
        Coord {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Returns true if this coordinate lies on the 8x8 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.col >= 0 && self.col < 8 && self.row >= 0 && self.row < 8
    }
}

impl fmt::Display for Coord {
    /// Formats on-board coordinates algebraically ("e4"); off-board ones
    /// fall back to the raw pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            let rank = 8 - self.row;
            write!(f, "{}{}", file, rank)
        } else {
            write!(f, "({},{})", self.col, self.row)
        }
    }
}

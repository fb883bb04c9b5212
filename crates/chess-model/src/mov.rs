//! Move representation.

use crate::Coord;
use std::fmt;

/// An ordered (from, to) coordinate pair.
///
/// Special effects (castling rook relocation, en passant removal,
/// promotion flagging) are derived from the board state when the move is
/// applied, so no flag field is needed here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

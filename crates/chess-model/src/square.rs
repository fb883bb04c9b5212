//! Board cell lookup view.

use crate::{Color, Coord, Piece};

/// A board cell: its coordinates plus the piece on it, if any.
///
/// `Square` is the value returned by bounds-checked board lookups. It
/// carries no presentation state; selection and move-target highlighting
/// live in the interaction layer's overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub coord: Coord,
    pub piece: Option<Piece>,
}

impl Square {
    /// Creates a square holding the given piece.
    #[inline]
    pub const fn new(coord: Coord, piece: Piece) -> Self {
        Square {
            coord,
            piece: Some(piece),
        }
    }

    /// Creates an empty square.
    #[inline]
    pub const fn empty(coord: Coord) -> Self {
        Square { coord, piece: None }
    }

    /// Returns true if no piece occupies this square.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Returns true if a piece of `friendly` color occupies this square.
    #[inline]
    pub fn holds_friendly(&self, friendly: Color) -> bool {
        self.piece.map(|p| p.color == friendly).unwrap_or(false)
    }

    /// Returns true if a piece of the enemy of `friendly` occupies this square.
    #[inline]
    pub fn holds_enemy(&self, friendly: Color) -> bool {
        self.piece
            .map(|p| p.color == friendly.enemy())
            .unwrap_or(false)
    }
}

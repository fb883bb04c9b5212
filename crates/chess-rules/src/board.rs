//! Chess board representation and move application.

use chess_model::{Color, Coord, Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Error type for move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The origin square holds no piece.
    #[error("illegal move: no piece on origin square {0}")]
    EmptyOrigin(Coord),
    /// A coordinate lies outside the board.
    #[error("coordinate {0} is off the board")]
    OffBoard(Coord),
}

/// Error type for pawn promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromoteError {
    /// The targeted square holds no pawn awaiting promotion.
    #[error("no pawn awaiting promotion")]
    NoPromotionPending,
    /// Pawns promote to knight, bishop, rook, or queen only.
    #[error("cannot promote to a {0}")]
    InvalidKind(PieceKind),
}

/// An immutable snapshot of piece placement plus the side to move.
///
/// Cells are a fixed 8x8 array for O(1) lookup; an unoccupied in-bounds
/// cell is simply `None`. Every mutation returns a new `Board`, so
/// superseded snapshots can be discarded (or kept) freely. The engine
/// assumes exactly one king per color is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Piece placement, indexed `grid[row][col]`. Row 0 is Black's back rank.
    grid: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
}

impl Board {
    /// Creates a board with the standard initial layout, White to move.
    pub fn new() -> Self {
        use PieceKind::*;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut grid = [[None; 8]; 8];
        for (col, &kind) in back_rank.iter().enumerate() {
            grid[0][col] = Some(Piece::new(kind, Color::Black));
            grid[7][col] = Some(Piece::new(kind, Color::White));
        }
        for col in 0..8 {
            grid[1][col] = Some(Piece::new(Pawn, Color::Black));
            grid[6][col] = Some(Piece::new(Pawn, Color::White));
        }

        Board {
            grid,
            side_to_move: Color::White,
        }
    }

    /// Creates a board from an explicit piece placement.
    ///
    /// Used for tests and alternate positions. All coordinates must be on
    /// the board; later entries overwrite earlier ones on the same square.
    pub fn from_pieces(
        pieces: impl IntoIterator<Item = (Coord, Piece)>,
        side_to_move: Color,
    ) -> Self {
        let mut grid = [[None; 8]; 8];
        for (coord, piece) in pieces {
            debug_assert!(coord.is_on_board(), "piece placed off the board");
            grid[coord.row as usize][coord.col as usize] = Some(piece);
        }
        Board { grid, side_to_move }
    }

    /// A sparse late-game position, handy for demos and promotion testing.
    pub fn endgame_demo() -> Self {
        use PieceKind::*;
        Self::from_pieces(
            [
                (Coord::new(3, 0), Piece::new(King, Color::Black).moved()),
                (Coord::new(0, 1), Piece::new(Pawn, Color::Black)),
                (Coord::new(6, 1), Piece::new(Queen, Color::White).moved()),
                (Coord::new(7, 1), Piece::new(Pawn, Color::White).moved()),
                (Coord::new(3, 2), Piece::new(King, Color::White).moved()),
                (Coord::new(0, 4), Piece::new(Bishop, Color::White).moved()),
            ],
            Color::White,
        )
    }

    /// Returns whose turn it is to move.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the square at the given coordinates.
    ///
    /// `None` for off-board coordinates; in-bounds unoccupied cells yield
    /// an empty [`Square`]. Never panics.
    pub fn square(&self, coord: Coord) -> Option<Square> {
        if !coord.is_on_board() {
            return None;
        }
        Some(Square {
            coord,
            piece: self.grid[coord.row as usize][coord.col as usize],
        })
    }

    /// Returns the piece at the given coordinates, if the square is
    /// on the board and occupied.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.square(coord).and_then(|sq| sq.piece)
    }

    /// Returns the coordinates of the given color's king.
    ///
    /// # Panics
    ///
    /// Panics if the king is absent - the one-king-per-color invariant
    /// was violated by the caller's setup.
    pub fn king_coord(&self, color: Color) -> Coord {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(coord, _)| coord)
            .expect("board invariant: exactly one king per color")
    }

    /// Iterates over all occupied squares as `(Coord, Piece)` pairs.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Coord::new(col as i8, row as i8), piece))
            })
        })
    }

    /// Returns the square holding a pawn that awaits promotion, if any.
    pub fn promotion_square(&self) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::Pawn && p.awaiting_promotion)
            .map(|(coord, piece)| Square::new(coord, piece))
    }

    /// Returns a board with the piece at `coord` removed.
    ///
    /// A no-op for empty or off-board coordinates. Intended for test and
    /// demo setups, not regular play.
    pub fn remove_piece(&self, coord: Coord) -> Board {
        let mut next = self.clone();
        if coord.is_on_board() {
            next.grid[coord.row as usize][coord.col as usize] = None;
        }
        next
    }

    /// Applies the move `from` -> `to`, returning the successor board.
    ///
    /// Effects, in order: clear every pawn's double-step flag;
    /// update the mover's flags (`has_moved`, double-step, promotion
    /// pending); relocate the mover, capturing any occupant of `to`;
    /// remove the passed pawn on en passant; relocate the rook on
    /// castling; flip the side to move.
    ///
    /// Legality is not checked here - that is the move generator's job.
    /// Turn order is also the caller's responsibility: the click protocol
    /// only ever moves the side to move, and the legality filter
    /// simulates moves for either color.
    pub fn apply(&self, from: Coord, to: Coord) -> Result<Board, MoveError> {
        if !from.is_on_board() {
            return Err(MoveError::OffBoard(from));
        }
        if !to.is_on_board() {
            return Err(MoveError::OffBoard(to));
        }
        let mover = self.piece_at(from).ok_or(MoveError::EmptyOrigin(from))?;
        Ok(self.apply_move(mover, from, to))
    }

    /// Move application once the origin piece is resolved.
    fn apply_move(&self, mover: Piece, from: Coord, to: Coord) -> Board {
        let mut next = self.clone();

        // A double-step flag only survives for the single reply ply, so
        // every move expires every flag on the board. At most one pawn
        // ends up flagged at any time.
        for row in next.grid.iter_mut() {
            for cell in row.iter_mut() {
                if let Some(p) = cell {
                    if p.kind == PieceKind::Pawn {
                        p.double_stepped = false;
                    }
                }
            }
        }

        let target_was_empty = self.piece_at(to).is_none();

        let mut moved = mover.moved();
        if mover.kind == PieceKind::Pawn {
            moved.double_stepped = (to.row - from.row).abs() == 2;
            moved.awaiting_promotion = to.row == mover.color.promotion_row();
        }
        next.grid[from.row as usize][from.col as usize] = None;
        next.grid[to.row as usize][to.col as usize] = Some(moved);

        // En passant: a pawn capture into an empty square. The captured
        // pawn sits one row behind the destination.
        if mover.kind == PieceKind::Pawn && from.col != to.col && target_was_empty {
            let passed = to.offset(0, -mover.color.forward());
            if passed.is_on_board() {
                next.grid[passed.row as usize][passed.col as usize] = None;
            }
        }

        // Castling: a king sliding two files drags the matching rook to
        // the square it crossed.
        if mover.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
            let (rook_from, rook_to) = if to.col > from.col {
                (Coord::new(7, from.row), Coord::new(5, from.row))
            } else {
                (Coord::new(0, from.row), Coord::new(3, from.row))
            };
            if let Some(rook) = next.grid[rook_from.row as usize][rook_from.col as usize].take() {
                next.grid[rook_to.row as usize][rook_to.col as usize] = Some(rook.moved());
            }
        }

        next.side_to_move = mover.color.enemy();
        next
    }

    /// Replaces a pawn awaiting promotion with a piece of `kind`.
    ///
    /// The new piece keeps the pawn's color and square and is marked as
    /// having moved. The side to move is unchanged; it already flipped
    /// when the pawn reached the far rank.
    pub fn promote(&self, at: Coord, kind: PieceKind) -> Result<Board, PromoteError> {
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(PromoteError::InvalidKind(kind));
        }
        let pawn = match self.piece_at(at) {
            Some(p) if p.kind == PieceKind::Pawn && p.awaiting_promotion => p,
            _ => return Err(PromoteError::NoPromotionPending),
        };
        let mut next = self.clone();
        next.grid[at.row as usize][at.col as usize] = Some(Piece::new(kind, pawn.color).moved());
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let ch = self.grid[row][col].map(|p| p.to_char()).unwrap_or('.');
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}

//! Attack detection: can a given side attack a given square?

use crate::board::Board;
use chess_model::{Color, Coord, Piece, PieceKind};

/// The four diagonal ray directions, as `(dc, dr)` steps.
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The four orthogonal ray directions, as `(dc, dr)` steps.
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The eight knight jumps.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The eight king steps.
pub(crate) const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Walks from `origin` along `(dc, dr)` and returns the first piece
/// encountered, ignoring `origin` itself.
pub(crate) fn first_piece_along(board: &Board, origin: Coord, dc: i8, dr: i8) -> Option<Piece> {
    let mut coord = origin.offset(dc, dr);
    while coord.is_on_board() {
        if let Some(piece) = board.piece_at(coord) {
            return Some(piece);
        }
        coord = coord.offset(dc, dr);
    }
    None
}

/// Reports whether any piece of `attacker` could capture on `target`.
///
/// This is the raw attack relation: it ignores whose turn it is and
/// whether the attacking piece is itself pinned. `target` may be empty
/// or occupied by either side. Off-board targets are never attacked.
pub fn is_attacked(board: &Board, attacker: Color, target: Coord) -> bool {
    if !target.is_on_board() {
        return false;
    }

    // Sliders and the pieces sharing their rays. A ray is blocked by the
    // first piece on it, so only that piece matters per direction.
    for (dc, dr) in DIAGONAL_DIRS {
        if let Some(piece) = first_piece_along(board, target, dc, dr) {
            if piece.color == attacker
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }
    for (dc, dr) in ORTHOGONAL_DIRS {
        if let Some(piece) = first_piece_along(board, target, dc, dr) {
            if piece.color == attacker && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    for (dc, dr) in KNIGHT_OFFSETS {
        if holds(board, target.offset(dc, dr), attacker, PieceKind::Knight) {
            return true;
        }
    }

    for (dc, dr) in NEIGHBOR_OFFSETS {
        if holds(board, target.offset(dc, dr), attacker, PieceKind::King) {
            return true;
        }
    }

    // Pawns capture one row forward diagonally, so an attacking pawn
    // stands one row behind the target from its own point of view.
    let pawn_row = -attacker.forward();
    for dc in [-1, 1] {
        if holds(board, target.offset(dc, pawn_row), attacker, PieceKind::Pawn) {
            return true;
        }
    }

    false
}

fn holds(board: &Board, coord: Coord, color: Color, kind: PieceKind) -> bool {
    board
        .piece_at(coord)
        .map(|p| p.color == color && p.kind == kind)
        .unwrap_or(false)
}

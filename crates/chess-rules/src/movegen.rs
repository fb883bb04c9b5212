//! Legal move generation.
//!
//! Moves are generated per piece by pattern, then filtered through a
//! one-ply simulation: a candidate survives only if the mover's own king
//! is not attacked on the resulting board. The same filter covers pins,
//! moving out of check, and king walks into defended squares.

use crate::attacks::{
    is_attacked, DIAGONAL_DIRS, KNIGHT_OFFSETS, NEIGHBOR_OFFSETS, ORTHOGONAL_DIRS,
};
use crate::board::Board;
use chess_model::{Color, Coord, Move, Piece, PieceKind};
use std::collections::BTreeSet;

/// Returns every legal destination for the piece at `from`.
///
/// Empty when `from` is off the board, unoccupied, or occupied by a
/// piece with no legal move. Turn order is not enforced here; the set is
/// computed for whichever color sits on `from`.
pub fn legal_destinations(board: &Board, from: Coord) -> BTreeSet<Coord> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return BTreeSet::new(),
    };

    let mut candidates = BTreeSet::new();
    match piece.kind {
        PieceKind::Pawn => pawn_candidates(board, from, piece, &mut candidates),
        PieceKind::Knight => step_candidates(board, from, piece, &KNIGHT_OFFSETS, &mut candidates),
        PieceKind::Bishop => ray_candidates(board, from, piece, &DIAGONAL_DIRS, &mut candidates),
        PieceKind::Rook => ray_candidates(board, from, piece, &ORTHOGONAL_DIRS, &mut candidates),
        PieceKind::Queen => {
            ray_candidates(board, from, piece, &DIAGONAL_DIRS, &mut candidates);
            ray_candidates(board, from, piece, &ORTHOGONAL_DIRS, &mut candidates);
        }
        PieceKind::King => {
            step_candidates(board, from, piece, &NEIGHBOR_OFFSETS, &mut candidates);
            castling_candidates(board, from, piece, &mut candidates);
        }
    }

    candidates
        .into_iter()
        .filter(|&to| king_safe_after(board, piece.color, from, to))
        .collect()
}

/// Returns every legal move for `color`, in source-then-destination order.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for to in legal_destinations(board, from) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Reports whether `color` has at least one legal move.
///
/// Short-circuits on the first hit, unlike [`all_moves`].
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| !legal_destinations(board, from).is_empty())
}

/// The one-ply legality filter: simulate the move and check that the
/// mover's king is not left attackable.
fn king_safe_after(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    match board.apply(from, to) {
        Ok(next) => !is_attacked(&next, color.enemy(), next.king_coord(color)),
        Err(_) => false,
    }
}

/// Fixed-offset movers: knights and the king's ordinary steps.
fn step_candidates(
    board: &Board,
    from: Coord,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut BTreeSet<Coord>,
) {
    for &(dc, dr) in offsets {
        let to = from.offset(dc, dr);
        if let Some(sq) = board.square(to) {
            if !sq.holds_friendly(piece.color) {
                out.insert(to);
            }
        }
    }
}

/// Sliding movers: each ray extends until it leaves the board or meets a
/// piece; an enemy blocker is itself a destination.
fn ray_candidates(
    board: &Board,
    from: Coord,
    piece: Piece,
    dirs: &[(i8, i8)],
    out: &mut BTreeSet<Coord>,
) {
    for &(dc, dr) in dirs {
        let mut to = from.offset(dc, dr);
        while let Some(sq) = board.square(to) {
            if sq.is_empty() {
                out.insert(to);
            } else {
                if sq.holds_enemy(piece.color) {
                    out.insert(to);
                }
                break;
            }
            to = to.offset(dc, dr);
        }
    }
}

fn pawn_candidates(board: &Board, from: Coord, piece: Piece, out: &mut BTreeSet<Coord>) {
    let forward = piece.color.forward();

    // Advances require empty squares; the double step also requires an
    // unmoved pawn and a clear intermediate square.
    let one = from.offset(0, forward);
    if board.square(one).map(|sq| sq.is_empty()).unwrap_or(false) {
        out.insert(one);
        let two = from.offset(0, 2 * forward);
        if !piece.has_moved && board.square(two).map(|sq| sq.is_empty()).unwrap_or(false) {
            out.insert(two);
        }
    }

    for dc in [-1, 1] {
        let to = from.offset(dc, forward);
        let sq = match board.square(to) {
            Some(sq) => sq,
            None => continue,
        };
        if sq.holds_enemy(piece.color) {
            out.insert(to);
            continue;
        }
        // En passant: the enemy pawn that just double-stepped sits beside
        // us; we capture it by moving into the square it skipped.
        if sq.is_empty() {
            let beside = board.piece_at(from.offset(dc, 0));
            if beside
                .map(|p| {
                    p.kind == PieceKind::Pawn && p.color != piece.color && p.double_stepped
                })
                .unwrap_or(false)
            {
                out.insert(to);
            }
        }
    }
}

/// Castling candidates for a king on its home square.
///
/// Requirements: neither king nor rook has moved, the king is not in
/// check, and every square between them is both empty and unattacked.
/// The one-ply filter afterwards re-checks the destination, which is
/// already covered by the in-between rule here.
fn castling_candidates(board: &Board, from: Coord, piece: Piece, out: &mut BTreeSet<Coord>) {
    if piece.has_moved || is_attacked(board, piece.color.enemy(), from) {
        return;
    }
    let row = from.row;
    // Kingside: rook on col 7, crossing cols 5 and 6.
    if castle_side_open(board, piece.color, Coord::new(7, row), &[5, 6], row) {
        out.insert(Coord::new(6, row));
    }
    // Queenside: rook on col 0, crossing cols 1 through 3.
    if castle_side_open(board, piece.color, Coord::new(0, row), &[1, 2, 3], row) {
        out.insert(Coord::new(2, row));
    }
}

fn castle_side_open(
    board: &Board,
    color: Color,
    rook_at: Coord,
    between_cols: &[i8],
    row: i8,
) -> bool {
    let rook_ok = board
        .piece_at(rook_at)
        .map(|p| p.kind == PieceKind::Rook && p.color == color && !p.has_moved)
        .unwrap_or(false);
    if !rook_ok {
        return false;
    }
    between_cols.iter().all(|&col| {
        let coord = Coord::new(col, row);
        board.piece_at(coord).is_none() && !is_attacked(board, color.enemy(), coord)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(i8, i8)]) -> BTreeSet<Coord> {
        pairs.iter().map(|&(c, r)| Coord::new(c, r)).collect()
    }

    fn with_kings(pieces: Vec<(Coord, Piece)>) -> Board {
        let mut setup = vec![
            (Coord::new(4, 0), Piece::new(PieceKind::King, Color::Black)),
            (Coord::new(4, 7), Piece::new(PieceKind::King, Color::White)),
        ];
        setup.extend(pieces);
        Board::from_pieces(setup, Color::White)
    }

    #[test]
    fn empty_or_off_board_origin_yields_nothing() {
        let board = Board::new();
        assert!(legal_destinations(&board, Coord::new(4, 4)).is_empty());
        assert!(legal_destinations(&board, Coord::new(9, 9)).is_empty());
    }

    #[test]
    fn knight_from_initial_position() {
        let board = Board::new();
        assert_eq!(
            legal_destinations(&board, Coord::new(1, 7)),
            coords(&[(0, 5), (2, 5)])
        );
    }

    #[test]
    fn rook_is_boxed_in_initially() {
        let board = Board::new();
        assert!(legal_destinations(&board, Coord::new(0, 7)).is_empty());
    }

    #[test]
    fn pawn_single_and_double_advance() {
        let board = Board::new();
        assert_eq!(
            legal_destinations(&board, Coord::new(4, 6)),
            coords(&[(4, 5), (4, 4)])
        );
        // A pawn that has moved loses the double step.
        let after = board.apply(Coord::new(4, 6), Coord::new(4, 5)).unwrap();
        let after = after.apply(Coord::new(0, 1), Coord::new(0, 2)).unwrap();
        assert_eq!(
            legal_destinations(&after, Coord::new(4, 5)),
            coords(&[(4, 4)])
        );
    }

    #[test]
    fn pawn_blocked_by_any_piece() {
        let board = with_kings(vec![
            (Coord::new(4, 6), Piece::new(PieceKind::Pawn, Color::White)),
            (Coord::new(4, 5), Piece::new(PieceKind::Knight, Color::Black)),
        ]);
        // Straight ahead is not a capture square.
        assert!(legal_destinations(&board, Coord::new(4, 6)).is_empty());

        // A blocker on the double-step square still allows the single step.
        let board = with_kings(vec![
            (Coord::new(3, 6), Piece::new(PieceKind::Pawn, Color::White)),
            (Coord::new(3, 4), Piece::new(PieceKind::Rook, Color::Black)),
        ]);
        assert_eq!(
            legal_destinations(&board, Coord::new(3, 6)),
            coords(&[(3, 5)])
        );
    }

    #[test]
    fn pawn_captures_diagonally() {
        let board = with_kings(vec![
            (Coord::new(4, 4), Piece::new(PieceKind::Pawn, Color::White).moved()),
            (Coord::new(3, 3), Piece::new(PieceKind::Pawn, Color::Black).moved()),
            (Coord::new(5, 3), Piece::new(PieceKind::Rook, Color::White)),
        ]);
        // Enemy piece diagonally: capture. Own piece diagonally: no.
        assert_eq!(
            legal_destinations(&board, Coord::new(4, 4)),
            coords(&[(3, 3), (4, 3)])
        );
    }

    #[test]
    fn en_passant_window() {
        let board = with_kings(vec![
            (Coord::new(4, 3), Piece::new(PieceKind::Pawn, Color::White).moved()),
            (Coord::new(3, 1), Piece::new(PieceKind::Pawn, Color::Black)),
        ]);
        let after_double = board.apply(Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        let dests = legal_destinations(&after_double, Coord::new(4, 3));
        assert!(dests.contains(&Coord::new(3, 2)));

        // The window closes as soon as any other move is applied.
        let later = after_double.apply(Coord::new(4, 7), Coord::new(5, 7)).unwrap();
        let dests = legal_destinations(&later, Coord::new(4, 3));
        assert!(!dests.contains(&Coord::new(3, 2)));
    }

    #[test]
    fn expired_en_passant_is_gone_even_queried_out_of_turn() {
        // White double-steps past the black pawn, Black declines and
        // moves elsewhere. A later query of the black pawn's moves must
        // not resurrect the expired capture.
        let board = with_kings(vec![
            (Coord::new(3, 4), Piece::new(PieceKind::Pawn, Color::Black).moved()),
            (Coord::new(4, 6), Piece::new(PieceKind::Pawn, Color::White)),
            (Coord::new(0, 1), Piece::new(PieceKind::Pawn, Color::Black)),
        ]);
        let after_double = board.apply(Coord::new(4, 6), Coord::new(4, 4)).unwrap();
        assert!(legal_destinations(&after_double, Coord::new(3, 4)).contains(&Coord::new(4, 5)));

        let declined = after_double.apply(Coord::new(0, 1), Coord::new(0, 2)).unwrap();
        assert_eq!(declined.side_to_move(), Color::White);
        let dests = legal_destinations(&declined, Coord::new(3, 4));
        assert!(!dests.contains(&Coord::new(4, 5)));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let board = with_kings(vec![
            (Coord::new(4, 3), Piece::new(PieceKind::Pawn, Color::White).moved()),
            (Coord::new(3, 1), Piece::new(PieceKind::Pawn, Color::Black)),
        ]);
        let after_double = board.apply(Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        let captured = after_double.apply(Coord::new(4, 3), Coord::new(3, 2)).unwrap();
        assert!(captured.piece_at(Coord::new(3, 3)).is_none());
        assert_eq!(
            captured.piece_at(Coord::new(3, 2)).unwrap().kind,
            PieceKind::Pawn
        );
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        let board = with_kings(vec![
            (Coord::new(4, 5), Piece::new(PieceKind::Knight, Color::White)),
            (Coord::new(4, 2), Piece::new(PieceKind::Rook, Color::Black)),
        ]);
        // The knight shields the white king from the rook on the e-file.
        assert!(legal_destinations(&board, Coord::new(4, 5)).is_empty());
    }

    #[test]
    fn moves_must_resolve_check() {
        let board = with_kings(vec![
            (Coord::new(4, 2), Piece::new(PieceKind::Rook, Color::Black)),
            (Coord::new(0, 5), Piece::new(PieceKind::Rook, Color::White)),
        ]);
        // White king is in check. The rook may block or capture nothing
        // here, only the interposition on e3 works for it.
        let rook_moves = legal_destinations(&board, Coord::new(0, 5));
        assert_eq!(rook_moves, coords(&[(4, 5)]));
        // The king itself may step off the file.
        let king_moves = legal_destinations(&board, Coord::new(4, 7));
        assert!(king_moves.contains(&Coord::new(3, 7)));
        assert!(!king_moves.contains(&Coord::new(4, 6)));
    }

    #[test]
    fn king_cannot_step_next_to_enemy_king() {
        let board = Board::from_pieces(
            [
                (Coord::new(4, 4), Piece::new(PieceKind::King, Color::White).moved()),
                (Coord::new(4, 2), Piece::new(PieceKind::King, Color::Black).moved()),
            ],
            Color::White,
        );
        let dests = legal_destinations(&board, Coord::new(4, 4));
        assert!(!dests.contains(&Coord::new(4, 3)));
        assert!(!dests.contains(&Coord::new(3, 3)));
        assert!(dests.contains(&Coord::new(4, 5)));
    }

    #[test]
    fn castling_both_sides_when_clear() {
        let board = with_kings(vec![
            (Coord::new(0, 7), Piece::new(PieceKind::Rook, Color::White)),
            (Coord::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
        ]);
        let dests = legal_destinations(&board, Coord::new(4, 7));
        assert!(dests.contains(&Coord::new(6, 7)));
        assert!(dests.contains(&Coord::new(2, 7)));
    }

    #[test]
    fn castling_blocked_by_moved_pieces() {
        let board = with_kings(vec![
            (Coord::new(0, 7), Piece::new(PieceKind::Rook, Color::White).moved()),
            (Coord::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
        ]);
        let dests = legal_destinations(&board, Coord::new(4, 7));
        assert!(dests.contains(&Coord::new(6, 7)));
        assert!(!dests.contains(&Coord::new(2, 7)));

        let board = with_kings(vec![
            (Coord::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
        ]);
        // No queenside rook at all.
        assert!(!legal_destinations(&board, Coord::new(4, 7)).contains(&Coord::new(2, 7)));
    }

    #[test]
    fn castling_barred_by_check_and_attacked_path() {
        // King in check: no castling at all.
        let board = with_kings(vec![
            (Coord::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
            (Coord::new(4, 3), Piece::new(PieceKind::Rook, Color::Black)),
        ]);
        assert!(!legal_destinations(&board, Coord::new(4, 7)).contains(&Coord::new(6, 7)));

        // An attacked crossing square also bars it.
        let board = with_kings(vec![
            (Coord::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
            (Coord::new(5, 3), Piece::new(PieceKind::Rook, Color::Black)),
        ]);
        assert!(!legal_destinations(&board, Coord::new(4, 7)).contains(&Coord::new(6, 7)));
    }

    #[test]
    fn castling_barred_by_occupied_path() {
        let board = with_kings(vec![
            (Coord::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
            (Coord::new(5, 7), Piece::new(PieceKind::Bishop, Color::White)),
        ]);
        assert!(!legal_destinations(&board, Coord::new(4, 7)).contains(&Coord::new(6, 7)));
    }

    #[test]
    fn castling_moves_the_rook_too() {
        let board = with_kings(vec![
            (Coord::new(7, 7), Piece::new(PieceKind::Rook, Color::White)),
        ]);
        let after = board.apply(Coord::new(4, 7), Coord::new(6, 7)).unwrap();
        assert_eq!(
            after.piece_at(Coord::new(6, 7)).unwrap().kind,
            PieceKind::King
        );
        assert_eq!(
            after.piece_at(Coord::new(5, 7)).unwrap().kind,
            PieceKind::Rook
        );
        assert!(after.piece_at(Coord::new(7, 7)).is_none());
    }

    #[test]
    fn all_moves_initial_position() {
        let board = Board::new();
        // 16 pawn moves plus 4 knight moves per side.
        assert_eq!(all_moves(&board, Color::White).len(), 20);
        assert_eq!(all_moves(&board, Color::Black).len(), 20);
        assert!(has_legal_move(&board, Color::White));
    }
}

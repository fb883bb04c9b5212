//! Game status evaluation: check, checkmate, stalemate.

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::movegen::has_legal_move;
use chess_model::Color;
use std::fmt;

/// The overall state of a game, derived from a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    WhiteToMove,
    BlackToMove,
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl Status {
    /// Reports whether the game is over.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Status::WhiteWins | Status::BlackWins | Status::Stalemate
        )
    }

    /// The color still to move, for ongoing games.
    #[inline]
    pub const fn side_to_move(self) -> Option<Color> {
        match self {
            Status::WhiteToMove => Some(Color::White),
            Status::BlackToMove => Some(Color::Black),
            _ => None,
        }
    }

    /// The winning color, if the game ended in checkmate.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::WhiteWins => Some(Color::White),
            Status::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::WhiteToMove => "White to move",
            Status::BlackToMove => "Black to move",
            Status::WhiteWins => "White wins",
            Status::BlackWins => "Black wins",
            Status::Stalemate => "Stalemate",
        };
        write!(f, "{}", text)
    }
}

/// Reports whether `color`'s king is currently attacked.
pub fn is_check(board: &Board, color: Color) -> bool {
    is_attacked(board, color.enemy(), board.king_coord(color))
}

/// Reports whether `color` is checkmated: in check with no legal move
/// by any of its pieces.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_check(board, color) && !has_legal_move(board, color)
}

/// Reports whether `color` is stalemated: not in check, yet without a
/// single legal move.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_check(board, color) && !has_legal_move(board, color)
}

/// Derives the game status for the side to move.
pub fn status(board: &Board) -> Status {
    let stm = board.side_to_move();
    if is_checkmate(board, stm) {
        return match stm {
            Color::White => Status::BlackWins,
            Color::Black => Status::WhiteWins,
        };
    }
    if is_stalemate(board, stm) {
        return Status::Stalemate;
    }
    match stm {
        Color::White => Status::WhiteToMove,
        Color::Black => Status::BlackToMove,
    }
}

//! Interactive game driver with a click-to-move protocol.

use crate::board::{Board, PromoteError};
use crate::movegen::legal_destinations;
use crate::status::{status, Status};
use chess_model::{Coord, PieceKind};
use std::collections::BTreeSet;

/// A game in progress: the current board plus transient selection state.
///
/// The selection overlay (which square is picked up, which destinations
/// are highlighted) belongs to the interaction layer, not to the board.
/// Boards stay pure rule-engine values; a UI reads [`Game::selected`]
/// and [`Game::targets`] to render highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    selected: Option<Coord>,
    targets: BTreeSet<Coord>,
}

impl Game {
    /// Starts a game from the standard initial position.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Starts a game from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            selected: None,
            targets: BTreeSet::new(),
        }
    }

    /// The current board snapshot.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The currently selected square, if any.
    #[inline]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Legal destinations of the selected piece; empty when nothing is
    /// selected.
    #[inline]
    pub fn targets(&self) -> &BTreeSet<Coord> {
        &self.targets
    }

    /// The game status for the current position.
    pub fn status(&self) -> Status {
        status(&self.board)
    }

    /// Reports whether a pawn awaits promotion.
    #[inline]
    pub fn promotion_pending(&self) -> bool {
        self.board.promotion_square().is_some()
    }

    /// Handles a click on `coord` and returns the resulting status.
    ///
    /// With a selection active, clicking a highlighted target plays the
    /// move. Otherwise the click re-selects when it lands on a piece of
    /// the side to move, and clears the selection in every other case:
    /// empty square, enemy piece, off-board, or a non-target own piece
    /// click that finds no legal moves.
    ///
    /// Clicks are ignored once the game is over or while a promotion is
    /// pending.
    pub fn click(&mut self, coord: Coord) -> Status {
        if self.status().is_terminal() || self.promotion_pending() {
            return self.status();
        }

        if self.selected.is_some() && self.targets.contains(&coord) {
            let from = self.selected.take().expect("selection present");
            // Targets only exist for an occupied, on-board origin, so
            // this cannot fail.
            self.board = self
                .board
                .apply(from, coord)
                .expect("selected square holds a piece");
            self.targets.clear();
            return self.status();
        }

        self.clear_selection();
        if let Some(piece) = self.board.piece_at(coord) {
            if piece.color == self.board.side_to_move() {
                self.selected = Some(coord);
                self.targets = legal_destinations(&self.board, coord);
            }
        }
        self.status()
    }

    /// Resolves a pending promotion to the given piece kind.
    pub fn promote(&mut self, kind: PieceKind) -> Result<Status, PromoteError> {
        let square = self
            .board
            .promotion_square()
            .ok_or(PromoteError::NoPromotionPending)?;
        self.board = self.board.promote(square.coord, kind)?;
        Ok(self.status())
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

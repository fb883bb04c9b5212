//! Chess rules engine backing a click-driven board UI.
//!
//! This crate provides:
//! - [`Board`] - immutable 8x8 piece placement plus side to move, with
//!   move application, promotion, and bounds-checked lookups
//! - [`is_attacked`] - the attack-reachability oracle
//! - [`legal_destinations`] / [`all_moves`] - legal move generation with
//!   the self-check filter applied
//! - [`status`] and the [`Status`] enum - checkmate/stalemate resolution
//! - [`Game`] - the selection/click protocol that turns square clicks into
//!   moves
//!
//! # Architecture
//!
//! Every operation is a pure function over immutable [`Board`] values:
//! applying a move produces a successor board and the caller discards the
//! old one. Legality is decided one ply deep - simulate the candidate
//! move, then ask the oracle whether the mover's own king is attacked.
//!
//! # Example
//!
//! ```
//! use chess_model::Coord;
//! use chess_rules::{Game, Status};
//!
//! let mut game = Game::new();
//! // Click the e2 pawn (col 4, row 6), then its double-step target.
//! game.click(Coord::new(4, 6));
//! game.click(Coord::new(4, 4));
//! assert_eq!(game.status(), Status::BlackToMove);
//! ```

mod attacks;
mod board;
mod game;
mod movegen;
mod status;

pub use attacks::is_attacked;
pub use board::{Board, MoveError, PromoteError};
pub use game::Game;
pub use movegen::{all_moves, has_legal_move, legal_destinations};
pub use status::{is_check, is_checkmate, is_stalemate, status, Status};

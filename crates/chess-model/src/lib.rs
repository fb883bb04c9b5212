//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Color`] for the two players
//! - [`Coord`] for board coordinates
//! - [`Piece`] and [`PieceKind`] for piece representation
//! - [`Square`] as the bounds-checked lookup view of a board cell
//! - [`Move`] for move representation

mod color;
mod coord;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use coord::Coord;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;

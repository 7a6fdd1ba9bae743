//! Core types for the chess rules engine.
//!
//! This crate provides the fundamental types shared across the workspace:
//! - [`Side`] and [`Piece`]/[`PieceKind`] for board occupants
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`MovePattern`] and the static movement and threat tables
//! - [`Move`] for move intents
//! - [`Layout`] for parsing stored session records

mod layout;
mod mov;
mod pattern;
mod piece;
mod side;
mod square;

pub use layout::{Layout, LayoutError, SquareToken, TurnToken};
pub use mov::{Move, MoveKind, SpecialKind};
pub use pattern::{
    CaptureMode, DirectionClass, MovePattern, BISHOP_MOVES, KING_MOVES, KNIGHT_MOVES, PAWN_ADVANCE,
    PAWN_ATTACK, PAWN_DOUBLE_ADVANCE, QUEEN_MOVES, ROOK_MOVES, THREAT_PATTERNS,
};
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::{File, Rank, Square};

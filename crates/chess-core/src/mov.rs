//! Move representation.

use crate::{Side, Square};
use std::fmt;

/// How a move manipulates the board beyond relocating its primary piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Plain relocation.
    Simple,
    /// A pawn's first move covering two rows; opens its en passant window.
    DoubleStep,
    /// The king's two-square step toward a rook. The rook relocation
    /// executes immediately after the king lands.
    Castling {
        rook_from: Square,
        rook_to: Square,
    },
    /// Diagonal pawn capture of an adjacent double-stepped pawn. The
    /// captured pawn is relocated onto the destination first, so the
    /// primary relocation overwrites it.
    EnPassant { captured_from: Square },
}

/// A move intent: one side moving a piece from a source to a destination.
///
/// Two moves are equal when side, source, and destination match. The kind
/// is deliberately excluded from equality so that a bare source/destination
/// intent typed by a player compares equal to the fully specified move the
/// generator produced for the same squares.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub side: Side,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Creates a move.
    pub const fn new(side: Side, from: Square, to: Square, kind: MoveKind) -> Self {
        Move {
            side,
            from,
            to,
            kind,
        }
    }

    /// Creates a plain relocation intent.
    pub const fn simple(side: Side, from: Square, to: Square) -> Self {
        Move::new(side, from, to, MoveKind::Simple)
    }

    /// True for moves with effects beyond relocating one piece.
    pub const fn is_special(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Castling { .. } | MoveKind::EnPassant { .. }
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Special-move classification surfaced to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKind {
    Castling,
    EnPassant,
    Promotion,
}

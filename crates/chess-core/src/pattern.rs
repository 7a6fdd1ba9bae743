//! Static movement-pattern tables.
//!
//! Each piece kind moves according to a fixed pattern record: a family of
//! step directions, a maximum slide distance, and a capture mode. Check
//! detection replays the same records outward from a king's square, so the
//! table doubles as the threat table.

use crate::PieceKind;

/// Families of step directions a pattern walks along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionClass {
    /// Straight up and down the columns.
    Vertical,
    /// Verticals plus laterals.
    Orthogonal,
    /// The four diagonals.
    Diagonal,
    /// All eight surrounding directions.
    Omni,
    /// The knight's eight L-jumps.
    KnightJump,
}

impl DirectionClass {
    /// The (row delta, column delta) unit steps for this class.
    pub const fn steps(self) -> &'static [(i8, i8)] {
        match self {
            DirectionClass::Vertical => &[(-1, 0), (1, 0)],
            DirectionClass::Orthogonal => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
            DirectionClass::Diagonal => &[(-1, -1), (-1, 1), (1, -1), (1, 1)],
            DirectionClass::Omni => &[
                (-1, 0),
                (1, 0),
                (0, -1),
                (0, 1),
                (-1, -1),
                (-1, 1),
                (1, -1),
                (1, 1),
            ],
            DirectionClass::KnightJump => &[
                (-2, -1),
                (-2, 1),
                (-1, -2),
                (-1, 2),
                (1, -2),
                (1, 2),
                (2, -1),
                (2, 1),
            ],
        }
    }
}

/// What a pattern may do to its destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// May land on empty squares or capture.
    Unrestricted,
    /// Only valid when capturing an enemy piece.
    AttackOnly,
    /// Only valid onto empty squares.
    NonCapture,
}

/// One piece kind's movement, as static domain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePattern {
    pub directions: DirectionClass,
    /// Maximum number of steps along a direction.
    pub range: u8,
    pub capture: CaptureMode,
    /// Pawn restriction: only directions advancing toward the enemy side.
    pub forward_only: bool,
}

impl MovePattern {
    const fn new(
        directions: DirectionClass,
        range: u8,
        capture: CaptureMode,
        forward_only: bool,
    ) -> Self {
        MovePattern {
            directions,
            range,
            capture,
            forward_only,
        }
    }
}

pub const KING_MOVES: MovePattern =
    MovePattern::new(DirectionClass::Omni, 1, CaptureMode::Unrestricted, false);
pub const QUEEN_MOVES: MovePattern =
    MovePattern::new(DirectionClass::Omni, 7, CaptureMode::Unrestricted, false);
pub const ROOK_MOVES: MovePattern = MovePattern::new(
    DirectionClass::Orthogonal,
    7,
    CaptureMode::Unrestricted,
    false,
);
pub const BISHOP_MOVES: MovePattern = MovePattern::new(
    DirectionClass::Diagonal,
    7,
    CaptureMode::Unrestricted,
    false,
);
pub const KNIGHT_MOVES: MovePattern = MovePattern::new(
    DirectionClass::KnightJump,
    1,
    CaptureMode::Unrestricted,
    false,
);
/// A pawn's plain one-square advance.
pub const PAWN_ADVANCE: MovePattern =
    MovePattern::new(DirectionClass::Vertical, 1, CaptureMode::NonCapture, true);
/// The two-square advance available while a pawn has not moved.
pub const PAWN_DOUBLE_ADVANCE: MovePattern =
    MovePattern::new(DirectionClass::Vertical, 2, CaptureMode::NonCapture, true);
/// A pawn's diagonal capture.
pub const PAWN_ATTACK: MovePattern =
    MovePattern::new(DirectionClass::Diagonal, 1, CaptureMode::AttackOnly, true);

/// Patterns replayed from a king's square to find attackers: the king is
/// in check when an enemy piece of the paired kind occupies a square the
/// king could reach using that piece's own pattern.
pub const THREAT_PATTERNS: [(PieceKind, MovePattern); 6] = [
    (PieceKind::King, KING_MOVES),
    (PieceKind::Queen, QUEEN_MOVES),
    (PieceKind::Rook, ROOK_MOVES),
    (PieceKind::Bishop, BISHOP_MOVES),
    (PieceKind::Knight, KNIGHT_MOVES),
    (PieceKind::Pawn, PAWN_ATTACK),
];

impl PieceKind {
    /// The base pattern a piece of this kind moves with. Pawns layer their
    /// attack and double-advance patterns on top of this.
    pub const fn base_pattern(self) -> MovePattern {
        match self {
            PieceKind::King => KING_MOVES,
            PieceKind::Queen => QUEEN_MOVES,
            PieceKind::Rook => ROOK_MOVES,
            PieceKind::Bishop => BISHOP_MOVES,
            PieceKind::Knight => KNIGHT_MOVES,
            PieceKind::Pawn => PAWN_ADVANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counts() {
        assert_eq!(DirectionClass::Vertical.steps().len(), 2);
        assert_eq!(DirectionClass::Orthogonal.steps().len(), 4);
        assert_eq!(DirectionClass::Diagonal.steps().len(), 4);
        assert_eq!(DirectionClass::Omni.steps().len(), 8);
        assert_eq!(DirectionClass::KnightJump.steps().len(), 8);
    }

    #[test]
    fn base_patterns() {
        assert_eq!(PieceKind::Rook.base_pattern().range, 7);
        assert_eq!(PieceKind::King.base_pattern().range, 1);
        assert_eq!(PieceKind::Pawn.base_pattern().capture, CaptureMode::NonCapture);
        assert!(PieceKind::Pawn.base_pattern().forward_only);
        assert!(!PieceKind::Queen.base_pattern().forward_only);
    }

    #[test]
    fn threat_table_pairs_pawn_with_attack_pattern() {
        let (kind, pattern) = THREAT_PATTERNS[5];
        assert_eq!(kind, PieceKind::Pawn);
        assert_eq!(pattern.capture, CaptureMode::AttackOnly);
        assert_eq!(pattern.directions, DirectionClass::Diagonal);
    }
}

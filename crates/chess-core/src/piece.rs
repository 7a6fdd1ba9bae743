//! Piece kinds and board occupants.

use crate::Side;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Returns the layout token for this kind.
    pub const fn token(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parses a layout token into a piece kind.
    pub const fn from_token(c: char) -> Option<Self> {
        match c {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}

/// A board occupant: a piece together with its per-piece bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    /// Times this piece has been the primary mover of a relocation. Gates
    /// castling eligibility and the pawn double step.
    pub move_count: u32,
    /// The turn on which this pawn's double step opened its en passant
    /// window, while that window is still open.
    pub en_passant_since: Option<u32>,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece {
            side,
            kind,
            move_count: 0,
            en_passant_since: None,
        }
    }

    /// Creates a piece with a prior move count.
    pub const fn with_moves(side: Side, kind: PieceKind, move_count: u32) -> Self {
        Piece {
            side,
            kind,
            move_count,
            en_passant_since: None,
        }
    }

    /// True while an opposing pawn may still capture this pawn en passant.
    #[inline]
    pub const fn en_passant_capturable(&self) -> bool {
        self.en_passant_since.is_some()
    }

    /// Replaces the kind in place. The move count survives promotion; the
    /// en passant window does not.
    pub fn promote(&mut self, kind: PieceKind) {
        self.kind = kind;
        self.en_passant_since = None;
    }
}

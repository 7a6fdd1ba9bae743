//! Parsing of stored session records.
//!
//! A stored session is a four-field record: the side holding the turn, the
//! turn counter, the capture delta, and a board string. The board string is
//! exactly 64 whitespace-separated square tokens, top-left square (a8)
//! first; a trailing delimiter is tolerated. Each token is
//! `[side][kind][flag]`:
//!
//! - side: `-` (empty), `r` (Red), `b` (Black)
//! - kind: `-`, `r`, `n`, `b`, `q`, `k`, `p`
//! - flag (optional): `-`/absent for zero prior moves, `1` or `2` for the
//!   move count, or `e` for a pawn currently capturable en passant. The
//!   `e` flag implies one prior move, with the window anchored one turn
//!   before the record's turn count.
//!
//! The format is consumed only; nothing in the engine produces it.

use crate::{Piece, PieceKind, Side};
use thiserror::Error;

/// Errors produced while parsing a stored session record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 4 record fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid turn token: expected 'r', 'b' or 'n', got {0:?}")]
    InvalidTurn(String),

    #[error("invalid turn count: {0:?}")]
    InvalidTurnCount(String),

    #[error("invalid capture delta: {0:?}")]
    InvalidCaptureDelta(String),

    #[error("expected 64 square tokens, got {0}")]
    InvalidSquareCount(usize),

    #[error("invalid square token {token:?} at square {index}")]
    InvalidSquareToken { token: String, index: usize },
}

/// The side holding the turn in a stored record.
///
/// `Neutral` marks scratch layouts stored without a meaningful turn; a
/// session loading one falls back to Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnToken {
    Red,
    Black,
    Neutral,
}

impl TurnToken {
    /// The side this token names, if any.
    pub const fn side(self) -> Option<Side> {
        match self {
            TurnToken::Red => Some(Side::Red),
            TurnToken::Black => Some(Side::Black),
            TurnToken::Neutral => None,
        }
    }
}

/// One parsed square token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareToken {
    pub occupant: Option<(Side, PieceKind)>,
    pub move_count: u32,
    pub en_passant: bool,
}

impl SquareToken {
    /// Builds the occupant this token describes, if any. The caller
    /// supplies the record's turn count to anchor a live en passant
    /// window.
    pub fn to_piece(self, turn_count: u32) -> Option<Piece> {
        let (side, kind) = self.occupant?;
        let mut piece = Piece::with_moves(side, kind, self.move_count);
        if self.en_passant {
            piece.en_passant_since = Some(turn_count.saturating_sub(1));
        }
        Some(piece)
    }
}

/// A parsed session record, still uninterpreted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub turn: TurnToken,
    pub turn_count: u32,
    pub capture_delta: u32,
    /// Exactly 64 entries, top-left square first.
    pub squares: Vec<SquareToken>,
}

impl Layout {
    /// Parses a four-field session record.
    pub fn parse(record: &[&str]) -> Result<Self, LayoutError> {
        if record.len() != 4 {
            return Err(LayoutError::InvalidFieldCount(record.len()));
        }

        let turn = match record[0] {
            "r" => TurnToken::Red,
            "b" => TurnToken::Black,
            "n" => TurnToken::Neutral,
            other => return Err(LayoutError::InvalidTurn(other.to_string())),
        };

        let turn_count = parse_counter(record[1], 5)
            .ok_or_else(|| LayoutError::InvalidTurnCount(record[1].to_string()))?;
        let capture_delta = parse_counter(record[2], 2)
            .ok_or_else(|| LayoutError::InvalidCaptureDelta(record[2].to_string()))?;

        let squares = Self::parse_board(record[3])?;

        Ok(Layout {
            turn,
            turn_count,
            capture_delta,
            squares,
        })
    }

    /// Parses the 64-token board string.
    pub fn parse_board(board: &str) -> Result<Vec<SquareToken>, LayoutError> {
        let tokens: Vec<&str> = board.split_whitespace().collect();
        if tokens.len() != 64 {
            return Err(LayoutError::InvalidSquareCount(tokens.len()));
        }

        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                parse_square_token(token).ok_or_else(|| LayoutError::InvalidSquareToken {
                    token: token.to_string(),
                    index,
                })
            })
            .collect()
    }
}

/// Parses a bounded decimal counter field.
fn parse_counter(field: &str, max_digits: usize) -> Option<u32> {
    if field.is_empty() || field.len() > max_digits {
        return None;
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn parse_square_token(token: &str) -> Option<SquareToken> {
    let mut chars = token.chars();
    let side_char = chars.next()?;
    let kind_char = chars.next()?;
    let flag_char = chars.next();
    if chars.next().is_some() {
        return None;
    }

    let side = match side_char {
        '-' => None,
        c => Some(Side::from_token(c)?),
    };
    let kind = match kind_char {
        '-' => None,
        c => Some(PieceKind::from_token(c)?),
    };

    let (move_count, en_passant) = match flag_char {
        None | Some('-') => (0, false),
        Some('1') => (1, false),
        Some('2') => (2, false),
        Some('e') => (1, true),
        Some(_) => return None,
    };

    // A token is an occupant only when both side and kind are present.
    let occupant = match (side, kind) {
        (Some(side), Some(kind)) => Some((side, kind)),
        _ => None,
    };

    Some(SquareToken {
        occupant,
        move_count,
        en_passant,
    })
}

//! The turn controller.
//!
//! [`Session`] owns the live board and walks it through turns: selection,
//! legal-set membership, move execution, promotion, en passant expiry, the
//! capture delta, and outcome evaluation. The interface layer talks to the
//! engine exclusively through this type and the read-only projections it
//! returns.

use crate::legality::{self, SelectionReport};
use crate::{apply, check, layouts, Board};
use chess_core::{Layout, Move, PieceKind, Side, Square};
use thiserror::Error;

/// Number of consecutive captureless turns that force a draw.
pub const CAPTURE_DELTA_LIMIT: u32 = 50;

/// Errors surfaced to the interface layer. All of them are recoverable:
/// the turn loop reports them and continues without advancing the turn.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("no piece at {0}")]
    EmptySquare(Square),

    #[error("that piece belongs to {actual}; it is {turn}'s turn")]
    WrongSide { turn: Side, actual: Side },

    #[error("no piece selected")]
    NoSelection,

    #[error("{from}->{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    #[error("the game has already ended")]
    GameOver,

    #[error("a pawn is awaiting promotion")]
    PromotionPending,

    #[error("no pawn is awaiting promotion")]
    NoPromotionPending,

    #[error("a pawn cannot be promoted to a {0}")]
    InvalidPromotion(PieceKind),
}

/// Why a finished game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// No legal moves while not in check.
    Stalemate,
    /// Fifty consecutive turns without a capture.
    FiftyMoves,
}

/// The state of a session's game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Checkmate { loser: Side },
    Draw(DrawReason),
}

impl Outcome {
    /// True once the game has ended.
    pub const fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A cached selection: the source square and its filtered move set.
#[derive(Debug, Clone)]
struct Selection {
    from: Square,
    report: SelectionReport,
}

#[derive(Debug, Clone, Copy)]
struct PendingPromotion {
    square: Square,
    captured: bool,
}

/// Result of a completed (or promotion-suspended) move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReceipt {
    /// Whether the move removed an enemy piece.
    pub captured: bool,
    /// The pawn square awaiting a promotion choice. While set, the turn
    /// has not advanced; [`Session::promote`] completes it.
    pub promotion: Option<Square>,
    pub outcome: Outcome,
}

/// Per-turn projection handed to the interface layer for display.
#[derive(Debug, Clone)]
pub struct TurnStatus {
    pub side: Side,
    pub turn_count: u32,
    pub capture_delta: u32,
    pub in_check: bool,
    /// Squares of pieces checking the side to move.
    pub attackers: Vec<Square>,
    /// The checked king's square, when in check.
    pub threatened_king: Option<Square>,
    /// Squares sealing a checkmate; empty unless the game ended in one.
    pub mating_squares: Vec<Square>,
    /// A pawn awaiting its promotion choice.
    pub promotion: Option<Square>,
    pub outcome: Outcome,
}

/// A full game in progress.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: Side,
    capture_delta: u32,
    outcome: Outcome,
    selection: Option<Selection>,
    pending_promotion: Option<PendingPromotion>,
}

impl Session {
    /// Starts a game from the standard starting layout.
    pub fn new() -> Self {
        Session::from_layout(&layouts::START.layout())
    }

    /// Starts a game from a parsed layout record. A layout stored with the
    /// neutral turn token loads with Red to move. The position is
    /// evaluated immediately, so a loaded checkmate is reported before any
    /// move is made.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut session = Session {
            board: Board::from_layout(layout),
            turn: layout.turn.side().unwrap_or(Side::Red),
            capture_delta: layout.capture_delta,
            outcome: Outcome::InProgress,
            selection: None,
            pending_promotion: None,
        };
        session.evaluate_outcome();
        session
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side holding the turn.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Turns elapsed since the last capture.
    pub fn capture_delta(&self) -> u32 {
        self.capture_delta
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The current selection, if any.
    pub fn selected(&self) -> Option<(Square, &SelectionReport)> {
        self.selection
            .as_ref()
            .map(|selection| (selection.from, &selection.report))
    }

    /// Selects the piece on `from` and caches its legal move set. A failed
    /// selection clears any selection in progress.
    pub fn select(&mut self, from: Square) -> Result<&SelectionReport, PlayError> {
        if self.outcome.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(PlayError::PromotionPending);
        }
        match legality::legal_moves(&self.board, self.turn, from) {
            Ok(report) => {
                let selection = self.selection.insert(Selection { from, report });
                Ok(&selection.report)
            }
            Err(err) => {
                self.selection = None;
                Err(err)
            }
        }
    }

    /// Drops the current selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Moves the selected piece to `to`. The intent must match a move in
    /// the cached legal set; on a miss the selection is retained so the
    /// player can try another destination.
    pub fn move_to(&mut self, to: Square) -> Result<MoveReceipt, PlayError> {
        if self.outcome.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(PlayError::PromotionPending);
        }
        let selection = self.selection.as_ref().ok_or(PlayError::NoSelection)?;
        let intent = Move::simple(self.turn, selection.from, to);
        let chosen = selection
            .report
            .moves
            .iter()
            .find(|m| **m == intent)
            .copied()
            .ok_or(PlayError::IllegalMove {
                from: selection.from,
                to,
            })?;

        let before = self.board.piece_count();
        apply::apply_move(&mut self.board, &chosen);
        self.selection = None;
        let captured = self.board.piece_count() < before;

        if self.board.find_promotable_pawn(self.turn) == Some(chosen.to) {
            self.pending_promotion = Some(PendingPromotion {
                square: chosen.to,
                captured,
            });
            return Ok(MoveReceipt {
                captured,
                promotion: Some(chosen.to),
                outcome: self.outcome,
            });
        }

        self.finish_turn(captured);
        Ok(MoveReceipt {
            captured,
            promotion: None,
            outcome: self.outcome,
        })
    }

    /// Selects and moves in one step.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveReceipt, PlayError> {
        self.select(from)?;
        self.move_to(to)
    }

    /// Resolves a pending promotion and completes the suspended turn.
    pub fn promote(&mut self, kind: PieceKind) -> Result<MoveReceipt, PlayError> {
        let pending = self.pending_promotion.ok_or(PlayError::NoPromotionPending)?;
        if matches!(kind, PieceKind::King | PieceKind::Pawn) {
            return Err(PlayError::InvalidPromotion(kind));
        }
        self.board.promote(pending.square, kind);
        self.pending_promotion = None;
        self.finish_turn(pending.captured);
        Ok(MoveReceipt {
            captured: pending.captured,
            promotion: None,
            outcome: self.outcome,
        })
    }

    /// Restarts from the standard starting layout.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    /// Restarts from the given layout.
    pub fn load(&mut self, layout: &Layout) {
        *self = Session::from_layout(layout);
    }

    /// The per-turn projection the interface layer renders from.
    pub fn status(&self) -> TurnStatus {
        let report = check::check_report(&self.board, self.turn);
        let mating_squares = match self.outcome {
            Outcome::Checkmate { loser } => check::mate_report(&self.board, loser).mating_squares,
            _ => Vec::new(),
        };
        TurnStatus {
            side: self.turn,
            turn_count: self.board.turn_count(),
            capture_delta: self.capture_delta,
            in_check: report.in_check,
            attackers: report.attackers,
            threatened_king: if report.in_check { report.king } else { None },
            mating_squares,
            promotion: self.pending_promotion.map(|pending| pending.square),
            outcome: self.outcome,
        }
    }

    /// End-of-turn housekeeping, run once per completed turn.
    fn finish_turn(&mut self, captured: bool) {
        self.turn = self.turn.opposite();
        self.board.advance_turn();
        self.board.expire_en_passant();
        if captured {
            self.capture_delta = 0;
        } else {
            self.capture_delta += 1;
        }
        self.evaluate_outcome();
    }

    /// Decides whether the position ends the game for the side to move.
    /// The captureless-turn draw takes precedence over anything on the
    /// board.
    fn evaluate_outcome(&mut self) {
        if self.capture_delta >= CAPTURE_DELTA_LIMIT {
            self.outcome = Outcome::Draw(DrawReason::FiftyMoves);
            return;
        }
        // Scratch layouts without a king stay in progress.
        if self.board.king_square(self.turn).is_none() {
            return;
        }
        if check::mate_report(&self.board, self.turn).total_moves == 0 {
            self.outcome = if check::is_check(&self.board, self.turn) {
                Outcome::Checkmate { loser: self.turn }
            } else {
                Outcome::Draw(DrawReason::Stalemate)
            };
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

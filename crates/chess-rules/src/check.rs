//! Check and checkmate detection.
//!
//! Check detection is symmetric: the king probes outward with each
//! attacker kind's own pattern, and an enemy piece of the matching kind on
//! a reached square is an attacker. Blocking falls out of the pattern walk
//! for free, so a shielded slider never registers.

use crate::{legality, movegen, Board};
use chess_core::{PieceKind, Side, Square, THREAT_PATTERNS};

/// Outcome of probing one side's king for attackers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub in_check: bool,
    /// The probed king's square, when the side has a king at all.
    pub king: Option<Square>,
    /// Squares of the pieces currently delivering check.
    pub attackers: Vec<Square>,
}

/// Probes the given side's king for attackers.
pub fn check_report(board: &Board, side: Side) -> CheckReport {
    let king = match board.king_square(side) {
        Some(king) => king,
        None => {
            return CheckReport {
                in_check: false,
                king: None,
                attackers: Vec::new(),
            }
        }
    };

    let mut attackers = Vec::new();
    for (kind, pattern) in THREAT_PATTERNS {
        for probe in movegen::pattern_moves(board, king, side, &pattern) {
            let occupied_by = match board.piece_at(probe.to) {
                Some(piece) => piece.kind,
                None => continue,
            };
            if occupied_by == kind && !attackers.contains(&probe.to) {
                attackers.push(probe.to);
            }
        }
    }

    CheckReport {
        in_check: !attackers.is_empty(),
        king: Some(king),
        attackers,
    }
}

/// True if the given side's king is attacked.
pub fn is_check(board: &Board, side: Side) -> bool {
    check_report(board, side).in_check
}

/// Result of the side-wide zero-legal-move probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MateReport {
    /// Surviving legal moves summed across every piece of the side.
    pub total_moves: usize,
    /// Squares of the pieces covering the king's escapes. Populated only
    /// when the side has no legal move at all.
    pub mating_squares: Vec<Square>,
}

/// Counts the side's legal moves and, when there are none, collects the
/// squares responsible.
///
/// This answers "does this side have any legal move at all"; the caller
/// distinguishes checkmate from stalemate by consulting check status.
pub fn mate_report(board: &Board, side: Side) -> MateReport {
    let mut total_moves = 0;
    let mut mating_squares = Vec::new();

    for from in board.side_squares(side) {
        let report = match legality::legal_moves(board, side, from) {
            Ok(report) => report,
            Err(_) => continue,
        };
        total_moves += report.moves.len();

        // Only replies to the king's own candidates name the pieces that
        // seal a mate.
        let is_king = matches!(
            board.piece_at(from),
            Some(piece) if piece.kind == PieceKind::King
        );
        if is_king {
            for sq in report.potential_checkers {
                if !mating_squares.contains(&sq) {
                    mating_squares.push(sq);
                }
            }
        }
    }

    if total_moves != 0 {
        mating_squares.clear();
    }

    MateReport {
        total_moves,
        mating_squares,
    }
}

/// True if the given side is checkmated: in check with no legal move.
pub fn is_checkmate(board: &Board, side: Side) -> bool {
    is_check(board, side) && mate_report(board, side).total_moves == 0
}

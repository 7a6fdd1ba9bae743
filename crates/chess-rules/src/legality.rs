//! The check-safety legality filter.
//!
//! Candidates are geometric; legal moves are candidates that do not leave
//! the mover's own king attacked. Every candidate is tried on a cloned
//! board and the clone is probed for check, so the live position is never
//! touched.

use crate::session::PlayError;
use crate::{apply, check, movegen, Board};
use chess_core::{Move, MoveKind, Side, SpecialKind, Square};
use std::collections::BTreeMap;

/// Result of filtering one piece's candidates.
///
/// Everything the interface layer highlights is carried here explicitly;
/// nothing is accumulated through shared state across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionReport {
    /// The surviving legal moves, deduplicated by destination.
    pub moves: Vec<Move>,
    /// Plain destinations, in generation order.
    pub destinations: Vec<Square>,
    /// Destinations reached by a special move, keyed for highlighting.
    /// A special move is kept even when a plain move shares its square.
    pub specials: BTreeMap<Square, SpecialKind>,
    /// Whether the mover is in check before moving.
    pub in_check: bool,
    /// Squares currently checking the mover.
    pub attackers: Vec<Square>,
    /// Enemy squares observed delivering check across the simulated
    /// replies. Collected from every candidate, kept or discarded: a mated
    /// king keeps none, and these squares are exactly what checkmate
    /// reporting highlights.
    pub potential_checkers: Vec<Square>,
}

/// Filters the piece on `from` down to its legal moves.
///
/// Fails when the square is empty or the piece belongs to the opponent;
/// both are recoverable selection errors.
pub fn legal_moves(board: &Board, side: Side, from: Square) -> Result<SelectionReport, PlayError> {
    let piece = board.piece_at(from).ok_or(PlayError::EmptySquare(from))?;
    if piece.side != side {
        return Err(PlayError::WrongSide {
            turn: side,
            actual: piece.side,
        });
    }

    // Current check status is computed once per selection, not per
    // candidate.
    let current = check::check_report(board, side);
    let mut report = SelectionReport {
        moves: Vec::new(),
        destinations: Vec::new(),
        specials: BTreeMap::new(),
        in_check: current.in_check,
        attackers: current.attackers,
        potential_checkers: Vec::new(),
    };

    for candidate in movegen::candidate_moves(board, from) {
        let mut scratch = board.clone();
        apply::apply_move(&mut scratch, &candidate);
        let reply = check::check_report(&scratch, side);

        for sq in &reply.attackers {
            if !report.potential_checkers.contains(sq) {
                report.potential_checkers.push(*sq);
            }
        }
        if reply.in_check {
            continue;
        }

        match candidate.kind {
            MoveKind::Castling { .. } => {
                keep_special(&mut report, candidate, SpecialKind::Castling)
            }
            MoveKind::EnPassant { .. } => {
                keep_special(&mut report, candidate, SpecialKind::EnPassant)
            }
            MoveKind::Simple | MoveKind::DoubleStep => {
                if !report.destinations.contains(&candidate.to) {
                    report.destinations.push(candidate.to);
                    report.moves.push(candidate);
                }
            }
        }
    }

    Ok(report)
}

fn keep_special(report: &mut SelectionReport, candidate: Move, kind: SpecialKind) {
    if !report.specials.contains_key(&candidate.to) {
        report.specials.insert(candidate.to, kind);
        report.moves.push(candidate);
    }
}

//! Candidate move generation.
//!
//! Everything here is geometric: a candidate is a destination reachable
//! under a piece's movement pattern, before the legality filter asks
//! whether making the move would leave the mover's own king attacked.

use crate::{apply, check, Board};
use chess_core::{
    CaptureMode, Move, MoveKind, MovePattern, PieceKind, Side, Square, PAWN_ATTACK,
    PAWN_DOUBLE_ADVANCE,
};

/// Walks one pattern outward from `from` and collects every reachable
/// destination.
///
/// Each direction is walked up to the pattern's range. A step that leaves
/// the board ends the direction; so does the first occupied square, after
/// the move landing on it is considered. Capture-mode filtering decides
/// whether empty or occupied destinations are kept, and a friendly
/// occupant is never a destination.
pub fn pattern_moves(board: &Board, from: Square, side: Side, pattern: &MovePattern) -> Vec<Move> {
    let mut moves = Vec::new();
    for &(row_step, col_step) in pattern.directions.steps() {
        if pattern.forward_only && row_step != side.forward() {
            continue;
        }
        for distance in 1..=pattern.range as i8 {
            let to = match from.offset(row_step * distance, col_step * distance) {
                Some(to) => to,
                None => break,
            };
            match board.piece_at(to) {
                Some(occupant) => {
                    if occupant.side != side
                        && !matches!(pattern.capture, CaptureMode::NonCapture)
                    {
                        moves.push(Move::simple(side, from, to));
                    }
                    break;
                }
                None => {
                    if !matches!(pattern.capture, CaptureMode::AttackOnly) {
                        moves.push(Move::simple(side, from, to));
                    }
                }
            }
        }
    }
    moves
}

/// Every geometrically reachable move for the piece on `from`.
///
/// Pawns layer their attack pattern, the two-square first advance, and en
/// passant on top of the plain advance; kings add castling. The result may
/// contain duplicate destinations; the legality filter deduplicates.
pub fn candidate_moves(board: &Board, from: Square) -> Vec<Move> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };
    let side = piece.side;
    let mut moves = pattern_moves(board, from, side, &piece.kind.base_pattern());

    match piece.kind {
        PieceKind::Pawn => {
            moves.extend(pattern_moves(board, from, side, &PAWN_ATTACK));
            if piece.move_count == 0 {
                moves.extend(pattern_moves(board, from, side, &PAWN_DOUBLE_ADVANCE));
            }
            // Tag two-row advances so execution opens the en passant window.
            for m in &mut moves {
                if matches!(m.kind, MoveKind::Simple) && m.from.row().abs_diff(m.to.row()) == 2 {
                    m.kind = MoveKind::DoubleStep;
                }
            }
            moves.extend(en_passant_moves(board, from, side));
        }
        PieceKind::King => moves.extend(castling_moves(board, from, side)),
        _ => {}
    }

    moves
}

/// En passant candidates for the pawn on `from`.
///
/// Each side of the pawn is examined independently against the neighbor
/// actually being captured there. The destination is the square behind the
/// neighbor; execution relocates the captured pawn onto it first, so the
/// pawn's diagonal step lands as an ordinary overwrite.
pub fn en_passant_moves(board: &Board, from: Square, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for col_step in [-1i8, 1] {
        let neighbor = match from.offset(0, col_step) {
            Some(sq) => sq,
            None => continue,
        };
        let target = match board.piece_at(neighbor) {
            Some(piece) => piece,
            None => continue,
        };
        if target.side != side.opposite()
            || target.kind != PieceKind::Pawn
            || !target.en_passant_capturable()
        {
            continue;
        }
        if let Some(to) = from.offset(side.forward(), col_step) {
            moves.push(Move::new(
                side,
                from,
                to,
                MoveKind::EnPassant {
                    captured_from: neighbor,
                },
            ));
        }
    }
    moves
}

/// Castling candidates for the king on `king_sq`.
///
/// Both wings are evaluated independently: the king must stand unmoved on
/// its home square and not be in check; the wing rook must stand unmoved
/// on its corner; every square between them must be empty; and the square
/// the king crosses must not be attacked, probed by stepping the king onto
/// it on a board clone. The landing square itself is vetted by the
/// legality filter like any other candidate.
pub fn castling_moves(board: &Board, king_sq: Square, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    let home = match side {
        Side::Red => Square::E1,
        Side::Black => Square::E8,
    };
    let king = match board.piece_at(king_sq) {
        Some(piece) => piece,
        None => return moves,
    };
    if king_sq != home || king.move_count != 0 || check::is_check(board, side) {
        return moves;
    }

    for wing in [-1i8, 1] {
        let rook_distance = if wing < 0 { 4 } else { 3 };
        let rook_from = match home.offset(0, wing * rook_distance) {
            Some(sq) => sq,
            None => continue,
        };
        let rook_ok = matches!(
            board.piece_at(rook_from),
            Some(piece)
                if piece.side == side
                    && piece.kind == PieceKind::Rook
                    && piece.move_count == 0
        );
        if !rook_ok {
            continue;
        }

        let blocked = (1..rook_distance)
            .filter_map(|distance| home.offset(0, wing * distance))
            .any(|sq| board.is_occupied(sq));
        if blocked {
            continue;
        }

        let (crossed, king_to) = match (home.offset(0, wing), home.offset(0, 2 * wing)) {
            (Some(crossed), Some(king_to)) => (crossed, king_to),
            _ => continue,
        };
        let mut probe = board.clone();
        apply::apply_move(&mut probe, &Move::simple(side, home, crossed));
        if check::is_check(&probe, side) {
            continue;
        }

        // The rook lands on the square the king crossed.
        moves.push(Move::new(
            side,
            home,
            king_to,
            MoveKind::Castling {
                rook_from,
                rook_to: crossed,
            },
        ));
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts;
    use chess_core::Piece;

    fn board_from(name: &str) -> Board {
        Board::from_layout(&layouts::find(name).unwrap().layout())
    }

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    fn destinations(moves: &[Move]) -> Vec<Square> {
        moves.iter().map(|m| m.to).collect()
    }

    #[test]
    fn rook_slides_until_the_edge() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Piece::new(Side::Red, PieceKind::Rook));
        let moves = candidate_moves(&board, sq("d4"));
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn rook_stops_at_friendly_piece_and_captures_enemy() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Piece::new(Side::Red, PieceKind::Rook));
        board.set_piece(sq("d6"), Piece::new(Side::Red, PieceKind::Pawn));
        board.set_piece(sq("f4"), Piece::new(Side::Black, PieceKind::Pawn));
        let moves = candidate_moves(&board, sq("d4"));
        let dests = destinations(&moves);
        assert!(dests.contains(&sq("d5")));
        assert!(!dests.contains(&sq("d6")), "friendly piece is not a capture");
        assert!(!dests.contains(&sq("d7")), "walk stops at the obstruction");
        assert!(dests.contains(&sq("f4")), "enemy piece is captured");
        assert!(!dests.contains(&sq("g4")), "walk stops after the capture");
    }

    #[test]
    fn knight_in_the_corner_has_two_jumps() {
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Piece::new(Side::Red, PieceKind::Knight));
        let moves = candidate_moves(&board, sq("a1"));
        let mut dests = destinations(&moves);
        dests.sort();
        let mut expected = vec![sq("b3"), sq("c2")];
        expected.sort();
        assert_eq!(dests, expected);
    }

    #[test]
    fn bishop_does_not_wrap_across_rows() {
        let mut board = Board::empty();
        board.set_piece(sq("h4"), Piece::new(Side::Red, PieceKind::Bishop));
        let moves = candidate_moves(&board, sq("h4"));
        let dests = destinations(&moves);
        // Every destination stays on the two diagonals through h4.
        assert!(dests.iter().all(|d| {
            (d.row() as i8 - sq("h4").row() as i8).abs()
                == (d.col() as i8 - sq("h4").col() as i8).abs()
        }));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn fresh_pawn_advances_one_or_two() {
        let board = board_from("start");
        let moves = candidate_moves(&board, sq("e2"));
        let dests = destinations(&moves);
        assert!(dests.contains(&sq("e3")));
        assert!(dests.contains(&sq("e4")));
        assert!(!dests.contains(&sq("e1")), "pawns never move backward");
        let double = moves.iter().find(|m| m.to == sq("e4")).unwrap();
        assert_eq!(double.kind, MoveKind::DoubleStep);
        let single = moves.iter().find(|m| m.to == sq("e3")).unwrap();
        assert_eq!(single.kind, MoveKind::Simple);
    }

    #[test]
    fn moved_pawn_loses_the_double_step() {
        let mut board = Board::empty();
        board.set_piece(sq("e3"), Piece::with_moves(Side::Red, PieceKind::Pawn, 1));
        let moves = candidate_moves(&board, sq("e3"));
        assert_eq!(destinations(&moves), vec![sq("e4")]);
    }

    #[test]
    fn pawn_double_step_is_blocked_by_an_intervening_piece() {
        let mut board = Board::empty();
        board.set_piece(sq("e2"), Piece::new(Side::Red, PieceKind::Pawn));
        board.set_piece(sq("e3"), Piece::new(Side::Black, PieceKind::Knight));
        let moves = candidate_moves(&board, sq("e2"));
        assert!(moves.is_empty(), "blocked straight ahead, nothing diagonal");
    }

    #[test]
    fn pawn_attacks_diagonally_forward_only() {
        let mut board = Board::empty();
        board.set_piece(sq("e4"), Piece::with_moves(Side::Red, PieceKind::Pawn, 1));
        board.set_piece(sq("d5"), Piece::new(Side::Black, PieceKind::Pawn));
        board.set_piece(sq("f5"), Piece::new(Side::Red, PieceKind::Pawn));
        board.set_piece(sq("d3"), Piece::new(Side::Black, PieceKind::Pawn));
        let moves = candidate_moves(&board, sq("e4"));
        let dests = destinations(&moves);
        assert!(dests.contains(&sq("d5")), "enemy on the forward diagonal");
        assert!(!dests.contains(&sq("f5")), "friendly piece is not a capture");
        assert!(!dests.contains(&sq("d3")), "no capturing backward");
        assert!(dests.contains(&sq("e5")));
    }

    #[test]
    fn black_pawns_advance_toward_red() {
        let board = board_from("start");
        let moves = candidate_moves(&board, sq("e7"));
        let dests = destinations(&moves);
        assert!(dests.contains(&sq("e6")));
        assert!(dests.contains(&sq("e5")));
        assert!(!dests.contains(&sq("e8")));
    }

    #[test]
    fn en_passant_to_the_left() {
        let board = board_from("en-passant");
        let moves = candidate_moves(&board, sq("f5"));
        let ep = moves
            .iter()
            .find(|m| matches!(m.kind, MoveKind::EnPassant { .. }))
            .expect("en passant candidate");
        assert_eq!(ep.to, sq("e6"));
        assert_eq!(
            ep.kind,
            MoveKind::EnPassant {
                captured_from: sq("e5")
            }
        );
    }

    #[test]
    fn en_passant_to_the_right_with_empty_left_neighbor() {
        // Regression: the right-side window must be judged by the right
        // neighbor, even when the left neighbor square is empty.
        let record = [
            "r",
            "3",
            "2",
            "br bn bb bq bk bb bn br \
             bp bp bp bp bp -- bp bp \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- rp2 bpe -- -- \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- -- -- -- -- \
             rp rp rp rp -- rp rp rp \
             rr rn rb rq rk rb rn rr ",
        ];
        let board = Board::from_layout(&chess_core::Layout::parse(&record).unwrap());
        let moves = candidate_moves(&board, sq("e5"));
        let ep = moves
            .iter()
            .find(|m| matches!(m.kind, MoveKind::EnPassant { .. }))
            .expect("right-side en passant candidate");
        assert_eq!(ep.to, sq("f6"));
        assert_eq!(
            ep.kind,
            MoveKind::EnPassant {
                captured_from: sq("f5")
            }
        );
    }

    #[test]
    fn en_passant_on_both_sides_of_one_pawn() {
        let board = board_from("en-passant-double");
        let moves = candidate_moves(&board, sq("g5"));
        let ep_dests: Vec<Square> = moves
            .iter()
            .filter(|m| matches!(m.kind, MoveKind::EnPassant { .. }))
            .map(|m| m.to)
            .collect();
        assert!(ep_dests.contains(&sq("f6")));
        assert!(ep_dests.contains(&sq("h6")));
    }

    #[test]
    fn no_en_passant_against_a_twice_moved_pawn() {
        let board = board_from("en-passant-stale");
        let moves = candidate_moves(&board, sq("f5"));
        assert!(moves
            .iter()
            .all(|m| !matches!(m.kind, MoveKind::EnPassant { .. })));
    }

    #[test]
    fn no_en_passant_after_the_window_closed() {
        let board = board_from("en-passant-missed");
        let moves = candidate_moves(&board, sq("d4"));
        assert!(moves
            .iter()
            .all(|m| !matches!(m.kind, MoveKind::EnPassant { .. })));
    }

    #[test]
    fn castling_on_both_wings() {
        let board = board_from("castle-both");
        let moves = castling_moves(&board, Square::E1, Side::Red);
        assert_eq!(moves.len(), 2);

        let left = moves.iter().find(|m| m.to == Square::C1).unwrap();
        assert_eq!(
            left.kind,
            MoveKind::Castling {
                rook_from: Square::A1,
                rook_to: Square::D1
            }
        );
        let right = moves.iter().find(|m| m.to == Square::G1).unwrap();
        assert_eq!(
            right.kind,
            MoveKind::Castling {
                rook_from: Square::H1,
                rook_to: Square::F1
            }
        );
    }

    #[test]
    fn castling_single_wing_only() {
        let board = board_from("castle-left");
        let moves = castling_moves(&board, Square::E1, Side::Red);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Square::C1);
    }

    #[test]
    fn no_castling_while_in_check() {
        let board = board_from("castle-in-check");
        assert!(castling_moves(&board, Square::E1, Side::Red).is_empty());
    }

    #[test]
    fn no_castling_for_a_moved_king() {
        let board = board_from("castle-king-moved");
        let king_sq = board.king_square(Side::Red).unwrap();
        assert!(castling_moves(&board, king_sq, Side::Red).is_empty());
    }

    #[test]
    fn no_castling_with_a_moved_rook() {
        let board = board_from("castle-rook-moved");
        let moves = castling_moves(&board, Square::E1, Side::Red);
        assert_eq!(destinations(&moves), vec![Square::G1]);
    }

    #[test]
    fn no_castling_through_an_attacked_square() {
        let board = board_from("castle-right-attacked");
        let moves = castling_moves(&board, Square::E1, Side::Red);
        // The f1 crossing is covered, the a-wing is untouched.
        assert_eq!(destinations(&moves), vec![Square::C1]);
    }

    #[test]
    fn no_castling_through_blockers() {
        let board = board_from("start");
        assert!(castling_moves(&board, Square::E1, Side::Red).is_empty());
    }

    #[test]
    fn black_castles_from_the_top_row() {
        let record = [
            "b",
            "1",
            "0",
            "br -- -- -- bk -- -- br \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- -- -- -- -- \
             -- -- -- -- rk -- -- -- ",
        ];
        let board = Board::from_layout(&chess_core::Layout::parse(&record).unwrap());
        let moves = castling_moves(&board, Square::E8, Side::Black);
        let dests = destinations(&moves);
        assert!(dests.contains(&Square::C8));
        assert!(dests.contains(&Square::G8));
    }
}

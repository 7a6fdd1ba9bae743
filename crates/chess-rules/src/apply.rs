//! Move execution.
//!
//! A move reaching this module has already been confirmed a member of the
//! legal set (or is a simulation probe on a scratch board); nothing here
//! re-validates geometry.

use crate::Board;
use chess_core::{Move, MoveKind, Square};

/// Applies a move to the board, dispatching on its kind.
///
/// Relocation overwrites the destination, vacates the source, and
/// increments the mover's move count. Secondary relocations (the castled
/// rook, the en passant victim) are primary movers of their own step and
/// count it too.
pub fn apply_move(board: &mut Board, m: &Move) {
    match m.kind {
        MoveKind::Simple => relocate(board, m.from, m.to),
        MoveKind::DoubleStep => {
            relocate(board, m.from, m.to);
            let turn_count = board.turn_count();
            if let Some(pawn) = board.piece_at_mut(m.to) {
                pawn.en_passant_since = Some(turn_count);
            }
        }
        MoveKind::Castling { rook_from, rook_to } => {
            relocate(board, m.from, m.to);
            relocate(board, rook_from, rook_to);
        }
        MoveKind::EnPassant { captured_from } => {
            // The captured pawn is dragged onto the destination first; the
            // mover's landing overwrites it.
            relocate(board, captured_from, m.to);
            relocate(board, m.from, m.to);
        }
    }
}

fn relocate(board: &mut Board, from: Square, to: Square) {
    if let Some(mut piece) = board.clear_square(from) {
        piece.move_count += 1;
        board.set_piece(to, piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind, Side};

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    #[test]
    fn simple_move_relocates_and_counts() {
        let mut board = Board::start_position();
        apply_move(
            &mut board,
            &Move::simple(Side::Red, sq("g1"), sq("f3")),
        );
        assert!(!board.is_occupied(sq("g1")));
        let knight = board.piece_at(sq("f3")).unwrap();
        assert_eq!(knight.kind, PieceKind::Knight);
        assert_eq!(knight.move_count, 1);
    }

    #[test]
    fn capture_overwrites_the_destination() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Piece::new(Side::Red, PieceKind::Rook));
        board.set_piece(sq("d7"), Piece::new(Side::Black, PieceKind::Pawn));
        apply_move(&mut board, &Move::simple(Side::Red, sq("d4"), sq("d7")));
        let piece = board.piece_at(sq("d7")).unwrap();
        assert_eq!(piece.side, Side::Red);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn double_step_opens_the_window() {
        let mut board = Board::start_position();
        apply_move(
            &mut board,
            &Move::new(Side::Red, sq("e2"), sq("e4"), MoveKind::DoubleStep),
        );
        let pawn = board.piece_at(sq("e4")).unwrap();
        assert_eq!(pawn.move_count, 1);
        assert_eq!(pawn.en_passant_since, Some(board.turn_count()));
    }

    #[test]
    fn castling_moves_king_then_rook() {
        let mut board = Board::from_layout(&crate::layouts::CASTLE_BOTH.layout());
        apply_move(
            &mut board,
            &Move::new(
                Side::Red,
                Square::E1,
                Square::G1,
                MoveKind::Castling {
                    rook_from: Square::H1,
                    rook_to: Square::F1,
                },
            ),
        );
        assert_eq!(board.piece_at(Square::G1).unwrap().kind, PieceKind::King);
        assert_eq!(board.piece_at(Square::F1).unwrap().kind, PieceKind::Rook);
        assert!(!board.is_occupied(Square::E1));
        assert!(!board.is_occupied(Square::H1));
        assert_eq!(board.piece_at(Square::G1).unwrap().move_count, 1);
        assert_eq!(board.piece_at(Square::F1).unwrap().move_count, 1);
    }

    #[test]
    fn en_passant_capture_removes_the_pawn() {
        let mut board = Board::from_layout(&crate::layouts::EN_PASSANT.layout());
        let before = board.piece_count();
        apply_move(
            &mut board,
            &Move::new(
                Side::Red,
                sq("f5"),
                sq("e6"),
                MoveKind::EnPassant {
                    captured_from: sq("e5"),
                },
            ),
        );
        assert_eq!(board.piece_count(), before - 1);
        assert!(!board.is_occupied(sq("e5")), "victim square vacated");
        assert!(!board.is_occupied(sq("f5")));
        let pawn = board.piece_at(sq("e6")).unwrap();
        assert_eq!(pawn.side, Side::Red);
        assert_eq!(pawn.kind, PieceKind::Pawn);
    }
}

//! The live board: a 64-square grid plus the running turn counter.

use chess_core::{Layout, Piece, PieceKind, Side, Square};

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

/// The 64-square grid. Each square holds an occupant or nothing.
///
/// `Board` is a plain value: cloning it produces the structurally
/// independent snapshot every "what if" simulation works on, so a
/// simulated mutation can never leak into the live position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SQUARES],
    turn_count: u32,
}

impl Board {
    /// Creates a board with no pieces and a zero turn counter.
    pub fn empty() -> Self {
        Board {
            squares: [None; BOARD_SQUARES],
            turn_count: 0,
        }
    }

    /// Creates the standard starting position.
    pub fn start_position() -> Self {
        Board::from_layout(&crate::layouts::START.layout())
    }

    /// Builds a board from a parsed layout record.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        board.turn_count = layout.turn_count;
        for (index, token) in layout.squares.iter().enumerate() {
            board.squares[index] = token.to_piece(layout.turn_count);
        }
        board
    }

    /// Returns the occupant of a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns a mutable reference to the occupant of a square.
    #[inline]
    pub fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.squares[sq.index() as usize].as_mut()
    }

    /// Places an occupant on a square, replacing whatever was there.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index() as usize] = Some(piece);
    }

    /// Empties a square, returning the previous occupant.
    #[inline]
    pub fn clear_square(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// True if the square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index() as usize].is_some()
    }

    /// All squares occupied by the given side.
    pub fn side_squares(&self, side: Side) -> Vec<Square> {
        self.occupied_squares()
            .filter(|(_, piece)| piece.side == side)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Locates the given side's king.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.occupied_squares()
            .find(|(_, piece)| piece.side == side && piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces on the board. Capture detection compares this
    /// across a move.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// The running turn counter.
    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Advances the turn counter by one.
    pub fn advance_turn(&mut self) {
        self.turn_count += 1;
    }

    /// Closes every en passant window older than one turn. The window is
    /// the single opposing turn right after a pawn's double step.
    pub fn expire_en_passant(&mut self) {
        let turn_count = self.turn_count;
        for piece in self.squares.iter_mut().flatten() {
            if let Some(since) = piece.en_passant_since {
                if turn_count > since + 1 {
                    piece.en_passant_since = None;
                }
            }
        }
    }

    /// Finds a pawn of the given side standing on its promotion row.
    pub fn find_promotable_pawn(&self, side: Side) -> Option<Square> {
        let row = side.promotion_row();
        (0..8u8)
            .filter_map(|col| Square::from_index(row * 8 + col))
            .find(|&sq| {
                matches!(
                    self.piece_at(sq),
                    Some(piece) if piece.side == side && piece.kind == PieceKind::Pawn
                )
            })
    }

    /// Promotes the pawn on `sq` to the given kind. No-op when the square
    /// is empty; the session validates before calling.
    pub fn promote(&mut self, sq: Square, kind: PieceKind) {
        if let Some(piece) = self.piece_at_mut(sq) {
            piece.promote(kind);
        }
    }

    fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(index, slot)| {
            let sq = Square::from_index(index as u8)?;
            Some((sq, (*slot)?))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::start_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts;

    #[test]
    fn start_position_counts() {
        let board = Board::start_position();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.side_squares(Side::Red).len(), 16);
        assert_eq!(board.side_squares(Side::Black).len(), 16);
    }

    #[test]
    fn start_position_kings() {
        let board = Board::start_position();
        assert_eq!(board.king_square(Side::Red), Some(Square::E1));
        assert_eq!(board.king_square(Side::Black), Some(Square::E8));
    }

    #[test]
    fn start_position_back_rows() {
        let board = Board::start_position();
        let a1 = board.piece_at(Square::A1).unwrap();
        assert_eq!(a1.side, Side::Red);
        assert_eq!(a1.kind, PieceKind::Rook);
        let a8 = board.piece_at(Square::A8).unwrap();
        assert_eq!(a8.side, Side::Black);
        assert_eq!(a8.kind, PieceKind::Rook);
        let e2 = Square::from_coord("e2").unwrap();
        assert_eq!(board.piece_at(e2).unwrap().kind, PieceKind::Pawn);
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        let e4 = Square::from_coord("e4").unwrap();
        board.set_piece(e4, Piece::new(Side::Red, PieceKind::Knight));
        assert!(board.is_occupied(e4));
        let taken = board.clear_square(e4).unwrap();
        assert_eq!(taken.kind, PieceKind::Knight);
        assert!(!board.is_occupied(e4));
    }

    #[test]
    fn en_passant_window_expires_after_one_turn() {
        let mut board = Board::empty();
        let e4 = Square::from_coord("e4").unwrap();
        let mut pawn = Piece::with_moves(Side::Red, PieceKind::Pawn, 1);
        pawn.en_passant_since = Some(board.turn_count());
        board.set_piece(e4, pawn);

        // The opposing turn right after the double step: still open.
        board.advance_turn();
        board.expire_en_passant();
        assert!(board.piece_at(e4).unwrap().en_passant_capturable());

        // One full turn later: closed.
        board.advance_turn();
        board.expire_en_passant();
        assert!(!board.piece_at(e4).unwrap().en_passant_capturable());
    }

    #[test]
    fn loaded_en_passant_window_is_open() {
        let layout = layouts::find("en-passant").unwrap().layout();
        let mut board = Board::from_layout(&layout);
        let e5 = Square::from_coord("e5").unwrap();
        assert!(board.piece_at(e5).unwrap().en_passant_capturable());

        // The window closes as soon as a full turn passes.
        board.advance_turn();
        board.expire_en_passant();
        assert!(!board.piece_at(e5).unwrap().en_passant_capturable());
    }

    #[test]
    fn promotable_pawn_scan() {
        let mut board = Board::empty();
        assert_eq!(board.find_promotable_pawn(Side::Red), None);

        let c8 = Square::C8;
        board.set_piece(c8, Piece::with_moves(Side::Red, PieceKind::Pawn, 5));
        assert_eq!(board.find_promotable_pawn(Side::Red), Some(c8));
        // A black pawn on Red's promotion row is not promotable.
        assert_eq!(board.find_promotable_pawn(Side::Black), None);

        board.promote(c8, PieceKind::Queen);
        assert_eq!(board.piece_at(c8).unwrap().kind, PieceKind::Queen);
        assert_eq!(board.piece_at(c8).unwrap().move_count, 5);
        assert_eq!(board.find_promotable_pawn(Side::Red), None);
    }

    #[test]
    fn clone_is_independent() {
        let board = Board::start_position();
        let mut snapshot = board.clone();
        snapshot.clear_square(Square::E1);
        assert!(board.is_occupied(Square::E1));
        assert!(!snapshot.is_occupied(Square::E1));
    }
}

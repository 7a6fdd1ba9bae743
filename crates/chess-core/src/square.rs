//! Board square representation.
//!
//! Squares are indexed row-major from the top-left corner as the board is
//! displayed: a8 = 0, h8 = 7, a1 = 56, h1 = 63. Row 0 is Black's home
//! row. This inversion is load-bearing for stored board records and must
//! not change.

use std::fmt;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row as the players read it) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Index 0 is a8 (top left as displayed) and index 63 is h1, so
/// `index = (7 - rank) * 8 + file`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square((7 - rank.index()) * 8 + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from coordinate notation (e.g., "e4" or "E4").
    pub const fn from_coord(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the display row (0 at the top, Black's home row).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the display column (0 at file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.0 % 8) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(7 - self.0 / 8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the coordinate notation for this square.
    pub fn to_coord(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// Steps by the given row and column deltas. Returns `None` when the
    /// step leaves the board; a slide can never wrap across a row edge
    /// because column arithmetic is bounded here, not at the index level.
    #[inline]
    pub const fn offset(self, row_delta: i8, col_delta: i8) -> Option<Square> {
        let row = self.row() as i8 + row_delta;
        let col = self.col() as i8 + col_delta;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square((row * 8 + col) as u8))
        }
    }

    // Home-row squares referenced by castling and the tests.
    pub const A1: Square = Square(56);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
    pub const A8: Square = Square(0);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_coord())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coord())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn inverted_index_mapping() {
        assert_eq!(Square::new(File::A, Rank::R8).index(), 0);
        assert_eq!(Square::new(File::H, Rank::R8).index(), 7);
        assert_eq!(Square::new(File::A, Rank::R1).index(), 56);
        assert_eq!(Square::new(File::H, Rank::R1).index(), 63);
        assert_eq!(Square::new(File::E, Rank::R1).index(), 60);
        assert_eq!(Square::new(File::E, Rank::R8).index(), 4);
    }

    #[test]
    fn square_from_coord() {
        assert_eq!(Square::from_coord("a8"), Some(Square::A8));
        assert_eq!(Square::from_coord("h1"), Some(Square::H1));
        assert_eq!(Square::from_coord("E1"), Some(Square::E1));
        assert_eq!(Square::from_coord("i1"), None);
        assert_eq!(Square::from_coord("a9"), None);
        assert_eq!(Square::from_coord(""), None);
        assert_eq!(Square::from_coord("e44"), None);
    }

    #[test]
    fn coord_roundtrip_all_indices() {
        for index in 0..64 {
            let sq = Square::from_index(index).unwrap();
            assert_eq!(Square::from_coord(&sq.to_coord()), Some(sq));
        }
    }

    #[test]
    fn row_and_col() {
        assert_eq!(Square::E1.row(), 7);
        assert_eq!(Square::E1.col(), 4);
        assert_eq!(Square::A8.row(), 0);
        assert_eq!(Square::A8.col(), 0);
    }

    #[test]
    fn offset_refuses_edges() {
        assert_eq!(Square::H1.offset(0, 1), None);
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::A8.offset(0, -1), None);
        // h4 -> one column right would wrap to a-file in raw index terms
        let h4 = Square::from_coord("h4").unwrap();
        assert_eq!(h4.offset(0, 1), None);
        assert_eq!(h4.offset(-1, 0), Some(Square::from_coord("h5").unwrap()));
    }

    #[test]
    fn offset_steps() {
        let e4 = Square::from_coord("e4").unwrap();
        assert_eq!(e4.offset(-1, 0), Some(Square::from_coord("e5").unwrap()));
        assert_eq!(e4.offset(1, 0), Some(Square::from_coord("e3").unwrap()));
        assert_eq!(e4.offset(0, -1), Some(Square::from_coord("d4").unwrap()));
        assert_eq!(e4.offset(-2, 1), Some(Square::from_coord("f6").unwrap()));
    }

    proptest! {
        #[test]
        fn coord_roundtrip(file_idx in 0u8..8, rank_idx in 0u8..8) {
            let file = File::from_index(file_idx).unwrap();
            let rank = Rank::from_index(rank_idx).unwrap();
            let sq = Square::new(file, rank);
            prop_assert_eq!(Square::from_coord(&sq.to_coord()), Some(sq));
            prop_assert_eq!(sq.file(), file);
            prop_assert_eq!(sq.rank(), rank);
        }
    }
}

//! ANSI board rendering.
//!
//! The renderer consumes read-only projections from the engine - legal
//! destinations, special squares, checking pieces, threatened kings -
//! and turns them into background overlays. Nothing here feeds back into
//! legality.

use chess_core::{Piece, Side, SpecialKind, Square};
use chess_rules::Board;
use std::collections::BTreeMap;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const TAN_BG: &str = "\x1b[48;2;210;164;121m";
const CREAM_BG: &str = "\x1b[48;2;255;235;153m";
const SELECTED_BG: &str = "\x1b[48;2;128;223;255m";
const MOVE_BG: &str = "\x1b[48;2;255;255;255m";
const SPECIAL_BG: &str = "\x1b[48;2;238;204;255m";
const CHECKING_BG: &str = "\x1b[48;2;255;77;77m";
const THREATENED_BG: &str = "\x1b[48;2;255;204;0m";
const CHECKING_TARGET_BG: &str = "\x1b[48;2;255;204;204m";
const RED_FG: &str = "\x1b[38;5;88m";
const BLACK_FG: &str = "\x1b[30m";

/// Squares to emphasize, assembled by the turn loop from engine reports.
#[derive(Debug, Default, Clone)]
pub struct Highlights {
    pub selected: Option<Square>,
    /// Plain legal destinations of the selection.
    pub destinations: Vec<Square>,
    /// Special-move destinations of the selection.
    pub specials: BTreeMap<Square, SpecialKind>,
    /// Pieces currently delivering check (or sealing a mate).
    pub checking: Vec<Square>,
    pub mating: Vec<Square>,
    /// Kings currently in check.
    pub threatened_kings: Vec<Square>,
    /// A pawn awaiting promotion.
    pub promotion: Option<Square>,
}

impl Highlights {
    /// Background for a square. Later rules override earlier ones:
    /// threatened king < plain move < special move < checking piece,
    /// a capturable checker gets its own shade, and the selection always
    /// shows.
    fn background(&self, sq: Square, checkered: &'static str) -> &'static str {
        let mut bg = checkered;
        if self.threatened_kings.contains(&sq) {
            bg = THREATENED_BG;
        }
        let available = self.destinations.contains(&sq);
        if available {
            bg = MOVE_BG;
        }
        if self.specials.contains_key(&sq) || self.promotion == Some(sq) {
            bg = SPECIAL_BG;
        }
        let checking = self.checking.contains(&sq) || self.mating.contains(&sq);
        if checking {
            bg = CHECKING_BG;
        }
        if checking && available {
            bg = CHECKING_TARGET_BG;
        }
        if self.selected == Some(sq) {
            bg = SELECTED_BG;
        }
        bg
    }
}

/// Renders the board with rank and file labels. With `color` off the
/// escape sequences are dropped and empty squares print as dots.
pub fn render(board: &Board, highlights: &Highlights, color: bool) -> String {
    let mut out = String::new();
    out.push_str("     a  b  c  d  e  f  g  h\n");
    for row in 0..8u8 {
        let rank = 8 - row;
        out.push_str(&format!("  {} ", rank));
        for col in 0..8u8 {
            let sq = match Square::from_index(row * 8 + col) {
                Some(sq) => sq,
                None => continue,
            };
            let occupant = board.piece_at(sq);
            if color {
                let checkered = if (row + col) % 2 == 0 { CREAM_BG } else { TAN_BG };
                let bg = highlights.background(sq, checkered);
                match occupant {
                    Some(piece) => {
                        let fg = match piece.side {
                            Side::Red => RED_FG,
                            Side::Black => BLACK_FG,
                        };
                        out.push_str(&format!("{bg}{BOLD}{fg} {} {RESET}", glyph(piece)));
                    }
                    None => out.push_str(&format!("{bg}   {RESET}")),
                }
            } else {
                match occupant {
                    Some(piece) => out.push_str(&format!(" {} ", glyph(piece))),
                    None => out.push_str(" . "),
                }
            }
        }
        out.push_str(&format!(" {}\n", rank));
    }
    out.push_str("     a  b  c  d  e  f  g  h\n");
    out
}

/// Red pieces print uppercase, black pieces lowercase.
fn glyph(piece: Piece) -> char {
    match piece.side {
        Side::Red => piece.kind.token().to_ascii_uppercase(),
        Side::Black => piece.kind.token(),
    }
}

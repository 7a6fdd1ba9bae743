//! Player input parsing.
//!
//! Commands are whitespace-separated words; square arguments use
//! coordinate notation and are case-insensitive. Anything that does not
//! match a known command shape parses to [`Command::Invalid`] rather than
//! an error - a typo is a message, not a failure.

use chess_core::{PieceKind, Square};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Select the piece on a square.
    Select(Square),
    /// Move the previously selected piece.
    MoveTo(Square),
    /// Select and move in one step.
    SelectMove(Square, Square),
    /// Restart from the default layout.
    Reset,
    /// Restart from a named layout.
    Load(String),
    Quit,
    Invalid,
}

/// Parses one input line.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["help" | "h" | "-h" | "--h"] => Command::Help,
        ["sel", square] => match Square::from_coord(square) {
            Some(sq) => Command::Select(sq),
            None => Command::Invalid,
        },
        ["mv", square] => match Square::from_coord(square) {
            Some(sq) => Command::MoveTo(sq),
            None => Command::Invalid,
        },
        ["mv", from, to] => match (Square::from_coord(from), Square::from_coord(to)) {
            (Some(from), Some(to)) => Command::SelectMove(from, to),
            _ => Command::Invalid,
        },
        ["reset"] => Command::Reset,
        ["load", name] => Command::Load((*name).to_string()),
        ["quit" | "exit" | "q"] => Command::Quit,
        _ => Command::Invalid,
    }
}

/// Parses the single-character promotion choice.
pub fn parse_promotion(input: &str) -> Option<PieceKind> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let [word] = words.as_slice() else {
        return None;
    };
    let mut chars = word.chars();
    let choice = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match choice.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    #[test]
    fn select_command() {
        assert_eq!(parse_command("sel a2"), Command::Select(sq("a2")));
        assert_eq!(parse_command("  sel   A2  "), Command::Select(sq("a2")));
        assert_eq!(parse_command("sel i9"), Command::Invalid);
        assert_eq!(parse_command("sel"), Command::Invalid);
        assert_eq!(parse_command("sel a2 a4"), Command::Invalid);
    }

    #[test]
    fn move_commands() {
        assert_eq!(parse_command("mv a4"), Command::MoveTo(sq("a4")));
        assert_eq!(
            parse_command("mv a2 a4"),
            Command::SelectMove(sq("a2"), sq("a4"))
        );
        assert_eq!(parse_command("mv a2 a4 a6"), Command::Invalid);
        assert_eq!(parse_command("mv x2"), Command::Invalid);
    }

    #[test]
    fn bare_commands() {
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("h"), Command::Help);
        assert_eq!(parse_command("reset"), Command::Reset);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn load_command() {
        assert_eq!(
            parse_command("load en-passant"),
            Command::Load("en-passant".to_string())
        );
        assert_eq!(parse_command("load"), Command::Invalid);
    }

    #[test]
    fn noise_is_invalid() {
        assert_eq!(parse_command(""), Command::Invalid);
        assert_eq!(parse_command("dance"), Command::Invalid);
        assert_eq!(parse_command("reset now"), Command::Invalid);
    }

    #[test]
    fn promotion_choices() {
        assert_eq!(parse_promotion("q"), Some(PieceKind::Queen));
        assert_eq!(parse_promotion(" R "), Some(PieceKind::Rook));
        assert_eq!(parse_promotion("b"), Some(PieceKind::Bishop));
        assert_eq!(parse_promotion("N"), Some(PieceKind::Knight));
        assert_eq!(parse_promotion("k"), None);
        assert_eq!(parse_promotion("qq"), None);
        assert_eq!(parse_promotion("q r"), None);
        assert_eq!(parse_promotion(""), None);
    }
}

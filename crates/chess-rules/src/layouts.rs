//! Named board layouts.
//!
//! Each entry is a stored session record (see `chess_core::layout`) with a
//! name the `load` command and the tests refer to. The records double as
//! the fixture library for the engine's specified behavior: checks,
//! checkmates, en passant windows, castling gates, promotion, and the
//! fifty-turn draw.

use chess_core::Layout;

/// A named, documented session record.
#[derive(Debug, Clone, Copy)]
pub struct NamedLayout {
    pub name: &'static str,
    pub summary: &'static str,
    record: [&'static str; 4],
}

impl NamedLayout {
    /// Parses this entry into a layout.
    pub fn layout(&self) -> Layout {
        Layout::parse(&self.record).expect("library layouts are valid")
    }
}

/// Empty board, useful as a scratch base.
pub const EMPTY: NamedLayout = NamedLayout {
    name: "empty",
    summary: "an empty board",
    record: [
        "n",
        "0",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- ",
    ],
};

/// The standard starting position.
pub const START: NamedLayout = NamedLayout {
    name: "start",
    summary: "the standard starting position",
    record: [
        "r",
        "1",
        "0",
        "br bn bb bq bk bb bn br \
         bp bp bp bp bp bp bp bp \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rp rp rp rp rp rp rp rp \
         rr rn rb rq rk rb rn rr ",
    ],
};

/// Red king walked into the black pawn line.
pub const CHECK_RED: NamedLayout = NamedLayout {
    name: "check-red",
    summary: "the Red king in check",
    record: [
        "r",
        "1",
        "0",
        "br bn bb bq -- bb bn br \
         bp bp bp bp bp bp bp bp \
         -- -- -- -- rk -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- rq -- -- -- -- \
         rp rp rp rp rp rp rp rp \
         rr rn rb -- -- rb rn rr ",
    ],
};

/// Both kings in check at once.
pub const CHECK_BOTH: NamedLayout = NamedLayout {
    name: "check-both",
    summary: "both kings in check",
    record: [
        "r",
        "1",
        "0",
        "br bn bb bq -- bb bn br \
         bp bp bp bp bp bp bp bp \
         -- -- -- -- rk -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- bk -- rq -- -- -- -- \
         rp rp rp rp rp rp rp rp \
         rr rn rb -- -- rb rn rr ",
    ],
};

/// Both kings in check with extra black bishops crowding Red's king.
pub const CHECK_CROWDED: NamedLayout = NamedLayout {
    name: "check-crowded",
    summary: "both kings in check, the Red king hemmed in by bishops",
    record: [
        "r",
        "1",
        "0",
        "-- -- bb bb -- bb bb -- \
         -- -- -- bb bb bb -- -- \
         -- -- -- -- rk rp -- -- \
         -- -- -- -- rp -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- bk -- rq -- -- -- -- \
         rp rp rp rp rp rp rp rp \
         rr rn rb -- -- rb rn rr ",
    ],
};

/// Red king checkmated by nine black pieces.
pub const MATE_NINE: NamedLayout = NamedLayout {
    name: "mate-nine",
    summary: "the Red king checkmated by nine pieces",
    record: [
        "r",
        "1",
        "0",
        "br bn bb bq -- bb bn br \
         bp bn bp rk bp bp bp bp \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- ",
    ],
};

/// Red king checkmated by four black pieces.
pub const MATE_FOUR: NamedLayout = NamedLayout {
    name: "mate-four",
    summary: "the Red king checkmated by four pieces",
    record: [
        "r",
        "1",
        "0",
        "-- bn bb -- -- br -- -- \
         -- bn rp rk rp -- -- -- \
         -- -- rp -- rp -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- ",
    ],
};

/// One square away from the four-piece mate.
pub const MATE_IN_ONE: NamedLayout = NamedLayout {
    name: "mate-in-one",
    summary: "the Red king one square from checkmate",
    record: [
        "r",
        "1",
        "0",
        "-- bn bb -- -- br -- -- \
         -- bn rp -- rp -- -- -- \
         -- -- rp rk rp -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- ",
    ],
};

/// The mirrored four-piece mate against Black.
pub const MATE_BLACK: NamedLayout = NamedLayout {
    name: "mate-black",
    summary: "the Black king checkmated by four pieces",
    record: [
        "b",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- bp -- bp -- -- -- \
         -- rn bp bk bp -- -- -- \
         -- rn rb -- -- rr -- -- ",
    ],
};

/// A black pawn freshly double-stepped beside a red pawn.
pub const EN_PASSANT: NamedLayout = NamedLayout {
    name: "en-passant",
    summary: "a Red pawn may capture en passant",
    record: [
        "r",
        "3",
        "2",
        "br bn bb bq bk bb bn br \
         bp bp bp bp -- bp bp bp \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- bpe rp2 -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rp rp rp rp rp -- rp rp \
         rr rn rb rq rk rb rn rr ",
    ],
};

/// The same shoulder-to-shoulder pawns, but the black pawn reached its
/// square in two moves, so no window ever opened.
pub const EN_PASSANT_STALE: NamedLayout = NamedLayout {
    name: "en-passant-stale",
    summary: "no en passant: the adjacent pawn advanced twice",
    record: [
        "r",
        "5",
        "4",
        "br bn bb bq bk bb bn br \
         bp bp bp bp -- bp bp bp \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- bp2 rp2 -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rp rp rp rp rp -- rp rp \
         rr rn rb rq rk rb rn rr ",
    ],
};

/// The capture window already elapsed unused.
pub const EN_PASSANT_MISSED: NamedLayout = NamedLayout {
    name: "en-passant-missed",
    summary: "no en passant: the window was not used in time",
    record: [
        "b",
        "7",
        "6",
        "-- -- -- -- -- -- -- -- \
         bp bp bp -- bp bp bp -- \
         -- -- -- -- -- -- -- bp1 \
         -- -- -- -- -- -- -- -- \
         -- -- -- bp2 rp1 -- -- -- \
         rp1 rp1 -- -- -- -- -- -- \
         -- -- rp rp -- rp rp rp \
         -- -- -- -- -- -- -- -- ",
    ],
};

/// Open windows on both sides of both a red and a black pawn.
pub const EN_PASSANT_DOUBLE: NamedLayout = NamedLayout {
    name: "en-passant-double",
    summary: "en passant available on both sides for both teams",
    record: [
        "r",
        "5",
        "4",
        "br bn bb bq bk bb bn br \
         bp bp -- bp -- bp bp bp \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- bpe rp2 bpe \
         -- rpe bp2 rpe -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rp rp rp rp rp rp -- rp \
         rr rn rb rq rk rb rn rr ",
    ],
};

/// Only the a-side rook remains for castling.
pub const CASTLE_LEFT: NamedLayout = NamedLayout {
    name: "castle-left",
    summary: "Red may castle with the a-side rook",
    record: [
        "r",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr -- -- -- rk -- -- -- ",
    ],
};

/// Both rooks untouched, both wings open.
pub const CASTLE_BOTH: NamedLayout = NamedLayout {
    name: "castle-both",
    summary: "Red may castle on either wing",
    record: [
        "r",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr -- -- -- rk -- -- rr ",
    ],
};

/// A rook pins the king in place: no castling out of check.
pub const CASTLE_IN_CHECK: NamedLayout = NamedLayout {
    name: "castle-in-check",
    summary: "no castling: the Red king is in check",
    record: [
        "r",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- br -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr -- -- -- rk -- -- rr ",
    ],
};

/// A rook covers the a-wing destination square.
pub const CASTLE_LEFT_ATTACKED: NamedLayout = NamedLayout {
    name: "castle-left-attacked",
    summary: "no a-side castle: the king would land on an attacked square",
    record: [
        "r",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- br -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr -- -- -- rk -- -- rr ",
    ],
};

/// The attacking rook covers a square the king never crosses.
pub const CASTLE_LEFT_CLEAR: NamedLayout = NamedLayout {
    name: "castle-left-clear",
    summary: "a-side castle allowed: the attacked square is off the king's path",
    record: [
        "r",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- br -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr -- -- -- rk -- -- -- ",
    ],
};

/// A rook covers the square the king passes on the h-wing.
pub const CASTLE_RIGHT_ATTACKED: NamedLayout = NamedLayout {
    name: "castle-right-attacked",
    summary: "no h-side castle: the king would pass an attacked square",
    record: [
        "r",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- br -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr -- -- -- rk -- -- rr ",
    ],
};

/// The king already moved (and sits off its home square).
pub const CASTLE_KING_MOVED: NamedLayout = NamedLayout {
    name: "castle-king-moved",
    summary: "no castling: the king has moved",
    record: [
        "r",
        "3",
        "2",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr -- -- rk1 -- -- -- rr ",
    ],
};

/// The a-side rook already moved.
pub const CASTLE_ROOK_MOVED: NamedLayout = NamedLayout {
    name: "castle-rook-moved",
    summary: "no a-side castle: that rook has moved",
    record: [
        "r",
        "1",
        "0",
        "-- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         rr1 -- -- -- rk -- -- rr ",
    ],
};

/// Pawns of both sides one move from their promotion rows.
pub const PROMOTION: NamedLayout = NamedLayout {
    name: "promotion",
    summary: "pawns of both teams one move from promotion",
    record: [
        "r",
        "5",
        "4",
        "br bn bb bk bq bb bn -- \
         -- -- bp bp bp bp rp rp \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         bp bp rp rp rp rp -- -- \
         -- rn rb rq rk rb rn rr ",
    ],
};

/// The promotion board with the capture delta one short of the limit.
pub const NEAR_DRAW: NamedLayout = NamedLayout {
    name: "near-draw",
    summary: "one captureless turn from the automatic draw",
    record: [
        "r",
        "50",
        "49",
        "br bn bb bk bq bb bn -- \
         -- -- bp bp bp bp rp rp \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         -- -- -- -- -- -- -- -- \
         bp bp rp rp rp rp -- -- \
         -- rn rb rq rk rb rn rr ",
    ],
};

/// Every named layout, in load-command order.
pub const LIBRARY: &[NamedLayout] = &[
    EMPTY,
    START,
    CHECK_RED,
    CHECK_BOTH,
    CHECK_CROWDED,
    MATE_NINE,
    MATE_FOUR,
    MATE_IN_ONE,
    MATE_BLACK,
    EN_PASSANT,
    EN_PASSANT_STALE,
    EN_PASSANT_MISSED,
    EN_PASSANT_DOUBLE,
    CASTLE_LEFT,
    CASTLE_BOTH,
    CASTLE_IN_CHECK,
    CASTLE_LEFT_ATTACKED,
    CASTLE_LEFT_CLEAR,
    CASTLE_RIGHT_ATTACKED,
    CASTLE_KING_MOVED,
    CASTLE_ROOK_MOVED,
    PROMOTION,
    NEAR_DRAW,
];

/// Looks up a layout by name.
pub fn find(name: &str) -> Option<&'static NamedLayout> {
    LIBRARY.iter().find(|entry| entry.name == name)
}

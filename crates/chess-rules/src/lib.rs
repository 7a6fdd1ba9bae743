//! Rules engine for the two-player terminal chess game.
//!
//! This crate provides:
//! - [`Board`] - the live 64-square grid with per-piece bookkeeping
//! - [`movegen`] - geometric candidate generation, castling, en passant
//! - [`legality`] - the check-safety filter producing [`SelectionReport`]s
//! - [`check`] - check and checkmate detection
//! - [`Session`] - the turn controller the interface layer drives
//! - [`layouts`] - the named board layout library
//!
//! # Architecture
//!
//! Legality is decided by simulation: every candidate move is applied to a
//! cloned board and the clone is probed for check against the mover's own
//! king. Check detection itself reuses the candidate generator
//! symmetrically, probing outward from the king with each attacker kind's
//! own pattern. Everything is single-threaded and synchronous; the only
//! mutable board is the one owned by the [`Session`].
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::{Outcome, Session};
//!
//! let mut session = Session::new();
//! let e2 = Square::from_coord("e2").unwrap();
//! let e4 = Square::from_coord("e4").unwrap();
//! let report = session.select(e2).unwrap();
//! assert_eq!(report.destinations.len(), 2);
//! session.move_to(e4).unwrap();
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

pub mod apply;
mod board;
pub mod check;
pub mod layouts;
pub mod legality;
pub mod movegen;
mod session;

pub use apply::apply_move;
pub use board::{Board, BOARD_SQUARES};
pub use check::{check_report, is_check, is_checkmate, mate_report, CheckReport, MateReport};
pub use legality::{legal_moves, SelectionReport};
pub use movegen::candidate_moves;
pub use session::{
    DrawReason, MoveReceipt, Outcome, PlayError, Session, TurnStatus, CAPTURE_DELTA_LIMIT,
};

//! Two-player chess played at the terminal.
//!
//! The loop is: evaluate the session status, queue its messages, render
//! the board with highlight overlays, prompt, dispatch the command. Rule
//! errors become messages below the board and never advance the turn.

mod config;
mod messages;
mod prompt;
mod render;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chess_rules::{
    layouts, DrawReason, MoveReceipt, Outcome, PlayError, Session, TurnStatus,
    CAPTURE_DELTA_LIMIT,
};
use config::TermConfig;
use messages::{Message, MessageQueue};
use prompt::Command;
use render::Highlights;

const HELP_TEXT: &str = "Commands:\n\
    \x20 sel <pos>        select the piece at <pos> (sel a2)\n\
    \x20 mv <pos>         move the selected piece to <pos> (mv a4)\n\
    \x20 mv <pos> <pos>   select and move in one step (mv a2 a4)\n\
    \x20 load <name>      restart from a named layout\n\
    \x20 reset            restart the game\n\
    \x20 quit             leave the game";

const GAME_OVER_HINT: &str = "Game over. \"reset\", \"load <name>\" or \"quit\".";

/// Two-player chess at the terminal.
#[derive(Parser)]
#[command(name = "chess-term")]
#[command(about = "Two-player chess played at the terminal")]
struct Args {
    /// Named layout to start from (overrides the config file)
    #[arg(long)]
    layout: Option<String>,

    /// Path to the configuration file
    #[arg(long, default_value = "chess-term.toml")]
    config: PathBuf,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = TermConfig::load(&args.config)?;
    if args.no_color {
        config.color = false;
    }
    if let Some(layout) = args.layout {
        config.layout = layout;
    }

    let entry = layouts::find(&config.layout)
        .ok_or_else(|| anyhow::anyhow!("unknown layout {:?}", config.layout))?;
    tracing::info!(layout = entry.name, "starting session");
    let mut session = Session::from_layout(&entry.layout());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut queue = MessageQueue::new();

    loop {
        let status = session.status();
        announce(&status, &mut queue);
        let highlights = build_highlights(&session, &status);

        if config.clear_screen {
            print!("\x1b[2J\x1b[H");
        }
        for line in queue.drain_above() {
            println!("{line}");
        }
        println!();
        print!("{}", render::render(session.board(), &highlights, config.color));
        println!();
        for line in queue.drain_below() {
            println!("{line}");
        }
        print!("\nEnter command: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if dispatch(&line, &mut session, &mut queue, &mut lines, &config)? {
            break;
        }
    }

    Ok(())
}

/// Handles one input line. Returns `true` when the player quits.
fn dispatch<I>(
    line: &str,
    session: &mut Session,
    queue: &mut MessageQueue,
    lines: &mut I,
    config: &TermConfig,
) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    match prompt::parse_command(line) {
        Command::Help => queue.push(Message::once_below(HELP_TEXT)),
        Command::Invalid => queue.push(Message::once_below("Invalid command")),
        Command::Quit => return Ok(true),
        Command::Reset => {
            tracing::debug!("reset");
            session.reset();
            queue.clear();
        }
        Command::Load(name) => match layouts::find(&name) {
            Some(entry) => {
                tracing::debug!(layout = entry.name, "loaded");
                session.load(&entry.layout());
                queue.clear();
            }
            None => queue.push(Message::once_below(format!("Unknown layout {name:?}"))),
        },
        Command::Select(sq) => select_square(session, queue, sq),
        Command::MoveTo(sq) => {
            let result = session.move_to(sq);
            settle_move(session, queue, result, lines, config)?;
        }
        Command::SelectMove(from, to) => {
            let result = session.move_piece(from, to);
            settle_move(session, queue, result, lines, config)?;
        }
    }
    Ok(false)
}

/// Selecting the selected square again deselects it.
fn select_square(session: &mut Session, queue: &mut MessageQueue, sq: chess_core::Square) {
    if session.selected().map(|(from, _)| from) == Some(sq) {
        session.clear_selection();
        return;
    }
    match session.select(sq) {
        Ok(report) => {
            tracing::debug!(square = %sq, moves = report.moves.len(), "selected");
        }
        Err(err) => queue.push(Message::once_below(err.to_string())),
    }
}

/// Reports a move result and resolves a pending promotion inline.
fn settle_move<I>(
    session: &mut Session,
    queue: &mut MessageQueue,
    result: Result<MoveReceipt, PlayError>,
    lines: &mut I,
    config: &TermConfig,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let receipt = match result {
        Ok(receipt) => receipt,
        Err(err) => {
            queue.push(Message::once_below(err.to_string()));
            return Ok(());
        }
    };
    if let Some(square) = receipt.promotion {
        tracing::debug!(square = %square, "promotion pending");
        resolve_promotion(session, lines, config)?;
    }
    Ok(())
}

/// Prompts until a valid promotion choice lands (or input ends). The
/// board is redrawn with the promotable pawn highlighted.
fn resolve_promotion<I>(session: &mut Session, lines: &mut I, config: &TermConfig) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        let highlights = Highlights {
            promotion: session.status().promotion,
            ..Highlights::default()
        };
        println!();
        print!("{}", render::render(session.board(), &highlights, config.color));
        println!("\nYou can promote a pawn!");
        println!("Options: Queen (q), Rook (r), Bishop (b), Knight (n)");
        print!("Enter a single character to choose: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let Some(kind) = prompt::parse_promotion(&line) else {
            println!("Invalid choice");
            continue;
        };
        match session.promote(kind) {
            Ok(_) => {
                tracing::debug!(%kind, "promoted");
                return Ok(());
            }
            Err(err) => println!("{err}"),
        }
    }
}

/// Queues the per-turn banner messages.
fn announce(status: &TurnStatus, queue: &mut MessageQueue) {
    match status.outcome {
        Outcome::InProgress => {
            if status.in_check {
                queue.push(Message::once_above(format!(
                    "{}'s King is in check!",
                    status.side
                )));
            }
            queue.push(Message::once_above(format!("{}'s turn", status.side)));
            queue.push(Message::once_above(format!(
                "Turn counter: {}",
                status.turn_count
            )));
            queue.push(Message::once_above(format!(
                "Turns since last capture: {}",
                status.capture_delta
            )));
        }
        Outcome::Checkmate { loser } => {
            queue.push(Message::once_above(format!(
                "{}'s King has been checkmated.",
                loser
            )));
            queue.push(Message::once_above(format!(
                "{} has won! Game over.",
                loser.opposite()
            )));
            queue.push(Message::once_below(GAME_OVER_HINT));
        }
        Outcome::Draw(reason) => {
            let text = match reason {
                DrawReason::FiftyMoves => format!(
                    "An automatic draw: {CAPTURE_DELTA_LIMIT} turns without a capture."
                ),
                DrawReason::Stalemate => {
                    format!("A draw by stalemate: {} has no legal moves.", status.side)
                }
            };
            queue.push(Message::once_above(text));
            queue.push(Message::once_below(GAME_OVER_HINT));
        }
    }
}

/// Merges the selection report and turn status into render overlays.
fn build_highlights(session: &Session, status: &TurnStatus) -> Highlights {
    let mut highlights = Highlights::default();
    if let Some((from, report)) = session.selected() {
        highlights.selected = Some(from);
        highlights.destinations = report.destinations.clone();
        highlights.specials = report.specials.clone();
    }
    highlights.checking = status.attackers.clone();
    highlights.mating = status.mating_squares.clone();
    highlights.threatened_kings = status.threatened_king.into_iter().collect();
    highlights.promotion = status.promotion;
    highlights
}

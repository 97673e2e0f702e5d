//! Plain-text presentation of game events.

use oxo_engine::{Board, Outcome, Player as Mark, Position, SearchStats};
use std::io::{self, Write};

/// Messages sent from the orchestrator to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board changed (or the game started).
    StateChanged(Board),
    /// Move was made.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Square taken.
        position: Position,
    },
    /// Search counters for the move just made.
    SearchFinished(SearchStats),
    /// A move was refused by the game.
    MoveRejected(String),
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Display name of the winner, `None` for a draw.
        winner: Option<String>,
    },
    /// A player left before the end.
    Quit {
        /// Display name of the player who left.
        player: String,
    },
}

/// Writes events as text to any [`Write`] sink.
pub struct Renderer<W> {
    out: W,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders one event.
    pub fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::StateChanged(board) => writeln!(self.out, "\n{}\n", board)?,
            GameEvent::MoveMade {
                player,
                mark,
                position,
            } => writeln!(self.out, "{} ({}) takes {}", player, mark, position)?,
            GameEvent::SearchFinished(stats) => writeln!(
                self.out,
                "  searched {} nodes, {} cutoffs, depth {}",
                stats.nodes, stats.cutoffs, stats.max_ply
            )?,
            GameEvent::MoveRejected(reason) => writeln!(self.out, "Move rejected: {}", reason)?,
            GameEvent::GameOver { outcome, winner } => match (outcome, winner) {
                (Outcome::Won(mark), Some(name)) => {
                    writeln!(self.out, "{} ({}) wins!", name, mark)?
                }
                (Outcome::Draw, _) => writeln!(self.out, "Tie game!")?,
                (outcome, _) => writeln!(self.out, "{}", outcome)?,
            },
            GameEvent::Quit { player } => writeln!(self.out, "{} quit the game.", player)?,
        }
        self.out.flush()
    }
}

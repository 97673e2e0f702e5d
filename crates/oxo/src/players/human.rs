//! Human player that reads moves from a line-oriented input.

use super::Player;
use anyhow::{Context, Result};
use oxo_engine::{Game, Position};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Words that end the game from the prompt.
const QUIT_WORDS: [&str; 2] = ["q", "quit"];

/// Human player reading square numbers (1-9) or labels like `center`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

/// A parsed line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Move(Position),
    Quit,
}

/// Numbers follow the board display (1-9); anything else must be a label.
fn parse_entry(line: &str) -> Option<Entry> {
    let line = line.trim();
    if QUIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word)) {
        return Some(Entry::Quit);
    }
    if let Ok(number) = line.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(Position::from_index)
            .map(Entry::Move);
    }
    Position::from_label_or_number(line).map(Entry::Move)
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, game: &Game) -> Result<Option<Position>> {
        loop {
            write!(self.output, "{} ({}) > ", self.name, game.to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                debug!(player = %self.name, "Input closed");
                return Ok(None);
            }

            match parse_entry(&line) {
                Some(Entry::Quit) => return Ok(None),
                Some(Entry::Move(pos)) if game.board().is_empty(pos) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(Some(pos));
                }
                Some(Entry::Move(pos)) => {
                    warn!(position = %pos, "Square already occupied");
                    writeln!(self.output, "{} is taken, pick an empty square.", pos)?;
                }
                None => {
                    writeln!(
                        self.output,
                        "Enter 1-9, a square name like \"center\", or q to quit."
                    )?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

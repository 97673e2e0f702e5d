//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the game wrapper share one definition.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, winner_at};

use super::{Board, Outcome};
use tracing::instrument;

/// Full-board terminal check.
///
/// Scans all eight lines (rows, then columns, then diagonals) and reports
/// the first completed one as a win; otherwise a full board is a draw.
/// Independent of which move was played last.
#[instrument(level = "trace", ret)]
pub fn check_terminal(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        Outcome::Won(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

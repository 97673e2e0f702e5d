//! Stateful game wrapper used by driving loops.

use super::rules::winner_at;
use super::search::{SearchResult, evaluate};
use super::types::{Board, MoveError, Outcome, Player};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A game in progress: board, side to move, history and cached outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Stays at the last mover once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has finished, and
    /// [`MoveError::SquareOccupied`] for a taken square. The game is
    /// unchanged in both cases.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.apply_move(pos, player)?;
        self.history.push(pos);

        if winner_at(&self.board, pos, player) {
            self.outcome = Outcome::Won(player);
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.to_move = player.opponent();
        }

        debug!(outcome = ?self.outcome, moves = self.history.len(), "Move applied");
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, "Game over");
        }
        Ok(self.outcome)
    }

    /// Optimal move for the player to move.
    pub fn best_move(&self) -> SearchResult {
        evaluate(&self.board, self.to_move)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

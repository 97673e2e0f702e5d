//! Tic-tac-toe board state and perfect-play search.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`], [`Square`], [`Player`] and [`Position`],
//!   with terminal detection in [`rules`].
//! - **Search**: [`search`] runs an exhaustive negamax with alpha-beta
//!   pruning and returns the optimal move for the side to move.
//! - **Game**: [`Game`] wraps a board with turn order and history for
//!   driving loops.
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Player, Position, search};
//!
//! let mut board: Board = "XX. OO. ...".parse().unwrap();
//! let result = search(&mut board, Player::X);
//! assert_eq!(result.best_move, Some(Position::TopRight));
//! assert_eq!(result.score, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use game::Game;
pub use position::Position;
pub use rules::{check_terminal, winner_at};
pub use search::{
    DRAW_SCORE, LOSS_SCORE, MAX_SCORE, MIN_SCORE, SearchResult, SearchStats, WIN_SCORE, evaluate,
    search, search_with_stats,
};
pub use types::{Board, BoardParseError, MoveError, Outcome, Player, Square};

/// Alias for clarity in driving loops.
pub type Mark = Player;

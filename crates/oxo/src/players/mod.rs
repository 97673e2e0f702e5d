//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use oxo_engine::{Game, Position, SearchStats};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns `None` when the player quits.
    fn get_move(&mut self, game: &Game) -> Result<Option<Position>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Statistics for the search behind the last move, if this player searches.
    fn last_stats(&self) -> Option<SearchStats> {
        None
    }
}

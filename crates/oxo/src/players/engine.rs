//! Engine player backed by the exhaustive alpha-beta search.

use super::Player;
use anyhow::{Result, bail};
use oxo_engine::{Game, Position, SearchStats, search_with_stats};
use tracing::{debug, instrument};

/// Plays the optimal move in every position.
pub struct EnginePlayer {
    name: String,
    last_stats: Option<SearchStats>,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_stats: None,
        }
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, game), fields(engine = %self.name, to_move = %game.to_move()))]
    fn get_move(&mut self, game: &Game) -> Result<Option<Position>> {
        let mut board = game.board().clone();
        let (result, stats) = search_with_stats(&mut board, game.to_move());
        self.last_stats = Some(stats);

        let Some(mv) = result.best_move else {
            bail!("No valid moves available");
        };
        debug!(position = %mv, score = result.score, nodes = stats.nodes, "Engine chose position");
        Ok(Some(mv))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_opens_top_left() {
        let mut engine = EnginePlayer::new("Engine");
        assert_eq!(engine.last_stats(), None);
        let mv = engine.get_move(&Game::new()).unwrap();
        assert_eq!(mv, Some(Position::TopLeft));
        let stats = engine.last_stats().unwrap();
        assert!(stats.nodes > 1);
        assert_eq!(stats.max_ply, 9);
    }

    #[test]
    fn test_engine_takes_win() {
        let mut game = Game::new();
        for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter, Position::Center] {
            game.make_move(pos).unwrap();
        }
        let mut engine = EnginePlayer::new("Engine");
        assert_eq!(engine.get_move(&game).unwrap(), Some(Position::TopRight));
    }

    #[test]
    fn test_engine_errors_on_finished_game() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.make_move(pos).unwrap();
        }
        let mut engine = EnginePlayer::new("Engine");
        assert!(engine.get_move(&game).is_err());
    }
}

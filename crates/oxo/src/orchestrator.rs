//! Game orchestration between players.

use crate::players::Player;
use crate::render::{GameEvent, Renderer};
use anyhow::Result;
use oxo_engine::{Game, Outcome, Player as Mark};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Orchestrates gameplay between two players.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    renderer: Renderer<W>,
    show_stats: bool,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, renderer: Renderer<W>) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            renderer,
            show_stats: false,
        }
    }

    /// Emits search counters after each move by a searching player.
    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    /// Returns the game as played so far.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, returning the renderer.
    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }

    /// Runs the game loop until the game ends or a player quits.
    ///
    /// Returns the final outcome, [`Outcome::InProgress`] after a quit.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.renderer
            .render(&GameEvent::StateChanged(self.game.board().clone()))?;

        loop {
            let outcome = self.game.outcome();
            if outcome.is_over() {
                let winner = outcome.winner().map(|mark| self.name_of(mark).to_string());
                self.renderer.render(&GameEvent::GameOver { outcome, winner })?;
                info!(%outcome, "Game finished");
                return Ok(outcome);
            }

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let Some(position) = player.get_move(&self.game)? else {
                info!(player = %player.name(), "Player quit");
                let player = player.name().to_string();
                self.renderer.render(&GameEvent::Quit { player })?;
                return Ok(Outcome::InProgress);
            };

            if let Err(e) = self.game.make_move(position) {
                warn!(error = %e, "Move rejected");
                self.renderer.render(&GameEvent::MoveRejected(e.to_string()))?;
                continue;
            }

            self.renderer.render(&GameEvent::MoveMade {
                player: player.name().to_string(),
                mark,
                position,
            })?;
            if self.show_stats
                && let Some(stats) = player.last_stats()
            {
                self.renderer.render(&GameEvent::SearchFinished(stats))?;
            }
            self.renderer
                .render(&GameEvent::StateChanged(self.game.board().clone()))?;
        }
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }
}

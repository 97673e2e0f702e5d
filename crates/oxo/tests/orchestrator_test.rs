//! Scripted games through the orchestrator.

use anyhow::Result;
use oxo::{EnginePlayer, HumanPlayer, Orchestrator, Player, Renderer};
use oxo_engine::{Game, Outcome, Player as Mark, Position};
use std::collections::VecDeque;
use std::io::{Cursor, sink};

/// Plays a fixed list of squares, then quits.
struct ScriptedPlayer {
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    fn new(moves: &[Position]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn get_move(&mut self, _game: &Game) -> Result<Option<Position>> {
        Ok(self.moves.pop_front())
    }

    fn name(&self) -> &str {
        "Script"
    }
}

fn human(input: &str) -> Box<dyn Player> {
    Box::new(HumanPlayer::new(
        "You",
        Cursor::new(input.as_bytes().to_vec()),
        sink(),
    ))
}

fn transcript(orchestrator: Orchestrator<Vec<u8>>) -> String {
    String::from_utf8(orchestrator.into_renderer().into_inner()).unwrap()
}

#[test]
fn test_human_cannot_beat_engine() {
    let mut orchestrator = Orchestrator::new(
        human("1\n2\n3\n4\n5\n6\n7\n8\n9\n"),
        Box::new(EnginePlayer::new("Engine")),
        Renderer::new(Vec::new()),
    );
    let outcome = orchestrator.run().unwrap();
    assert!(outcome.is_over());
    assert_ne!(outcome, Outcome::Won(Mark::X));
    assert_eq!(orchestrator.game().outcome(), outcome);
}

#[test]
fn test_human_quits() {
    let mut orchestrator = Orchestrator::new(
        human("q\n"),
        Box::new(EnginePlayer::new("Engine")),
        Renderer::new(Vec::new()),
    );
    assert_eq!(orchestrator.run().unwrap(), Outcome::InProgress);
    assert!(orchestrator.game().history().is_empty());
    assert!(transcript(orchestrator).contains("You quit the game."));
}

#[test]
fn test_engine_opens_when_human_plays_o() {
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine")),
        human(""),
        Renderer::new(Vec::new()),
    );
    assert_eq!(orchestrator.run().unwrap(), Outcome::InProgress);
    assert_eq!(orchestrator.game().history(), &[Position::TopLeft]);

    let text = transcript(orchestrator);
    assert!(text.contains("Engine (X) takes Top-left"), "{text}");
    assert!(text.contains("X|2|3"), "{text}");
}

#[test]
fn test_rejected_move_keeps_turn() {
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new(&[Position::TopLeft, Position::TopLeft])),
        Box::new(EnginePlayer::new("Engine")),
        Renderer::new(Vec::new()),
    );
    assert_eq!(orchestrator.run().unwrap(), Outcome::InProgress);
    assert_eq!(orchestrator.game().history(), &[Position::TopLeft, Position::Center]);
    assert_eq!(orchestrator.game().to_move(), Mark::X);

    let text = transcript(orchestrator);
    assert!(text.contains("Move rejected: Square Top-left is already occupied"), "{text}");
    assert!(text.contains("Script quit the game."), "{text}");
}

#[test]
fn test_selfplay_draws_with_stats() {
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
        Renderer::new(Vec::new()),
    )
    .with_stats(true);
    assert_eq!(orchestrator.run().unwrap(), Outcome::Draw);
    assert_eq!(orchestrator.game().history().len(), 9);

    let text = transcript(orchestrator);
    assert_eq!(text.matches("searched").count(), 9);
    assert!(text.trim_end().ends_with("Tie game!"), "{text}");
}

#[test]
fn test_stats_hidden_by_default() {
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
        Renderer::new(Vec::new()),
    );
    orchestrator.run().unwrap();
    assert!(!transcript(orchestrator).contains("searched"));
}

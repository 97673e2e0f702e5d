//! oxo - tic-tac-toe against an engine that never loses.

use anyhow::{Context, Result};
use clap::Parser;
use oxo::{
    Cli, Command, EnginePlayer, HumanPlayer, Orchestrator, PlayConfig, Player, Renderer, analyze,
    infer_to_move,
};
use oxo_engine::{Board, Player as Mark};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PlayConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;
    init_tracing(&config);

    match cli.command {
        Command::Play { human, stats } => {
            let config = match human {
                Some(mark) => config.with_human(mark),
                None => config,
            };
            run_play(config.with_stats(stats))
        }
        Command::Selfplay { stats } => run_selfplay(config.with_stats(stats)),
        Command::Analyze {
            board,
            to_move,
            json,
        } => run_analyze(&board, to_move, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(config: &PlayConfig) {
    let fallback = config.log_filter().as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Play a human against the engine on stdin/stdout
#[instrument(skip(config), fields(human = %config.human()))]
fn run_play(config: PlayConfig) -> Result<()> {
    info!("Starting interactive game");
    println!("Squares are numbered 1-9 as shown on the board. Type q to quit.");

    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", io::stdin().lock(), io::stdout()));
    let engine: Box<dyn Player> = Box::new(EnginePlayer::new("Engine"));
    let (player_x, player_o) = match config.human() {
        Mark::X => (human, engine),
        Mark::O => (engine, human),
    };

    let mut orchestrator = Orchestrator::new(player_x, player_o, Renderer::new(io::stdout()))
        .with_stats(*config.show_stats());
    orchestrator.run().context("Game loop failed")?;
    Ok(())
}

/// Let the engine play both sides
#[instrument(skip(config))]
fn run_selfplay(config: PlayConfig) -> Result<()> {
    info!("Starting self-play");
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
        Renderer::new(io::stdout()),
    )
    .with_stats(*config.show_stats());
    orchestrator.run().context("Self-play failed")?;
    Ok(())
}

/// Print the optimal move for a position
#[instrument(skip(board))]
fn run_analyze(board: &Board, to_move: Option<Mark>, json: bool) -> Result<()> {
    let to_move = to_move.unwrap_or_else(|| infer_to_move(board));
    let analysis = analyze(board, to_move);

    if json {
        let text = serde_json::to_string_pretty(&analysis).context("Serializing analysis")?;
        println!("{}", text);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}

//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use oxo_engine::{Board, Player};
use std::path::PathBuf;

/// oxo - tic-tac-toe against a perfect alpha-beta engine
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe against an engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, global = true, default_value = "oxo.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the engine
    Play {
        /// Which mark the human plays (x moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Print search statistics after each engine move
        #[arg(long)]
        stats: bool,
    },

    /// Watch the engine play itself from the empty board
    Selfplay {
        /// Print search statistics after each move
        #[arg(long)]
        stats: bool,
    },

    /// Analyze a position and print the optimal move
    Analyze {
        /// Nine squares, e.g. "XX. OO. ..." (X/O marks, ./_/- or digits for empty)
        #[arg(long)]
        board: Board,

        /// Side to move (inferred from mark counts when omitted)
        #[arg(long)]
        to_move: Option<Player>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

//! oxo - terminal tic-tac-toe against a perfect engine
//!
//! Drives [`oxo_engine`] games between humans and the alpha-beta engine.
//!
//! # Architecture
//!
//! - **Players**: moves come from a [`Player`] (line-oriented human or engine)
//! - **Orchestrator**: alternates turns and reports [`GameEvent`]s
//! - **Renderer**: writes events as plain text to any sink
//! - **Analyze**: one-shot evaluation of a position
//!
//! # Example
//!
//! ```
//! use oxo::{EnginePlayer, Orchestrator, Renderer};
//! use oxo_engine::Outcome;
//!
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(EnginePlayer::new("Engine X")),
//!     Box::new(EnginePlayer::new("Engine O")),
//!     Renderer::new(Vec::new()),
//! );
//! assert_eq!(orchestrator.run().unwrap(), Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod orchestrator;
mod players;
mod render;

pub use analyze::{Analysis, analyze, infer_to_move};
pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use orchestrator::Orchestrator;
pub use players::{EnginePlayer, HumanPlayer, Player};
pub use render::{GameEvent, Renderer};

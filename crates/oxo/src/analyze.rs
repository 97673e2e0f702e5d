//! One-shot position analysis for the `analyze` command.

use oxo_engine::{
    Board, Outcome, Player as Mark, Position, SearchResult, SearchStats, check_terminal,
    search_with_stats,
};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Everything known about a position after an exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in display form.
    pub board: String,
    /// Side the search was run for.
    pub to_move: Mark,
    /// Terminal status of the board as given.
    pub status: Outcome,
    /// Empty squares in ascending order.
    pub available_moves: Vec<Position>,
    /// Exact score and optimal move for `to_move`.
    pub result: SearchResult,
    /// Outcome under optimal play by both sides.
    pub predicted: Outcome,
    /// Search counters.
    pub stats: SearchStats,
}

/// Side to move inferred from mark counts: X when the counts are equal.
pub fn infer_to_move(board: &Board) -> Mark {
    if board.occupied_count() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

/// Searches `board` for `to_move` and collects the report.
#[instrument(skip(board))]
pub fn analyze(board: &Board, to_move: Mark) -> Analysis {
    let mut scratch = board.clone();
    let (result, stats) = search_with_stats(&mut scratch, to_move);
    Analysis {
        board: board.to_string(),
        to_move,
        status: check_terminal(board),
        available_moves: board.available_moves(),
        result,
        predicted: result.predicted_outcome(to_move),
        stats,
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", self.board)?;
        writeln!(f, "Status:     {}", self.status)?;
        writeln!(f, "To move:    {}", self.to_move)?;
        let moves: Vec<&str> = self.available_moves.iter().map(|p| p.label()).collect();
        if moves.is_empty() {
            writeln!(f, "Legal:      none")?;
        } else {
            writeln!(f, "Legal:      {}", moves.join(", "))?;
        }
        match self.result.best_move {
            Some(mv) => writeln!(f, "Best move:  {} (square {})", mv, mv.to_index() + 1)?,
            None => writeln!(f, "Best move:  none")?,
        }
        writeln!(f, "Score:      {:+}", self.result.score)?;
        writeln!(f, "Predicted:  {}", self.predicted)?;
        write!(
            f,
            "Searched:   {} nodes, {} cutoffs, depth {}",
            self.stats.nodes, self.stats.cutoffs, self.stats.max_ply
        )
    }
}

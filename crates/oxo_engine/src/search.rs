//! Negamax search with alpha-beta pruning.
//!
//! Negamax is minimax written once: `max(a, b) = -min(-a, -b)`. Every score is
//! from the perspective of the side to move at that node, so +1 means "the
//! mover can force a win", 0 a forced draw and -1 a forced loss.
//!
//! The search is exhaustive: every line is followed to a terminal board, so
//! the score is exact rather than a heuristic estimate. Moves are tried in
//! ascending index order and a new best is only taken on a strictly greater
//! score, so among equally good moves the lowest index wins. Pruning skips
//! siblings once `alpha >= beta` and never changes the chosen move.
//!
//! A single board is mutated in place: each candidate is marked, searched and
//! cleared again before the next one is tried, and the caller's board is
//! restored exactly when the search returns.

use crate::rules::check_terminal;
use crate::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position the side to move can force a win from.
pub const WIN_SCORE: i32 = 1;

/// Score of a forced draw.
pub const DRAW_SCORE: i32 = 0;

/// Score of a position the side to move loses against best play.
pub const LOSS_SCORE: i32 = -1;

/// Lower sentinel bound, worse than any real score.
pub const MIN_SCORE: i32 = LOSS_SCORE - 1;

/// Upper sentinel bound, better than any real score.
pub const MAX_SCORE: i32 = WIN_SCORE + 1;

/// Result of a search: the exact score and the move achieving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Score from the perspective of the side to move.
    pub score: i32,
    /// Best move, `None` only when the board was already terminal.
    pub best_move: Option<Position>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    /// The outcome this score predicts under optimal play by both sides.
    pub fn predicted_outcome(&self, to_move: Player) -> Outcome {
        match self.score {
            WIN_SCORE => Outcome::Won(to_move),
            LOSS_SCORE => Outcome::Won(to_move.opponent()),
            _ => Outcome::Draw,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, the root included.
    pub nodes: u64,
    /// Nodes whose remaining siblings were skipped by a cutoff.
    pub cutoffs: u64,
    /// Deepest ply reached below the root.
    pub max_ply: u8,
}

/// Finds the optimal move for `to_move`.
///
/// The board is borrowed mutably for the duration of the search and holds
/// its original contents again on return.
pub fn search(board: &mut Board, to_move: Player) -> SearchResult {
    search_with_stats(board, to_move).0
}

/// Like [`search`], but also reports how much of the tree was visited.
#[instrument(level = "debug", skip(board), fields(occupied = board.occupied_count()))]
pub fn search_with_stats(board: &mut Board, to_move: Player) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = negamax(board, 0, MIN_SCORE, MAX_SCORE, to_move, &mut stats);

    debug!(
        score = result.score,
        best_move = ?result.best_move,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        max_ply = stats.max_ply,
        "Search complete"
    );
    (result, stats)
}

/// Searches a copy of `board`, leaving the caller's board untouched.
pub fn evaluate(board: &Board, to_move: Player) -> SearchResult {
    let mut scratch = board.clone();
    search(&mut scratch, to_move)
}

/// Core recursion.
///
/// `ply` counts moves below the root. It feeds the statistics only; scores
/// are not discounted by depth.
fn negamax(
    board: &mut Board,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    color: Player,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;
    stats.max_ply = stats.max_ply.max(ply);

    match check_terminal(board) {
        Outcome::Won(winner) if winner == color => return SearchResult::leaf(WIN_SCORE),
        Outcome::Won(_) => return SearchResult::leaf(LOSS_SCORE),
        Outcome::Draw => return SearchResult::leaf(DRAW_SCORE),
        Outcome::InProgress => {}
    }

    let moves = board.available_moves();
    debug_assert!(!moves.is_empty(), "board in progress but no empty square");

    let mut best_score = MIN_SCORE;
    let mut best_move = None;

    for mv in moves {
        if board.apply_move(mv, color).is_err() {
            unreachable!("available move {mv} was occupied");
        }
        let child = negamax(board, ply + 1, -beta, -alpha, color.opponent(), stats);
        board.unmark(mv);

        let score = -child.score;
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }

        alpha = alpha.max(score);
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    SearchResult {
        score: best_score,
        best_move,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board literal")
    }

    /// Plain minimax without pruning, scored for the side to move.
    fn reference_minimax(board: &mut Board, color: Player) -> SearchResult {
        match check_terminal(board) {
            Outcome::Won(winner) if winner == color => return SearchResult::leaf(WIN_SCORE),
            Outcome::Won(_) => return SearchResult::leaf(LOSS_SCORE),
            Outcome::Draw => return SearchResult::leaf(DRAW_SCORE),
            Outcome::InProgress => {}
        }

        let mut best = SearchResult::leaf(MIN_SCORE);
        for mv in board.available_moves() {
            board.apply_move(mv, color).unwrap();
            let score = -reference_minimax(board, color.opponent()).score;
            board.unmark(mv);
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }
        }
        best
    }

    fn reachable(board: &mut Board, color: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board.clone()) || check_terminal(board).is_over() {
            return;
        }
        for mv in board.available_moves() {
            board.apply_move(mv, color).unwrap();
            reachable(board, color.opponent(), seen);
            board.unmark(mv);
        }
    }

    fn side_to_move(board: &Board) -> Player {
        if board.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    #[test]
    fn test_empty_board_is_draw_and_opens_top_left() {
        let mut b = Board::new();
        let result = search(&mut b, Player::X);
        assert_eq!(result.score, DRAW_SCORE);
        assert_eq!(result.best_move, Some(Position::TopLeft));
    }

    #[test]
    fn test_completes_own_row() {
        let mut b = board("XX. OO. ...");
        let result = search(&mut b, Player::X);
        assert_eq!(result.best_move, Some(Position::TopRight));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_row() {
        // X threatens the middle column; every other reply loses at once.
        let mut b = board("OX. .X. ...");
        let result = search(&mut b, Player::O);
        assert_eq!(result.best_move, Some(Position::BottomCenter));
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn test_full_board_draw_has_no_move() {
        let mut b = board("XOX OXO OXO");
        let result = search(&mut b, Player::X);
        assert_eq!(result, SearchResult::leaf(DRAW_SCORE));
    }

    #[test]
    fn test_already_won_board_scores_for_mover() {
        let mut b = board("XX. OOO X..");
        assert_eq!(search(&mut b, Player::X), SearchResult::leaf(LOSS_SCORE));
        assert_eq!(search(&mut b, Player::O), SearchResult::leaf(WIN_SCORE));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut b = board("X.. .O. ...");
        let before = b.clone();
        search(&mut b, Player::X);
        assert_eq!(b, before);
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut b = board("X.. ... ..O");
        let first = search(&mut b, Player::X);
        let second = search(&mut b, Player::X);
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_matches_search() {
        let b = board(".X. ... O..");
        let mut copy = b.clone();
        assert_eq!(evaluate(&b, Player::X), search(&mut copy, Player::X));
    }

    #[test]
    fn test_pruning_matches_plain_minimax_everywhere() {
        let mut seen = HashSet::new();
        reachable(&mut Board::new(), Player::X, &mut seen);

        for position in seen.iter().filter(|b| !check_terminal(b).is_over()) {
            let color = side_to_move(position);
            let mut pruned_board = position.clone();
            let mut plain_board = position.clone();
            assert_eq!(
                search(&mut pruned_board, color),
                reference_minimax(&mut plain_board, color),
                "mismatch on\n{position}"
            );
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let (_, stats) = search_with_stats(&mut Board::new(), Player::X);
        // Unpruned minimax visits 549,946 nodes from the empty board.
        assert!(stats.nodes < 549_946, "visited {} nodes", stats.nodes);
        assert!(stats.cutoffs > 0);
        assert_eq!(stats.max_ply, 9);
    }

    #[test]
    fn test_stats_on_terminal_board() {
        let (result, stats) = search_with_stats(&mut board("XXX OO. ..."), Player::O);
        assert_eq!(result.best_move, None);
        assert_eq!(stats, SearchStats { nodes: 1, cutoffs: 0, max_ply: 0 });
    }

    #[test]
    fn test_predicted_outcome() {
        let win = SearchResult { score: WIN_SCORE, best_move: Some(Position::Center) };
        assert_eq!(win.predicted_outcome(Player::O), Outcome::Won(Player::O));
        let loss = SearchResult::leaf(LOSS_SCORE);
        assert_eq!(loss.predicted_outcome(Player::O), Outcome::Won(Player::X));
        assert_eq!(SearchResult::leaf(DRAW_SCORE).predicted_outcome(Player::X), Outcome::Draw);
    }
}

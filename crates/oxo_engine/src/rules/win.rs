//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`LINES`] order) holding
/// three of the same mark, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(player);
        }
    }

    None
}

/// Incremental win check after `player` moved at `pos`.
///
/// Only the lines through `pos` are inspected: its row, its column, and
/// both diagonals when `pos` is a corner or the center.
pub fn winner_at(board: &Board, pos: Position, player: Player) -> bool {
    let mark = Square::Occupied(player);
    let owns = |i: usize| Position::from_index(i).is_some_and(|p| board.get(p) == mark);

    let row = pos.row() * 3;
    if (row..row + 3).all(owns) {
        return true;
    }

    let col = pos.col();
    if (0..3).map(|i| col + i * 3).all(owns) {
        return true;
    }

    if pos.on_diagonal() {
        if [0, 4, 8].into_iter().all(owns) {
            return true;
        }
        if [2, 4, 6].into_iter().all(owns) {
            return true;
        }
    }

    false
}

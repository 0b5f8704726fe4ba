//! Candidate move generation and ordering
//!
//! Only cells near existing stones are searched. This keeps the branching
//! factor small on a 15x15 board at the price of never considering a move
//! far away from all stones.

use crate::board::{Board, Mark, Pos};
use crate::eval::quick_score;

/// Chebyshev radius around stones that candidates are drawn from
const NEIGHBOR_RADIUS: usize = 2;

/// Default number of ranked moves expanded per node
pub const RANKED_MOVE_LIMIT: usize = 7;

/// Ranking weights: own score + 0.8 x opponent score, scaled by 5 to stay integral
const OWN_WEIGHT: i32 = 5;
const OPPONENT_WEIGHT: i32 = 4;

/// Empty cells within distance 2 of any stone, in row-major order.
///
/// An empty board yields the center. If no such cell exists the first empty
/// cell is returned, and a full board yields nothing.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let mut near = vec![false; size * size];

    for pos in board.positions().filter(|&p| board.get(p).is_player()) {
        let rows = pos.row.saturating_sub(NEIGHBOR_RADIUS)..=(pos.row + NEIGHBOR_RADIUS).min(size - 1);
        for r in rows {
            let cols = pos.col.saturating_sub(NEIGHBOR_RADIUS)..=(pos.col + NEIGHBOR_RADIUS).min(size - 1);
            for c in cols {
                near[r * size + c] = true;
            }
        }
    }

    let moves: Vec<Pos> = board
        .positions()
        .filter(|&p| near[p.row * size + p.col] && board.get(p) == Mark::Empty)
        .collect();

    if moves.is_empty() {
        return board.first_empty().into_iter().collect();
    }
    moves
}

/// Value of `mark`'s stone on `pos`, placed for the scan and removed again
#[inline]
fn placed_score(board: &mut Board, pos: Pos, mark: Mark) -> i32 {
    board
        .place_scoped(pos, mark)
        .map_or(0, |placed| quick_score(&placed, pos, mark))
}

/// Ordering score of a cell: value for `player` plus 0.8 x value for `opponent`.
#[inline]
fn move_priority(board: &mut Board, pos: Pos, player: Mark, opponent: Mark) -> i32 {
    OWN_WEIGHT * placed_score(board, pos, player) + OPPONENT_WEIGHT * placed_score(board, pos, opponent)
}

/// Candidates sorted by descending priority, at most `limit` of them.
///
/// Each candidate is tried for both sides and removed again, so the board
/// is unchanged on return. The sort is stable, so equal scores keep
/// row-major order.
pub fn ranked_moves(board: &mut Board, player: Mark, opponent: Mark, limit: usize) -> Vec<Pos> {
    let mut scored: Vec<(i32, Pos)> = candidate_moves(board)
        .into_iter()
        .map(|pos| (move_priority(board, pos, player, opponent), pos))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, pos)| pos).collect()
}

/// First candidate (in `candidate_moves` order) that gives `player` five in a row.
///
/// Each candidate is placed, checked and removed again. If `player` already
/// has five on the board, the first legal candidate counts as winning.
/// The search prelude relies on this to resolve such positions.
pub fn find_winning_move(board: &mut Board, player: Mark) -> Option<Pos> {
    let candidates = candidate_moves(board);
    // any placement "wins" if the five is already on the board
    let already_five = board.has_five(player);

    candidates.into_iter().find(|&pos| {
        board
            .place_scoped(pos, player)
            .is_some_and(|placed| already_five || placed.has_five_at(pos, player))
    })
}

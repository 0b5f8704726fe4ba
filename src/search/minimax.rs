//! Plain minimax over the ranked moves

use crate::board::{Board, Mark, Pos};

use super::searcher::{sides, BestMoves, NodeStart, Searcher};

impl Searcher {
    /// Exhaustive minimax. Returns the node value for `max_player` and the
    /// chosen move, picked at random among equal-best children.
    pub(super) fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        max_player: Mark,
        min_player: Mark,
    ) -> (i32, Option<Pos>) {
        let moves = match self.enter_node(board, depth, maximizing, max_player, min_player) {
            NodeStart::Resolved(score, pos) => return (score, pos),
            NodeStart::Expand(moves) => moves,
        };

        let (current, _) = sides(maximizing, max_player, min_player);
        let mut best = BestMoves::new(maximizing);

        for pos in moves {
            let Some(mut child) = board.place_scoped(pos, current) else {
                continue;
            };
            let (score, _) = self.minimax(&mut child, depth - 1, !maximizing, max_player, min_player);
            best.offer(pos, score);
        }

        (best.score(), best.pick(&mut self.rng))
    }
}

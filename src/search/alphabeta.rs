//! Minimax with alpha-beta pruning
//!
//! Same node prelude, move ordering and tie-break as [`minimax`](super::minimax),
//! so with a full root window the root score equals the minimax score. Moves
//! skipped by a cutoff never enter the tie group.
//!
//! A child that fails low only reports a bound, which may equal the best
//! score so far. Children are therefore searched with the bound on the side
//! to move widened by one: a fail-low lands strictly below the best score,
//! and a child that ties it is exact. Cutoffs still use the real window.

use crate::board::{Board, Mark, Pos};

use super::searcher::{sides, BestMoves, NodeStart, Searcher};

impl Searcher {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
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

        for (i, pos) in moves.into_iter().enumerate() {
            let Some(mut child) = board.place_scoped(pos, current) else {
                continue;
            };
            let (child_alpha, child_beta) = if maximizing {
                (alpha.saturating_sub(1), beta)
            } else {
                (alpha, beta.saturating_add(1))
            };
            let (score, _) = self.alpha_beta(
                &mut child,
                depth - 1,
                child_alpha,
                child_beta,
                !maximizing,
                max_player,
                min_player,
            );
            best.offer(pos, score);

            if maximizing {
                alpha = alpha.max(best.score());
            } else {
                beta = beta.min(best.score());
            }
            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        (best.score(), best.pick(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Mark, Pos};
    use crate::search::{Searcher, Strategy, WIN_SCORE};

    fn midgame() -> Board {
        Board::from_rows(&[
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "......W........",
            ".....BB.W......",
            "......BW.......",
            ".....WB........",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
        ])
    }

    #[test]
    fn test_search_empty_board() {
        let mut board = Board::new(15);
        let mut searcher = Searcher::with_seed(Strategy::AlphaBeta, 1);
        let result = searcher.search(&mut board, 3, true, Mark::Black, Mark::White);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = Board::new(15);
        for r in 3..7 {
            board.place(Pos::new(r, 10), Mark::White);
        }
        board.place(Pos::new(2, 10), Mark::Black);
        board.place(Pos::new(9, 9), Mark::Black);

        let mut searcher = Searcher::with_seed(Strategy::AlphaBeta, 1);
        let result = searcher.search(&mut board, 4, true, Mark::White, Mark::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 10)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_matches_minimax_score() {
        for depth in 1..=3 {
            for maximizing in [true, false] {
                let mut board = midgame();
                let mut minimax = Searcher::with_seed(Strategy::Minimax, 2);
                let mut pruned = Searcher::with_seed(Strategy::AlphaBeta, 2);

                let full = minimax.search(&mut board, depth, maximizing, Mark::Black, Mark::White);
                let cut = pruned.search(&mut board, depth, maximizing, Mark::Black, Mark::White);
                assert_eq!(full.score, cut.score, "depth {} maximizing {}", depth, maximizing);
                assert!(cut.stats.nodes <= full.stats.nodes);
            }
        }
    }

    #[test]
    fn test_chosen_move_has_reported_score() {
        let board = midgame();
        for depth in 2..=3 {
            for maximizing in [true, false] {
                let current = if maximizing { Mark::Black } else { Mark::White };
                for seed in 0..12 {
                    let result = Searcher::with_seed(Strategy::AlphaBeta, seed).search(
                        &mut board.clone(),
                        depth,
                        maximizing,
                        Mark::Black,
                        Mark::White,
                    );
                    let pos = result.best_move.expect("move from expanded root");

                    let mut child = board.clone();
                    assert!(child.place(pos, current));
                    let exact = Searcher::with_seed(Strategy::Minimax, 0).search(
                        &mut child,
                        depth - 1,
                        !maximizing,
                        Mark::Black,
                        Mark::White,
                    );
                    assert_eq!(
                        exact.score, result.score,
                        "depth {} maximizing {} seed {} chose {}",
                        depth, maximizing, seed, pos
                    );
                }
            }
        }
    }

    #[test]
    fn test_pruning_happens() {
        let mut board = midgame();
        let mut searcher = Searcher::with_seed(Strategy::AlphaBeta, 4);
        let result = searcher.search(&mut board, 3, true, Mark::Black, Mark::White);
        assert!(result.stats.beta_cutoffs > 0);
        assert!(result.stats.first_move_rate() <= 100.0);
    }

    #[test]
    fn test_search_multiple_times() {
        let mut board = midgame();
        let before = board.clone();
        let mut searcher = Searcher::with_seed(Strategy::AlphaBeta, 8);
        let first = searcher.search(&mut board, 2, true, Mark::White, Mark::Black);
        let second = searcher.search(&mut board, 2, true, Mark::White, Mark::Black);
        assert_eq!(first.score, second.score);
        assert_eq!(first.stats.nodes, second.stats.nodes);
        assert_eq!(board, before);
    }
}

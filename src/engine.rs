//! AI engine wrapping a searcher with a fixed depth
//!
//! This is what AI players and the GUI talk to. It hides the searcher's
//! perspective arguments: the engine always searches for the side that is
//! about to move, as the maximizing player.
//!
//! # Example
//!
//! ```
//! use gomoku::{AiEngine, Board, Mark, Pos, Strategy};
//!
//! let mut engine = AiEngine::with_seed(Strategy::AlphaBeta, 2, 7);
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Mark::Black);
//!
//! let result = engine.get_move_with_stats(&board, Mark::White);
//! println!("Best move: {:?} ({} nodes in {}ms)", result.best_move, result.nodes, result.time_ms);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Mark, Pos};
use crate::search::{Searcher, Strategy};

/// Result of asking the engine for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Option<Pos>,
    /// Search score from the mover's point of view
    pub score: i32,
    pub strategy: Strategy,
    pub depth: i32,
    /// Wall time in milliseconds
    pub time_ms: u64,
    pub nodes: u64,
    pub beta_cutoffs: u64,
}

pub struct AiEngine {
    searcher: Searcher,
    depth: i32,
    parallel: bool,
}

impl AiEngine {
    #[must_use]
    pub fn new(strategy: Strategy, depth: i32) -> Self {
        Self {
            searcher: Searcher::new(strategy),
            depth,
            parallel: false,
        }
    }

    /// Engine with reproducible tie-breaks
    #[must_use]
    pub fn with_seed(strategy: Strategy, depth: i32, seed: u64) -> Self {
        Self {
            searcher: Searcher::with_seed(strategy, seed),
            depth,
            parallel: false,
        }
    }

    /// Seeded if `seed` is set, entropy otherwise
    #[must_use]
    pub fn from_seed(strategy: Strategy, depth: i32, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(strategy, depth, seed),
            None => Self::new(strategy, depth),
        }
    }

    /// Search root moves on the rayon pool
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.searcher.strategy()
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Best move for `mark`, or `None` if the search found nothing to play.
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> Option<Pos> {
        self.get_move_with_stats(board, mark).best_move
    }

    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        let start = Instant::now();
        let opponent = mark.opponent();

        let result = if self.parallel {
            self.searcher.search_parallel(board, self.depth, true, mark, opponent)
        } else {
            self.searcher.best_move(board, self.depth, mark)
        };

        // depth 0 and terminal nodes return no move; still play something legal
        let best_move = result
            .best_move
            .filter(|&pos| board.is_empty(pos))
            .or_else(|| board.first_empty());

        let time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(
            "{} plays {:?} (score {}, {} nodes, {}ms)",
            mark, best_move, result.score, result.stats.nodes, time_ms
        );

        MoveResult {
            best_move,
            score: result.score,
            strategy: self.strategy(),
            depth: self.depth,
            time_ms,
            nodes: result.stats.nodes,
            beta_cutoffs: result.stats.beta_cutoffs,
        }
    }
}

//! Search driver shared by minimax and alpha-beta
//!
//! Every node runs the same tactical prelude before expanding children:
//!
//! 1. depth exhausted: static evaluation, no move
//! 2. side to move can make five: take it
//! 3. opponent can make five next turn: block it
//! 4. a five already on the board: terminal score
//! 5. full board: draw
//! 6. nothing to rank: play the center
//!
//! Otherwise the ranked candidates are searched and the best move is drawn
//! at random among the moves that share the best score.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Mark, Pos};
//! use gomoku::search::{Searcher, Strategy};
//!
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Mark::Black);
//!
//! let mut searcher = Searcher::with_seed(Strategy::AlphaBeta, 42);
//! let result = searcher.best_move(&board, 2, Mark::White);
//! assert!(result.best_move.is_some());
//! ```

use std::fmt;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::{Board, Mark, Pos};
use crate::eval::static_score;

use super::moves::{find_winning_move, ranked_moves, RANKED_MOVE_LIMIT};

/// Score of a node where the side to move completes five
pub const WIN_SCORE: i32 = 100_000;

/// Score of a node where the side to move must stop the opponent's five
pub const BLOCK_SCORE: i32 = 10_000;

/// Score of a full board without a winner
pub const DRAW_SCORE: i32 = 0;

/// Bound used for the initial best score and the root alpha-beta window
pub(super) const INF: i32 = i32::MAX;

/// Which tree search to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full minimax over the ranked moves
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Minimax, Strategy::AlphaBeta];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "Minimax"),
            Strategy::AlphaBeta => write!(f, "Alpha-Beta"),
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Nodes resolved by the tactical prelude before expansion
    pub tactical_exits: u64,
    /// Alpha-beta cutoffs
    pub beta_cutoffs: u64,
    /// Cutoffs on the first child tried
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// Share of cutoffs that happened on the first child, in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.tactical_exits += other.tactical_exits;
        self.beta_cutoffs += other.beta_cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
    }
}

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the position for the maximizing player
    pub score: i32,
    /// Chosen move, `None` at depth 0 and on terminal positions
    pub best_move: Option<Pos>,
    /// Counters for this call
    pub stats: SearchStats,
}

/// What a node does after the prelude
pub(super) enum NodeStart {
    /// Score (and possibly a move) known without expanding children
    Resolved(i32, Option<Pos>),
    /// Ranked moves to expand, best first
    Expand(Vec<Pos>),
}

/// Side to move and its opponent for this node
#[inline]
pub(super) fn sides(maximizing: bool, max_player: Mark, min_player: Mark) -> (Mark, Mark) {
    if maximizing {
        (max_player, min_player)
    } else {
        (min_player, max_player)
    }
}

/// Running best score plus every move that reached it
pub(super) struct BestMoves {
    maximizing: bool,
    score: i32,
    moves: Vec<Pos>,
}

impl BestMoves {
    pub(super) fn new(maximizing: bool) -> Self {
        Self {
            maximizing,
            score: if maximizing { -INF } else { INF },
            moves: Vec::with_capacity(RANKED_MOVE_LIMIT),
        }
    }

    /// Record a child. A strictly better score starts a new tie group.
    pub(super) fn offer(&mut self, pos: Pos, score: i32) {
        let better = if self.maximizing {
            score > self.score
        } else {
            score < self.score
        };
        if better {
            self.score = score;
            self.moves.clear();
            self.moves.push(pos);
        } else if score == self.score {
            self.moves.push(pos);
        }
    }

    pub(super) fn score(&self) -> i32 {
        self.score
    }

    /// Uniform pick among the tied moves
    pub(super) fn pick<R: Rng>(&self, rng: &mut R) -> Option<Pos> {
        self.moves.choose(rng).copied()
    }
}

/// Minimax / alpha-beta searcher with its own random source.
///
/// Seeding with [`Searcher::with_seed`] makes tie-breaks reproducible.
pub struct Searcher {
    strategy: Strategy,
    pub(super) rng: StdRng,
    pub(super) stats: SearchStats,
}

impl Searcher {
    /// Searcher seeded from OS entropy
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rng: StdRng::from_entropy(),
            stats: SearchStats::default(),
        }
    }

    /// Searcher with a fixed seed
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
            stats: SearchStats::default(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Search `board` to `depth` plies.
    ///
    /// The board is modified during the search and restored before
    /// returning. The score is always from `max_player`'s point of view.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        max_player: Mark,
        min_player: Mark,
    ) -> SearchResult {
        self.stats = SearchStats::default();
        let (score, best_move) = self.run(board, depth, maximizing, max_player, min_player);

        debug!(
            "{} depth {}: score {} move {:?} ({} nodes, {} cutoffs)",
            self.strategy, depth, score, best_move, self.stats.nodes, self.stats.beta_cutoffs
        );

        SearchResult {
            score,
            best_move,
            stats: self.stats.clone(),
        }
    }

    /// Best move for `player` to play now, searched on a copy of `board`.
    pub fn best_move(&mut self, board: &Board, depth: i32, player: Mark) -> SearchResult {
        let mut scratch = board.clone();
        self.search(&mut scratch, depth, true, player, player.opponent())
    }

    /// Same result as [`Searcher::search`] but with root children searched
    /// in parallel, each on its own board copy.
    ///
    /// Scores match the serial search. Every child gets a seed drawn from this
    /// searcher, so a seeded searcher still gives reproducible moves.
    pub fn search_parallel(
        &mut self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        max_player: Mark,
        min_player: Mark,
    ) -> SearchResult {
        self.stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };

        let mut root = board.clone();
        let moves = match open_node(&mut root, depth, maximizing, max_player, min_player) {
            NodeStart::Resolved(score, best_move) => {
                self.stats.tactical_exits += 1;
                return SearchResult {
                    score,
                    best_move,
                    stats: self.stats.clone(),
                };
            }
            NodeStart::Expand(moves) => moves,
        };

        let (current, _) = sides(maximizing, max_player, min_player);
        let strategy = self.strategy;
        let seeds: Vec<u64> = moves.iter().map(|_| self.rng.gen()).collect();

        let children: Vec<(Pos, i32, SearchStats)> = moves
            .par_iter()
            .zip(seeds.par_iter())
            .filter_map(|(&pos, &seed)| {
                let mut branch = root.clone();
                if !branch.place(pos, current) {
                    return None;
                }
                let mut worker = Searcher::with_seed(strategy, seed);
                let (score, _) = worker.run(&mut branch, depth - 1, !maximizing, max_player, min_player);
                Some((pos, score, worker.stats))
            })
            .collect();

        let mut best = BestMoves::new(maximizing);
        for (pos, score, stats) in &children {
            self.stats.merge(stats);
            best.offer(*pos, *score);
        }
        let best_move = best.pick(&mut self.rng);

        debug!(
            "{} parallel depth {}: score {} move {:?} ({} root moves, {} nodes)",
            self.strategy,
            depth,
            best.score(),
            best_move,
            children.len(),
            self.stats.nodes
        );

        SearchResult {
            score: best.score(),
            best_move,
            stats: self.stats.clone(),
        }
    }

    /// Dispatch on strategy with a full window
    fn run(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        max_player: Mark,
        min_player: Mark,
    ) -> (i32, Option<Pos>) {
        match self.strategy {
            Strategy::Minimax => self.minimax(board, depth, maximizing, max_player, min_player),
            Strategy::AlphaBeta => {
                self.alpha_beta(board, depth, -INF, INF, maximizing, max_player, min_player)
            }
        }
    }

    /// Count the node and run the prelude
    pub(super) fn enter_node(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        max_player: Mark,
        min_player: Mark,
    ) -> NodeStart {
        self.stats.nodes += 1;
        let start = open_node(board, depth, maximizing, max_player, min_player);
        if matches!(start, NodeStart::Resolved(..)) {
            self.stats.tactical_exits += 1;
        }
        start
    }
}

/// Tactical prelude for one node, see the module docs for the order.
pub(super) fn open_node(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    max_player: Mark,
    min_player: Mark,
) -> NodeStart {
    if depth <= 0 {
        return NodeStart::Resolved(static_score(board, max_player, min_player), None);
    }

    let (current, opponent) = sides(maximizing, max_player, min_player);

    if let Some(pos) = find_winning_move(board, current) {
        trace!("{} wins at {}", current, pos);
        return NodeStart::Resolved(WIN_SCORE, Some(pos));
    }
    if let Some(pos) = find_winning_move(board, opponent) {
        trace!("{} blocks at {}", current, pos);
        return NodeStart::Resolved(BLOCK_SCORE, Some(pos));
    }

    if board.has_five(max_player) {
        return NodeStart::Resolved(WIN_SCORE, None);
    }
    if board.has_five(min_player) {
        return NodeStart::Resolved(-WIN_SCORE, None);
    }
    if board.is_full() {
        return NodeStart::Resolved(DRAW_SCORE, None);
    }

    let moves = ranked_moves(board, current, opponent, RANKED_MOVE_LIMIT);
    if moves.is_empty() {
        return NodeStart::Resolved(DRAW_SCORE, Some(board.center()));
    }
    NodeStart::Expand(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_four_board() -> Board {
        let mut board = Board::new(15);
        for c in 4..8 {
            board.place(Pos::new(7, c), Mark::Black);
        }
        board.place(Pos::new(6, 6), Mark::White);
        board.place(Pos::new(8, 6), Mark::White);
        board
    }

    #[test]
    fn test_best_moves_tie_group() {
        let mut best = BestMoves::new(true);
        best.offer(Pos::new(0, 0), 5);
        best.offer(Pos::new(0, 1), 3);
        best.offer(Pos::new(0, 2), 5);
        assert_eq!(best.score(), 5);
        assert_eq!(best.moves, vec![Pos::new(0, 0), Pos::new(0, 2)]);

        best.offer(Pos::new(0, 3), 9);
        assert_eq!(best.moves, vec![Pos::new(0, 3)]);
    }

    #[test]
    fn test_best_moves_minimizing() {
        let mut best = BestMoves::new(false);
        assert_eq!(best.score(), INF);
        best.offer(Pos::new(1, 1), 4);
        best.offer(Pos::new(1, 2), -4);
        assert_eq!(best.score(), -4);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(best.pick(&mut rng), Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_depth_zero_is_static() {
        let mut board = open_four_board();
        let expected = static_score(&board, Mark::White, Mark::Black);
        for strategy in Strategy::ALL {
            let mut searcher = Searcher::with_seed(strategy, 1);
            let result = searcher.search(&mut board, 0, true, Mark::White, Mark::Black);
            assert_eq!(result.score, expected);
            assert_eq!(result.best_move, None);
        }
    }

    #[test]
    fn test_win_beats_block() {
        let mut board = open_four_board();
        for strategy in Strategy::ALL {
            let mut searcher = Searcher::with_seed(strategy, 7);
            let result = searcher.search(&mut board, 3, true, Mark::Black, Mark::White);
            assert_eq!(result.score, WIN_SCORE);
            let m = result.best_move.expect("winning move");
            assert!(m == Pos::new(7, 3) || m == Pos::new(7, 8), "{:?} got {}", strategy, m);
        }
    }

    #[test]
    fn test_block_when_opponent_threatens() {
        let mut board = open_four_board();
        for strategy in Strategy::ALL {
            let mut searcher = Searcher::with_seed(strategy, 7);
            let result = searcher.search(&mut board, 2, true, Mark::White, Mark::Black);
            assert_eq!(result.score, BLOCK_SCORE);
            let m = result.best_move.expect("blocking move");
            assert!(m == Pos::new(7, 3) || m == Pos::new(7, 8));
        }
    }

    #[test]
    fn test_existing_five_is_terminal() {
        let mut board = Board::new(9);
        for c in 0..5 {
            board.place(Pos::new(0, c), Mark::White);
        }
        board.place(Pos::new(8, 8), Mark::Black);
        board.place(Pos::new(8, 7), Mark::Black);
        // White "wins" again on any placement since the five already stands
        let mut searcher = Searcher::with_seed(Strategy::Minimax, 3);
        let result = searcher.search(&mut board, 2, true, Mark::White, Mark::Black);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_full_board_draw() {
        let mut board = Board::from_rows(&["BWB", "BWB", "WBW"]);
        assert!(board.is_full());
        for strategy in Strategy::ALL {
            let mut searcher = Searcher::with_seed(strategy, 0);
            let result = searcher.search(&mut board, 3, true, Mark::Black, Mark::White);
            assert_eq!(result.score, DRAW_SCORE);
            assert_eq!(result.best_move, None);
        }
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Mark::Black);
        board.place(Pos::new(6, 8), Mark::White);
        let before = board.clone();
        for strategy in Strategy::ALL {
            let mut searcher = Searcher::with_seed(strategy, 11);
            searcher.search(&mut board, 3, true, Mark::Black, Mark::White);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_stats_merge() {
        let mut a = SearchStats {
            nodes: 3,
            tactical_exits: 1,
            beta_cutoffs: 2,
            first_move_cutoffs: 1,
        };
        let copy = a.clone();
        a.merge(&copy);
        assert_eq!(a.nodes, 6);
        assert_eq!(a.beta_cutoffs, 4);
        assert!((a.first_move_rate() - 50.0).abs() < f64::EPSILON);
        assert_eq!(SearchStats::default().first_move_rate(), 0.0);
    }
}

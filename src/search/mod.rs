//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation and move ordering
//! - The shared node prelude (win, block, terminal, draw)
//! - Minimax and alpha-beta search with random tie-breaks
//! - Root-parallel search on rayon

pub mod alphabeta;
pub mod minimax;
pub mod moves;
pub mod searcher;

pub use moves::{candidate_moves, find_winning_move, ranked_moves, RANKED_MOVE_LIMIT};
pub use searcher::{
    SearchResult, SearchStats, Searcher, Strategy, BLOCK_SCORE, DRAW_SCORE, WIN_SCORE,
};

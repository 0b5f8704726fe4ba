//! Gomoku engine with minimax and alpha-beta search
//!
//! Two players alternate placing stones on a square board; the first to get
//! five in a row horizontally, vertically or diagonally wins. Overlines count.
//!
//! # Architecture
//!
//! - [`board`]: Board storage, placement with undo, five-in-a-row detection
//! - [`eval`]: Line scanning, pattern tallies and the two heuristics
//! - [`search`]: Candidate moves, minimax and alpha-beta with random tie-breaks
//! - [`engine`]: Fixed-depth AI wrapper used by players and the GUI
//! - [`player`], [`game`]: Console players and the turn loop
//! - [`config`], [`error`]: Game settings and the error type
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Mark, Pos, Searcher, Strategy};
//!
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Mark::Black);
//!
//! // White to move, searched two plies deep
//! let mut searcher = Searcher::with_seed(Strategy::AlphaBeta, 1);
//! let result = searcher.search(&mut board, 2, true, Mark::White, Mark::Black);
//! if let Some(pos) = result.best_move {
//!     board.place(pos, Mark::White);
//! }
//! assert_eq!(board.stone_count(), 2);
//! ```
//!
//! # Search Order
//!
//! Each node checks, in order:
//! 1. Depth exhausted: static evaluation
//! 2. Winning move for the side to move
//! 3. Opponent's winning move, which must be blocked
//! 4. Five already on the board, then a full board
//! 5. Otherwise the seven best ranked moves are searched

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, PlayerKind, SeatConfig};
pub use engine::{AiEngine, MoveResult};
pub use error::{GameError, Result};
pub use game::{Game, GameOutcome};
pub use search::{SearchResult, Searcher, Strategy};

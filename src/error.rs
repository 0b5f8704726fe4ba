//! Error types for the game layer
//!
//! The board and search never fail; these errors come from players,
//! configuration and the console front-end.

use thiserror::Error;

use crate::board::Pos;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("position {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("position {0} is already occupied")]
    Occupied(Pos),

    #[error("could not read a move from {input:?}: expected \"row col\"")]
    InvalidInput { input: String },

    #[error("input closed before the game ended")]
    InputClosed,

    #[error("{player} found no move on a board with empty cells")]
    NoMove { player: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Errors a human can fix by entering another move
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. } | GameError::Occupied(_) | GameError::InvalidInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

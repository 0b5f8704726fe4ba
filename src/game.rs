//! Turn loop for a console game between two players

use std::fmt;
use std::io::Write;

use log::{info, warn};

use crate::board::{Board, Mark, Pos};
use crate::error::{GameError, Result};
use crate::player::Player;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{} wins", mark),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Outcome right after `mark` has played, `None` while the game goes on.
pub fn outcome_after(board: &Board, mark: Mark) -> Option<GameOutcome> {
    if board.has_five(mark) {
        Some(GameOutcome::Win(mark))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

pub struct Game<'a> {
    board: Board,
    black: Box<dyn Player + 'a>,
    white: Box<dyn Player + 'a>,
    current: Mark,
    history: Vec<(Pos, Mark)>,
}

impl<'a> Game<'a> {
    pub fn new(
        board_size: usize,
        black: Box<dyn Player + 'a>,
        white: Box<dyn Player + 'a>,
        first: Mark,
    ) -> Self {
        Self {
            board: Board::new(board_size),
            black,
            white,
            current: first,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.history
    }

    fn player(&self, mark: Mark) -> &(dyn Player + 'a) {
        match mark {
            Mark::White => self.white.as_ref(),
            _ => self.black.as_ref(),
        }
    }

    /// Ask the current player until it gives a legal move, then play it.
    ///
    /// Humans are asked again after a retryable error; any error from an AI
    /// player, or a non-retryable one from a human, ends the game.
    pub fn play_turn(&mut self, out: &mut dyn Write) -> Result<Pos> {
        let mark = self.current;
        loop {
            let board = &self.board;
            let player = match mark {
                Mark::White => self.white.as_mut(),
                _ => self.black.as_mut(),
            };
            let attempt = player.produce_move(board).and_then(|pos| {
                if board.is_empty(pos) {
                    Ok(pos)
                } else if board.in_bounds(pos) {
                    Err(GameError::Occupied(pos))
                } else {
                    Err(GameError::OutOfBounds {
                        pos,
                        size: board.size(),
                    })
                }
            });

            match attempt {
                Ok(pos) => {
                    self.board.try_place(pos, mark)?;
                    self.history.push((pos, mark));
                    info!("{} ({}) plays {}", self.player(mark).name(), mark, pos);
                    self.current = mark.opponent();
                    return Ok(pos);
                }
                Err(err) if err.is_retryable() && player.is_human() => {
                    warn!("{} rejected: {}", mark, err);
                    writeln!(out, "Invalid move ({}). Try again.", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Play until someone wins or the board fills up.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<GameOutcome> {
        loop {
            writeln!(out, "\n{}", self.board)?;
            let mark = self.current;
            let pos = self.play_turn(out)?;
            writeln!(out, "{} played {}", mark, pos)?;

            if let Some(outcome) = outcome_after(&self.board, mark) {
                writeln!(out, "\n{}", self.board)?;
                match outcome {
                    GameOutcome::Win(winner) => {
                        writeln!(out, "{} ({}) wins!", self.player(winner).name(), winner)?
                    }
                    GameOutcome::Draw => writeln!(out, "The game is a draw.")?,
                }
                info!("game over after {} moves: {}", self.history.len(), outcome);
                return Ok(outcome);
            }
        }
    }
}

//! Game configuration shared by the console game and the GUI

use std::fmt;

use clap::ValueEnum;

use crate::board::{Mark, DEFAULT_BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::search::Strategy;

/// Smallest board on which five in a row fits
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 25;

pub const DEFAULT_DEPTH: i32 = 2;
pub const MAX_DEPTH: i32 = 6;

/// Who sits in a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Human,
    Minimax,
    #[value(name = "alphabeta", alias = "alpha-beta")]
    AlphaBeta,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 3] = [PlayerKind::Human, PlayerKind::Minimax, PlayerKind::AlphaBeta];

    /// Search strategy for AI seats, `None` for humans
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Minimax => Some(Strategy::Minimax),
            PlayerKind::AlphaBeta => Some(Strategy::AlphaBeta),
        }
    }

    pub fn is_ai(self) -> bool {
        self.strategy().is_some()
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Minimax => write!(f, "AI (Minimax)"),
            PlayerKind::AlphaBeta => write!(f, "AI (Alpha-Beta)"),
        }
    }
}

/// One player's settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub kind: PlayerKind,
    /// Search depth in plies, ignored for humans
    pub depth: i32,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Full configuration of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub black: SeatConfig,
    pub white: SeatConfig,
    /// Mark that moves first
    pub first: Mark,
    /// Base seed for AI tie-breaks; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Search root moves in parallel
    pub parallel: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            black: SeatConfig::new("Player 1", PlayerKind::Human),
            white: SeatConfig::new("Player 2", PlayerKind::Minimax),
            first: Mark::Black,
            seed: None,
            parallel: false,
        }
    }
}

impl GameConfig {
    pub fn seat(&self, mark: Mark) -> &SeatConfig {
        match mark {
            Mark::White => &self.white,
            _ => &self.black,
        }
    }

    pub fn seat_mut(&mut self, mark: Mark) -> &mut SeatConfig {
        match mark {
            Mark::White => &mut self.white,
            _ => &mut self.black,
        }
    }

    /// Seed for one seat's searcher, distinct per seat
    pub fn seat_seed(&self, mark: Mark) -> Option<u64> {
        let offset = if mark == Mark::White { 1 } else { 0 };
        self.seed.map(|s| s.wrapping_add(offset))
    }

    /// Check ranges before a game starts
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GameError::InvalidConfig(format!(
                "board size {} not in {}..={}",
                self.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }
        if !self.first.is_player() {
            return Err(GameError::InvalidConfig("first player must be Black or White".into()));
        }
        for mark in [Mark::Black, Mark::White] {
            let seat = self.seat(mark);
            if seat.kind.is_ai() && !(1..=MAX_DEPTH).contains(&seat.depth) {
                return Err(GameError::InvalidConfig(format!(
                    "{} depth {} not in 1..={}",
                    mark, seat.depth, MAX_DEPTH
                )));
            }
            if seat.name.trim().is_empty() {
                return Err(GameError::InvalidConfig(format!("{} has an empty name", mark)));
            }
        }
        Ok(())
    }
}

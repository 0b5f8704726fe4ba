//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::{Board, Placed};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// The four canonical line directions.
/// Each line is covered once; scans walk both ways where needed.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    /// Player A, moves first by default
    Black,
    /// Player B
    White,
}

impl Mark {
    /// Get the other player's mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Black => Mark::White,
            Mark::White => Mark::Black,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Single-character symbol used in text rendering
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::Black => 'B',
            Mark::White => 'W',
            Mark::Empty => '.',
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mark::Black => "Black",
            Mark::White => "White",
            Mark::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// Position on the board
///
/// Coordinates are not tied to a board size; `Board` checks bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `dist` cells along `(dr, dc)`. Returns `None` below zero.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, dist: i32) -> Option<Pos> {
        let r = self.row as i64 + i64::from(dr) * i64::from(dist);
        let c = self.col as i64 + i64::from(dc) * i64::from(dist);
        if r < 0 || c < 0 {
            return None;
        }
        Some(Pos::new(r as usize, c as usize))
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Chebyshev (king-move) distance to another position
    #[inline]
    pub fn chebyshev(self, other: Pos) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major order, the order boards are scanned in
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

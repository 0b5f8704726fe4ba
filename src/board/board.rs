//! Board structure with reversible placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{Mark, Pos, DEFAULT_BOARD_SIZE, DIRECTIONS, WIN_LENGTH};
use crate::error::{GameError, Result};

/// Square game board, `size x size`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Build a board from text rows (`B`, `W`, anything else is empty).
    ///
    /// The board is square with the side taken from the number of rows;
    /// short rows are padded with empty cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(board.size).enumerate() {
                let mark = match ch {
                    'B' | 'b' | 'X' | 'x' => Mark::Black,
                    'W' | 'w' | 'O' | 'o' => Mark::White,
                    _ => Mark::Empty,
                };
                board.place(Pos::new(row, col), mark);
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Get the mark at an in-bounds position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        debug_assert!(
            self.in_bounds(pos),
            "{} outside {}x{} board",
            pos,
            self.size,
            self.size
        );
        self.cells[self.index(pos)]
    }

    /// Bounds-checked read, `None` off the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Mark> {
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cell(pos) == Some(Mark::Empty)
    }

    /// Place a mark. Fails without touching the board if the cell is out
    /// of bounds or occupied, or if `mark` is `Empty`.
    pub fn place(&mut self, pos: Pos, mark: Mark) -> bool {
        if !mark.is_player() || !self.is_empty(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.cells[idx] = mark;
        true
    }

    /// Like [`Board::place`] but says why a placement was refused.
    pub fn try_place(&mut self, pos: Pos, mark: Mark) -> Result<()> {
        if !self.in_bounds(pos) {
            return Err(GameError::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        if !self.place(pos, mark) {
            return Err(GameError::Occupied(pos));
        }
        Ok(())
    }

    /// Reset a cell to empty.
    /// Only used to undo a prior successful `place` at the same cell.
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Mark::Empty;
    }

    /// Place a mark and return a guard that removes it again when dropped.
    ///
    /// The guard derefs to the board, so a search can recurse through it:
    ///
    /// ```
    /// use gomoku::{Board, Mark, Pos};
    ///
    /// let mut board = Board::new(15);
    /// if let Some(placed) = board.place_scoped(Pos::new(7, 7), Mark::Black) {
    ///     assert_eq!(placed.get(Pos::new(7, 7)), Mark::Black);
    /// }
    /// assert!(board.is_board_empty());
    /// ```
    pub fn place_scoped(&mut self, pos: Pos, mark: Mark) -> Option<Placed<'_>> {
        if self.place(pos, mark) {
            Some(Placed { board: self, pos })
        } else {
            None
        }
    }

    /// True if `mark` has five consecutive stones in any direction.
    pub fn has_five(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    /// First five-in-a-row of `mark`, in scan order.
    pub fn winning_line(&self, mark: Mark) -> Option<[Pos; WIN_LENGTH]> {
        if !mark.is_player() {
            return None;
        }
        for start in self.positions() {
            if self.get(start) != mark {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                let mut line = [start; WIN_LENGTH];
                let complete = (1..WIN_LENGTH).all(|i| {
                    match start.offset(dr, dc, i as i32) {
                        Some(p) if self.cell(p) == Some(mark) => {
                            line[i] = p;
                            true
                        }
                        _ => false,
                    }
                });
                if complete {
                    return Some(line);
                }
            }
        }
        None
    }

    /// Five-in-a-row check restricted to lines through `pos`.
    ///
    /// Sufficient after a single placement at `pos` on a board that had
    /// no five for `mark` before.
    pub fn has_five_at(&self, pos: Pos, mark: Mark) -> bool {
        if !mark.is_player() || self.cell(pos) != Some(mark) {
            return false;
        }
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let forward = self.run_from(pos, dr, dc, mark);
            let backward = self.run_from(pos, -dr, -dc, mark);
            1 + forward + backward >= WIN_LENGTH
        })
    }

    /// Count consecutive `mark` stones after `pos` along `(dr, dc)`.
    fn run_from(&self, pos: Pos, dr: i32, dc: i32, mark: Mark) -> usize {
        (1..)
            .map_while(|i| pos.offset(dr, dc, i))
            .take_while(|&p| self.cell(p) == Some(mark))
            .count()
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&m| m == Mark::Empty)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_player()).count()
    }

    /// Center cell (`size / 2` on both axes)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Positions holding `mark`, row-major
    pub fn stones(&self, mark: Mark) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.get(p) == mark)
    }

    /// First empty cell in row-major order
    pub fn first_empty(&self) -> Option<Pos> {
        self.positions().find(|&p| self.get(p) == Mark::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:>3}")?;
            for col in 0..self.size {
                write!(f, "{:>3}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed through [`Board::place_scoped`].
///
/// Removing the stone happens in `Drop`, so early returns and pruning
/// breaks inside a search cannot leave it on the board.
pub struct Placed<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placed<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.remove(self.pos);
    }
}

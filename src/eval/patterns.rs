//! Line scanning and pattern tallies
//!
//! A line scan walks out from one stone in both directions of an axis and
//! reports the run length plus how many of its ends are open. Tallies
//! aggregate these scans over every stone of one player.

use crate::board::{Board, Mark, Pos, DIRECTIONS};

/// Maximum cells examined in each direction from the origin
const SCAN_REACH: i32 = 4;

/// Pattern weights for full-position evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Half-open four: XOOOO_ or _OOOOX
    pub const HALF_OPEN_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
}

/// Result of walking a line from one stone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScan {
    /// Contiguous stones including the origin
    pub run_length: u32,
    /// Ends of the run that stop on an in-bounds empty cell (0-2)
    pub open_ends: u32,
}

/// Walk the line through `pos` along `(dr, dc)` and back.
///
/// The origin must hold `player`'s stone; any other origin yields an empty
/// scan. Each direction stops at the first cell that is not `player`'s; an
/// empty stop adds an open end, an opponent stone or the edge adds nothing.
pub fn scan_line(board: &Board, pos: Pos, dr: i32, dc: i32, player: Mark) -> LineScan {
    let mut scan = LineScan::default();
    if board.cell(pos) != Some(player) {
        return scan;
    }
    scan.run_length = 1;

    for (sr, sc) in [(dr, dc), (-dr, -dc)] {
        for step in 1..=SCAN_REACH {
            match pos.offset(sr, sc, step).and_then(|p| board.cell(p)) {
                Some(m) if m == player => scan.run_length += 1,
                Some(Mark::Empty) => {
                    scan.open_ends += 1;
                    break;
                }
                _ => break, // opponent or edge
            }
        }
    }

    scan
}

/// Named pattern counts for one player on one board snapshot.
///
/// Every stone of a run scans the run again, so a run of length `n` is
/// counted up to `n` times along its axis. Both players are counted the
/// same way and the weights are tuned for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternTally {
    pub open_two: u32,
    pub open_three: u32,
    pub open_four: u32,
    pub half_open_four: u32,
    pub five: u32,
}

impl PatternTally {
    /// Add one scan result to the matching bucket
    fn record(&mut self, scan: LineScan) {
        match (scan.run_length, scan.open_ends) {
            (5.., _) => self.five += 1,
            (4, 2) => self.open_four += 1,
            (4, 1) => self.half_open_four += 1,
            (3, 2) => self.open_three += 1,
            (2, 2) => self.open_two += 1,
            _ => {}
        }
    }

    /// Weighted sum of all buckets
    pub fn score(&self) -> i32 {
        let weighted = [
            (self.five, PatternScore::FIVE),
            (self.open_four, PatternScore::OPEN_FOUR),
            (self.half_open_four, PatternScore::HALF_OPEN_FOUR),
            (self.open_three, PatternScore::OPEN_THREE),
            (self.open_two, PatternScore::OPEN_TWO),
        ];
        weighted
            .iter()
            .map(|&(count, weight)| count as i32 * weight)
            .sum()
    }
}

/// Tally patterns for every stone of `player` in all four directions
pub fn tally_patterns(board: &Board, player: Mark) -> PatternTally {
    let mut tally = PatternTally::default();
    for pos in board.stones(player) {
        for &(dr, dc) in &DIRECTIONS {
            tally.record(scan_line(board, pos, dr, dc, player));
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::HALF_OPEN_FOUR);
        assert!(PatternScore::HALF_OPEN_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_scan_single_stone_center() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Mark::Black);

        let scan = scan_line(&board, Pos::new(7, 7), 0, 1, Mark::Black);
        assert_eq!(scan, LineScan { run_length: 1, open_ends: 2 });
    }

    #[test]
    fn test_scan_origin_not_owned() {
        let mut board = Board::new(9);
        board.place(Pos::new(4, 4), Mark::White);
        board.place(Pos::new(4, 5), Mark::Black);

        assert_eq!(scan_line(&board, Pos::new(4, 3), 0, 1, Mark::Black), LineScan::default());
        assert_eq!(scan_line(&board, Pos::new(4, 4), 0, 1, Mark::Black), LineScan::default());
        let own = scan_line(&board, Pos::new(4, 5), 0, 1, Mark::Black);
        assert_eq!(own, LineScan { run_length: 1, open_ends: 1 });
    }

    #[test]
    fn test_scan_blocked_by_opponent_and_edge() {
        // edge on the left, opponent on the right
        let board = Board::from_rows(&[
            "BBBW...",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        let scan = scan_line(&board, Pos::new(0, 1), 0, 1, Mark::Black);
        assert_eq!(scan, LineScan { run_length: 3, open_ends: 0 });
    }

    #[test]
    fn test_scan_half_open() {
        let board = Board::from_rows(&[
            ".......",
            "WBBBB..",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        let scan = scan_line(&board, Pos::new(1, 2), 0, 1, Mark::Black);
        assert_eq!(scan, LineScan { run_length: 4, open_ends: 1 });
    }

    #[test]
    fn test_scan_reach_is_four_each_way() {
        let mut board = Board::new(15);
        for c in 0..11 {
            board.place(Pos::new(5, c), Mark::White);
        }
        // 4 left + origin + 4 right, no end reached
        let scan = scan_line(&board, Pos::new(5, 5), 0, 1, Mark::White);
        assert_eq!(scan, LineScan { run_length: 9, open_ends: 0 });
    }

    #[test]
    fn test_scan_diagonals() {
        let mut board = Board::new(15);
        for i in 0..3 {
            board.place(Pos::new(4 + i, 4 + i), Mark::Black);
            board.place(Pos::new(4 + i, 12 - i), Mark::White);
        }
        let se = scan_line(&board, Pos::new(5, 5), 1, 1, Mark::Black);
        assert_eq!(se, LineScan { run_length: 3, open_ends: 2 });
        let sw = scan_line(&board, Pos::new(5, 11), 1, -1, Mark::White);
        assert_eq!(sw, LineScan { run_length: 3, open_ends: 2 });
    }

    #[test]
    fn test_tally_empty_board() {
        let board = Board::new(15);
        assert_eq!(tally_patterns(&board, Mark::Black), PatternTally::default());
        assert_eq!(PatternTally::default().score(), 0);
    }

    #[test]
    fn test_tally_open_three_counts_each_stone() {
        let mut board = Board::new(15);
        for c in 5..8 {
            board.place(Pos::new(7, c), Mark::Black);
        }
        let tally = tally_patterns(&board, Mark::Black);
        // every stone of the run sees the same open three
        assert_eq!(tally.open_three, 3);
        assert_eq!(tally.open_two, 0);
        assert_eq!(tally.score(), 3 * PatternScore::OPEN_THREE);
    }

    #[test]
    fn test_tally_fours_and_five() {
        let mut board = Board::new(15);
        // open four on row 2
        for c in 3..7 {
            board.place(Pos::new(2, c), Mark::White);
        }
        // half-open four on row 10 against the left edge
        for c in 0..4 {
            board.place(Pos::new(10, c), Mark::White);
        }
        let tally = tally_patterns(&board, Mark::White);
        assert_eq!(tally.open_four, 4);
        assert_eq!(tally.half_open_four, 4);
        assert_eq!(tally.five, 0);

        board.place(Pos::new(2, 7), Mark::White);
        let tally = tally_patterns(&board, Mark::White);
        assert_eq!(tally.five, 5);
        assert_eq!(tally.open_four, 0);
    }

    #[test]
    fn test_tally_ignores_closed_runs() {
        let board = Board::from_rows(&[
            "WBBW...",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        let tally = tally_patterns(&board, Mark::Black);
        assert_eq!(tally.open_two, 0);
    }
}

//! Heuristic scoring for Gomoku positions
//!
//! Two functions built on the line scanner:
//! - [`quick_score`]: local value of one cell for one player, used to rank
//!   candidate moves before recursing
//! - [`static_score`]: full-board pattern balance, used at the search frontier

use crate::board::{Board, Mark, Pos, DIRECTIONS};

use super::patterns::{scan_line, tally_patterns, LineScan};

/// Manhattan radius around the center that earns a bonus
const CENTER_RADIUS: i32 = 5;

/// Bonus per unit of distance inside `CENTER_RADIUS`
const CENTER_WEIGHT: i32 = 2;

/// Per-direction value of a line shape for move ranking
fn line_value(scan: LineScan) -> i32 {
    match (scan.run_length, scan.open_ends) {
        (5.., _) => 10_000,
        (4, 2) => 2_000,
        (4, 1) => 500,
        (3, 2) => 200,
        (3, 1) => 50,
        (2, 2) => 10,
        (2, 1) => 3,
        (1, 1..) => 1,
        _ => 0,
    }
}

/// Score `player`'s stone at `pos`.
///
/// Sums the line value of all four directions through `pos` and adds a
/// bonus of `max(0, 5 - manhattan distance to center) * 2`. Lines only count
/// when `pos` holds `player`'s stone, so move ranking places the stone
/// first; on an empty cell only the bonus remains.
#[must_use]
pub fn quick_score(board: &Board, pos: Pos, player: Mark) -> i32 {
    let lines: i32 = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| line_value(scan_line(board, pos, dr, dc, player)))
        .sum();

    lines + center_bonus(board, pos)
}

fn center_bonus(board: &Board, pos: Pos) -> i32 {
    let dist = i32::try_from(pos.manhattan(board.center())).unwrap_or(i32::MAX);
    (CENTER_RADIUS - dist).max(0) * CENTER_WEIGHT
}

/// Evaluate the board as `max_player`'s pattern score minus `min_player`'s.
///
/// Zero-sum by construction: swapping the players negates the result.
#[must_use]
pub fn static_score(board: &Board, max_player: Mark, min_player: Mark) -> i32 {
    let max_score = tally_patterns(board, max_player).score();
    let min_score = tally_patterns(board, min_player).score();
    max_score - min_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_quick_score_empty_board_is_center_bonus() {
        let board = Board::new(15);
        for pos in board.positions() {
            let dist = pos.manhattan(board.center()) as i32;
            assert_eq!(quick_score(&board, pos, Mark::Black), (5 - dist).max(0) * 2, "at {}", pos);
        }
        assert_eq!(quick_score(&board, Pos::new(7, 7), Mark::White), 10);
        assert_eq!(quick_score(&board, Pos::new(0, 0), Mark::White), 0);
    }

    #[test]
    fn test_quick_score_lone_stone() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 9), Mark::Black);
        // run 1 with open ends in all four directions, plus the bonus
        assert_eq!(quick_score(&board, Pos::new(7, 9), Mark::Black), 4 + 6);
        // White has nothing on that cell
        assert_eq!(quick_score(&board, Pos::new(7, 9), Mark::White), 6);

        board.place(Pos::new(0, 0), Mark::White);
        // the corner has no open end on the anti-diagonal
        assert_eq!(quick_score(&board, Pos::new(0, 0), Mark::White), 3);
    }

    #[test]
    fn test_quick_score_completing_five() {
        let mut board = Board::new(15);
        for c in 3..8 {
            board.place(Pos::new(0, c), Mark::Black);
        }
        let score = quick_score(&board, Pos::new(0, 7), Mark::Black);
        assert!(score >= 10_000, "five should dominate, got {}", score);
    }

    #[test]
    fn test_quick_score_open_vs_half_open_three() {
        let mut open = Board::new(15);
        for c in 4..7 {
            open.place(Pos::new(3, c), Mark::Black);
        }

        let mut half = open.clone();
        half.place(Pos::new(3, 3), Mark::White);

        let open_score = quick_score(&open, Pos::new(3, 6), Mark::Black);
        let half_score = quick_score(&half, Pos::new(3, 6), Mark::Black);
        // open three (200) vs half-open three (50) on the same cell
        assert_eq!(open_score - half_score, 150);
    }

    #[test]
    fn test_static_score_empty_board() {
        let board = Board::new(15);
        assert_eq!(static_score(&board, Mark::Black, Mark::White), 0);
    }

    #[test]
    fn test_static_score_antisymmetric() {
        let board = Board::from_rows(&[
            "...............",
            "...............",
            "..BBB..........",
            "...............",
            ".....W.........",
            ".....W.........",
            ".....W.....B...",
            ".....W....B....",
            ".........B.....",
            "...............",
            "...WW..........",
            "...............",
            "...............",
            "...............",
            "...............",
        ]);
        let black_view = static_score(&board, Mark::Black, Mark::White);
        let white_view = static_score(&board, Mark::White, Mark::Black);
        assert_eq!(black_view, -white_view);
        assert_ne!(black_view, 0);
    }

    #[test]
    fn test_static_score_perspective() {
        let mut board = Board::new(15);
        for c in 1..4 {
            board.place(Pos::new(9, c), Mark::Black);
        }
        assert_eq!(
            static_score(&board, Mark::Black, Mark::White),
            3 * PatternScore::OPEN_THREE
        );
        assert!(static_score(&board, Mark::White, Mark::Black) < 0);
    }

    #[test]
    fn test_static_score_five_dominates() {
        let mut board = Board::new(15);
        for c in 0..5 {
            board.place(Pos::new(9, c), Mark::White);
        }
        let score = static_score(&board, Mark::Black, Mark::White);
        assert!(score <= -PatternScore::FIVE, "got {}", score);
    }
}

//! Players: anything that can pick a move for one mark

use std::io::{BufRead, Write};

use crate::board::{Board, Mark, Pos};
use crate::config::GameConfig;
use crate::engine::{AiEngine, MoveResult};
use crate::error::{GameError, Result};

pub trait Player {
    fn name(&self) -> &str;

    fn mark(&self) -> Mark;

    /// Pick a move on `board`. The board is not modified.
    fn produce_move(&mut self, board: &Board) -> Result<Pos>;

    /// Humans get another try after an illegal move
    fn is_human(&self) -> bool {
        false
    }
}

/// Parse "row col" (whitespace or comma separated, 0-based).
pub fn parse_move(line: &str) -> Result<Pos> {
    let invalid = || GameError::InvalidInput {
        input: line.trim().to_string(),
    };
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());

    let row = parts.next().ok_or_else(invalid)?.parse::<usize>().map_err(|_| invalid())?;
    let col = parts.next().ok_or_else(invalid)?.parse::<usize>().map_err(|_| invalid())?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(Pos::new(row, col))
}

/// Reads moves as text lines from `input`, prompting on `output`.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn produce_move(&mut self, board: &Board) -> Result<Pos> {
        write!(
            self.output,
            "{} ({}), enter row and column [0-{}]: ",
            self.name,
            self.mark.symbol(),
            board.size() - 1
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        parse_move(&line)
    }

    fn is_human(&self) -> bool {
        true
    }
}

/// Computer player backed by an [`AiEngine`]
pub struct AiPlayer {
    name: String,
    mark: Mark,
    engine: AiEngine,
    last_result: Option<MoveResult>,
}

impl AiPlayer {
    pub fn new(name: impl Into<String>, mark: Mark, engine: AiEngine) -> Self {
        Self {
            name: name.into(),
            mark,
            engine,
            last_result: None,
        }
    }

    /// Search details of the last move played
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn produce_move(&mut self, board: &Board) -> Result<Pos> {
        let result = self.engine.get_move_with_stats(board, self.mark);
        let pos = result.best_move.ok_or_else(|| GameError::NoMove {
            player: self.name.clone(),
        })?;
        self.last_result = Some(result);
        Ok(pos)
    }
}

/// Build the player for one seat. Human seats read from `input` and prompt on `output`.
pub fn seat_player<'a, R, W>(
    config: &GameConfig,
    mark: Mark,
    input: R,
    output: W,
) -> Box<dyn Player + 'a>
where
    R: BufRead + 'a,
    W: Write + 'a,
{
    let seat = config.seat(mark);
    match seat.kind.strategy() {
        None => Box::new(HumanPlayer::new(seat.name.clone(), mark, input, output)),
        Some(strategy) => {
            let engine = AiEngine::from_seed(strategy, seat.depth, config.seat_seed(mark))
                .parallel(config.parallel);
            Box::new(AiPlayer::new(seat.name.clone(), mark, engine))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Strategy;
    use std::io::{self, Cursor};

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("7 7\n").ok(), Some(Pos::new(7, 7)));
        assert_eq!(parse_move("  3,12 ").ok(), Some(Pos::new(3, 12)));
        assert_eq!(parse_move("0\t14").ok(), Some(Pos::new(0, 14)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        for bad in ["", "7", "a b", "1 2 3", "-1 4", "7 x"] {
            assert!(
                matches!(parse_move(bad), Err(GameError::InvalidInput { .. })),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_human_player_reads_lines() {
        let input = Cursor::new("4 5\nbad\n");
        let mut output: Vec<u8> = Vec::new();
        let board = Board::new(9);
        {
            let mut human = HumanPlayer::new("Ann", Mark::Black, input, &mut output);
            assert!(human.is_human());
            assert_eq!(human.produce_move(&board).ok(), Some(Pos::new(4, 5)));
            assert!(matches!(
                human.produce_move(&board),
                Err(GameError::InvalidInput { .. })
            ));
            assert!(matches!(human.produce_move(&board), Err(GameError::InputClosed)));
        }
        let prompt = String::from_utf8(output).expect("utf8");
        assert!(prompt.contains("Ann (B)"));
        assert!(prompt.contains("[0-8]"));
    }

    #[test]
    fn test_ai_player_moves_and_records() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Mark::Black);
        let engine = AiEngine::with_seed(Strategy::Minimax, 2, 5);
        let mut ai = AiPlayer::new("Bot", Mark::White, engine);

        assert!(!ai.is_human());
        assert!(ai.last_result().is_none());
        let pos = ai.produce_move(&board).expect("move");
        assert!(board.is_empty(pos));
        assert_eq!(ai.last_result().and_then(|r| r.best_move), Some(pos));
    }

    #[test]
    fn test_seat_player_kinds() {
        let config = GameConfig::default();
        let black = seat_player(&config, Mark::Black, Cursor::new(""), io::sink());
        let white = seat_player(&config, Mark::White, Cursor::new(""), io::sink());
        assert!(black.is_human());
        assert!(!white.is_human());
        assert_eq!(white.mark(), Mark::White);
        assert_eq!(white.name(), "Player 2");
    }
}

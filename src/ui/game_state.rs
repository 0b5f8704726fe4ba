//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::board::{Board, Mark, Pos, WIN_LENGTH};
use crate::config::GameConfig;
use crate::engine::{AiEngine, MoveResult};
use crate::error::GameError;
use crate::game::{outcome_after, GameOutcome};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Finished game with the line to highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
}

/// Main game state
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub current_turn: Mark,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current_turn: config.first,
            config,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start over with the same players. A search still running is abandoned.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn is_human_turn(&self) -> bool {
        !self.config.seat(self.current_turn).kind.is_ai()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn player_name(&self, mark: Mark) -> &str {
        &self.config.seat(mark).name
    }

    /// Place a stone for the human to move.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let mark = self.current_turn;
        self.board.try_place(pos, mark)?;
        info!("{} ({}) plays {}", self.player_name(mark), mark, pos);

        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.message = None;

        if let Some(outcome) = outcome_after(&self.board, mark) {
            info!("game over after {} moves: {}", self.move_history.len(), outcome);
            self.game_over = Some(GameResult {
                outcome,
                winning_line: self.board.winning_line(mark),
            });
            return Ok(());
        }

        self.current_turn = mark.opponent();
        Ok(())
    }

    /// Spawn a search for the AI to move. The worker gets a board clone.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        let mark = self.current_turn;
        let seat = self.config.seat(mark);
        let Some(strategy) = seat.kind.strategy() else {
            return;
        };

        // a fixed seed still varies from move to move
        let seed = self
            .config
            .seat_seed(mark)
            .map(|s| s.wrapping_add(self.move_history.len() as u64));
        let mut engine = AiEngine::from_seed(strategy, seat.depth, seed).parallel(self.config.parallel);
        let board = self.board.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, mark);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once the worker has answered
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(result.clone());

        match result.best_move {
            Some(pos) => {
                if let Err(err) = self.execute_move(pos) {
                    warn!("AI produced an illegal move: {}", err);
                    self.message = Some(format!("AI error: {}", err));
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Block until the running search answers. Used by tests.
    #[cfg(test)]
    fn wait_for_ai(&mut self) {
        while self.is_ai_thinking() {
            self.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlayerKind, SeatConfig};

    fn config(black: PlayerKind, white: PlayerKind) -> GameConfig {
        GameConfig {
            board_size: 9,
            black: SeatConfig::new("A", black),
            white: SeatConfig::new("B", white),
            seed: Some(3),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_human_moves_alternate() {
        let mut state = GameState::new(config(PlayerKind::Human, PlayerKind::Human));
        assert!(state.try_place_stone(Pos::new(4, 4)).is_ok());
        assert_eq!(state.current_turn, Mark::White);
        assert!(state.try_place_stone(Pos::new(4, 4)).is_err(), "occupied");
        assert_eq!(state.current_turn, Mark::White);
        assert!(state.try_place_stone(Pos::new(9, 0)).is_err(), "out of bounds");
        assert_eq!(state.last_move, Some(Pos::new(4, 4)));
    }

    #[test]
    fn test_win_sets_line_and_blocks_moves() {
        let mut state = GameState::new(config(PlayerKind::Human, PlayerKind::Human));
        for c in 0..4 {
            state.try_place_stone(Pos::new(0, c)).expect("black");
            state.try_place_stone(Pos::new(8, c)).expect("white");
        }
        state.try_place_stone(Pos::new(0, 4)).expect("black wins");

        let result = state.game_over.expect("game over");
        assert_eq!(result.outcome, GameOutcome::Win(Mark::Black));
        assert_eq!(result.winning_line.map(|l| l[0]), Some(Pos::new(0, 0)));
        assert!(state.try_place_stone(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_human_cannot_move_for_ai() {
        let mut state = GameState::new(config(PlayerKind::AlphaBeta, PlayerKind::Human));
        assert!(state.is_ai_turn());
        assert!(state.try_place_stone(Pos::new(4, 4)).is_err());
    }

    #[test]
    fn test_ai_move_arrives_over_channel() {
        let mut state = GameState::new(config(PlayerKind::Minimax, PlayerKind::Human));
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        state.wait_for_ai();

        assert_eq!(state.last_move, Some(Pos::new(4, 4)));
        assert_eq!(state.current_turn, Mark::White);
        assert!(state.last_ai_result.is_some());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut state = GameState::new(config(PlayerKind::Human, PlayerKind::Minimax));
        state.try_place_stone(Pos::new(1, 1)).expect("move");
        state.reset();
        assert!(state.board.is_board_empty());
        assert!(state.move_history.is_empty());
        assert_eq!(state.config.white.kind, PlayerKind::Minimax);
        assert_eq!(state.current_turn, Mark::Black);
    }
}

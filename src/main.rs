//! Gomoku
//!
//! Opens the setup window by default; `--console` plays in the terminal
//! with moves typed as "row col".

use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;

use gomoku::config::DEFAULT_DEPTH;
use gomoku::player::seat_player;
use gomoku::ui::GomokuApp;
use gomoku::{Game, GameConfig, Mark, PlayerKind, SeatConfig, DEFAULT_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Mark::Black,
            Side::White => Mark::White,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Play in the terminal instead of opening a window
    #[arg(long, action = clap::ArgAction::SetTrue)]
    console: bool,

    /// Board side length
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Who plays Black
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    black: PlayerKind,

    /// Who plays White
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    white: PlayerKind,

    /// Search depth for both AI seats
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: i32,

    /// Search depth for Black, overrides --depth
    #[arg(long)]
    black_depth: Option<i32>,

    /// Search depth for White, overrides --depth
    #[arg(long)]
    white_depth: Option<i32>,

    /// Name shown for Black
    #[arg(long, default_value = "Player 1")]
    black_name: String,

    /// Name shown for White
    #[arg(long, default_value = "Player 2")]
    white_name: String,

    /// Side that moves first
    #[arg(long, value_enum, default_value_t = Side::Black)]
    first: Side,

    /// Seed for reproducible AI tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Search AI root moves in parallel
    #[arg(long, action = clap::ArgAction::SetTrue)]
    parallel: bool,
}

impl Args {
    fn into_config(self) -> GameConfig {
        let seat = |name: String, kind, depth: Option<i32>| SeatConfig {
            name,
            kind,
            depth: depth.unwrap_or(self.depth),
        };
        GameConfig {
            board_size: self.size,
            black: seat(self.black_name.clone(), self.black, self.black_depth),
            white: seat(self.white_name.clone(), self.white, self.white_depth),
            first: self.first.into(),
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

fn run_console(config: &GameConfig) -> gomoku::Result<()> {
    // one-byte buffers: both seats may read stdin without stealing each other's lines
    let input = || BufReader::with_capacity(1, io::stdin());
    let black = seat_player(config, Mark::Black, input(), io::stdout());
    let white = seat_player(config, Mark::White, input(), io::stdout());

    let mut game = Game::new(config.board_size, black, white, config.first);
    game.run(&mut io::stdout())?;
    Ok(())
}

fn run_window(config: GameConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let console = args.console;
    let config = args.into_config();

    if let Err(err) = config.validate() {
        error!("{}", err);
        return ExitCode::FAILURE;
    }

    if console {
        if let Err(err) = run_console(&config) {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    } else if let Err(err) = run_window(config) {
        error!("window error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

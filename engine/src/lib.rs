pub mod board;
pub mod bot_controller;
pub mod config;
pub mod game_state;
pub mod logger;
pub mod rng;
pub mod session;
pub mod settings;
pub mod types;
pub mod win_detector;

pub use board::{
    BOARD_CELLS, Board, EMPTY_BOARD, LINES, get_available_moves, is_board_full, is_valid_move,
};
pub use bot_controller::{BotInput, calculate_heuristic_move, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use rng::GameRng;
pub use session::{MatchPhase, MatchSession, ScoreBoard};
pub use settings::MatchSettings;
pub use types::{BotDifficulty, FirstMover, GameMode, GameOutcome, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};

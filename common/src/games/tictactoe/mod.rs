mod board;
mod bot_controller;
mod frontend;
mod game_state;
mod history;
mod scoreboard;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::calculate_random_move;
pub use frontend::{GameRenderer, GameView, SoundCue};
pub use game_state::TicTacToeGameState;
pub use history::{History, MAX_HISTORY_ENTRIES, Snapshot};
pub use scoreboard::Scoreboard;
pub use session::TicTacToeSession;
pub use settings::{
    AI_MARK, DEFAULT_AI_MOVE_DELAY, DEFAULT_BOARD_SIZE, SUPPORTED_BOARD_SIZES,
    TicTacToeSessionSettings, validate_board_size,
};
pub use types::{GameStatus, Mark, MoveOutcome, MoveRejected, SessionEvent, WinningLine};
pub use win_detector::{check_win, generate_win_patterns};

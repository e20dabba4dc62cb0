use std::time::Duration;

use crate::config::Validate;
use super::types::Mark;

/// The AI always plays the second mover.
pub const AI_MARK: Mark = Mark::O;

pub const SUPPORTED_BOARD_SIZES: [usize; 5] = [3, 4, 5, 6, 7];
pub const DEFAULT_BOARD_SIZE: usize = 3;
pub const DEFAULT_AI_MOVE_DELAY: Duration = Duration::from_millis(400);

pub fn validate_board_size(size: usize) -> Result<(), String> {
    if SUPPORTED_BOARD_SIZES.contains(&size) {
        Ok(())
    } else {
        Err(format!(
            "Board size {} is not supported (expected one of {:?})",
            size, SUPPORTED_BOARD_SIZES
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub board_size: usize,
    pub ai_enabled: bool,
    pub ai_move_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ai_enabled: false,
            ai_move_delay: DEFAULT_AI_MOVE_DELAY,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        validate_board_size(self.board_size)?;
        if self.ai_move_delay > Duration::from_secs(10) {
            return Err(format!(
                "AI move delay {}ms exceeds 10000ms",
                self.ai_move_delay.as_millis()
            ));
        }
        Ok(())
    }
}

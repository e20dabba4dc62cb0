use std::time::Duration;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{
    DEFAULT_AI_MOVE_DELAY, DEFAULT_BOARD_SIZE, TicTacToeSessionSettings, validate_board_size,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: u32,
    pub ai_enabled: bool,
    pub ai_move_delay_ms: u64,
}

impl GameConfig {
    pub fn to_session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            board_size: self.board_size as usize,
            ai_enabled: self.ai_enabled,
            ai_move_delay: Duration::from_millis(self.ai_move_delay_ms),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        validate_board_size(self.board_size as usize)?;
        if self.ai_move_delay_ms > 10_000 {
            return Err(format!(
                "ai_move_delay_ms must not exceed 10000, got {}",
                self.ai_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE as u32,
            ai_enabled: false,
            ai_move_delay_ms: DEFAULT_AI_MOVE_DELAY.as_millis() as u64,
        }
    }
}

use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: Theme,
    pub sound_enabled: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sound_enabled: true,
        }
    }
}

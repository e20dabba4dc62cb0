mod display_config;
mod game_config;
mod main_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

use display_config::DisplayConfig;
use game_config::GameConfig;

pub use display_config::Theme;
pub use main_config::{Config, default_config_path, get_config_manager};

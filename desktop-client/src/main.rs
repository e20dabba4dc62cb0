mod audio;
mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::TicTacToeSession;
use tictactoe_common::{log, logger};

use audio::AudioCues;
use config::{Config, default_config_path, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    /// Path to the YAML config file. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Seed for the AI's random moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written to {}", config_path);
        return Ok(());
    }

    let config = config_manager.get_config()?;
    log!("Loaded config from {}", config_path);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let session = TicTacToeSession::new(config.game.to_session_settings(), rng)?;
    let audio = AudioCues::new(config.display.sound_enabled);
    let theme = config.display.theme;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([360.0, 440.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(session, audio, theme)))),
    )?;

    log!("Window closed");

    Ok(())
}

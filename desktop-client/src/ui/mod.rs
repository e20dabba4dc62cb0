mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;

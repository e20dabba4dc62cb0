use super::board::Board;
use super::scoreboard::Scoreboard;
use super::types::{GameStatus, Mark, SessionEvent};

/// Read-only view of a session handed to the presentation layer.
#[derive(Debug)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub status: &'a GameStatus,
    pub status_text: String,
    pub current_mark: Mark,
    pub scores: Scoreboard,
    pub ai_enabled: bool,
    pub ai_move_pending: bool,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl GameView<'_> {
    pub fn winning_pattern(&self) -> Option<&[usize]> {
        match self.status {
            GameStatus::Won(line) => Some(&line.pattern),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Move,
    Win,
}

impl SoundCue {
    pub fn for_event(event: &SessionEvent) -> Option<SoundCue> {
        match event {
            SessionEvent::MovePlaced { .. } => Some(SoundCue::Move),
            SessionEvent::GameWon { .. } => Some(SoundCue::Win),
            SessionEvent::GameDrawn => None,
        }
    }
}

/// Presentation side of a session. Input flows back through
/// `TicTacToeSession::on_move_requested`.
pub trait GameRenderer {
    fn render(&mut self, view: &GameView<'_>);

    /// Sound output is best effort; implementations swallow their own failures.
    fn play_cue(&mut self, _cue: SoundCue) {}
}

use std::time::Instant;

use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::bot_controller::calculate_random_move;
use super::frontend::{GameRenderer, GameView, SoundCue};
use super::game_state::TicTacToeGameState;
use super::history::History;
use super::scoreboard::Scoreboard;
use super::settings::{AI_MARK, TicTacToeSessionSettings, validate_board_size};
use super::types::{GameStatus, MoveOutcome, MoveRejected, SessionEvent};

/// All mutable game data behind one owner: board, turn, history, scores and
/// the scheduled AI move.
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    game_state: TicTacToeGameState,
    history: History,
    scores: Scoreboard,
    rng: SessionRng,
    pending_ai_move: Option<Instant>,
    events: Vec<SessionEvent>,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;

        let game_state = TicTacToeGameState::new(settings.board_size);
        let history = History::new(game_state.snapshot());

        log!(
            "New session: {}x{} board, AI {}, seed {}",
            settings.board_size,
            settings.board_size,
            if settings.ai_enabled { "on" } else { "off" },
            rng.seed()
        );

        Ok(Self {
            settings,
            game_state,
            history,
            scores: Scoreboard::new(),
            rng,
            pending_ai_move: None,
            events: Vec::new(),
        })
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn status(&self) -> &GameStatus {
        self.game_state.status()
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn pending_ai_move(&self) -> Option<Instant> {
        self.pending_ai_move
    }

    pub fn is_ai_turn(&self) -> bool {
        self.settings.ai_enabled
            && !self.game_state.status().is_terminal()
            && self.game_state.current_mark() == AI_MARK
    }

    /// Fresh board, X to move. Scores are kept.
    pub fn restart(&mut self) {
        self.game_state = TicTacToeGameState::new(self.settings.board_size);
        self.history.reset(self.game_state.snapshot());
        self.pending_ai_move = None;
        log!("Game restarted on {}x{} board", self.settings.board_size, self.settings.board_size);
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    pub fn restart_with_score_reset(&mut self) {
        self.reset_scores();
        self.restart();
    }

    pub fn set_board_size(&mut self, size: usize) -> Result<(), String> {
        validate_board_size(size)?;
        self.settings.board_size = size;
        self.restart_with_score_reset();
        Ok(())
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.settings.ai_enabled = enabled;
        self.restart();
    }

    /// Human input. On the AI's turn the request is declined.
    pub fn on_move_requested(
        &mut self,
        position: usize,
        now: Instant,
    ) -> Result<MoveOutcome, MoveRejected> {
        if self.is_ai_turn() {
            log!("Ignoring move request for cell {}: AI is to move", position);
            return Err(MoveRejected::AwaitingAi);
        }

        let outcome = self.apply_move(position)?;
        self.schedule_ai_move(now);

        Ok(outcome)
    }

    /// Places the current mark, then records history, scores and events.
    pub fn apply_move(&mut self, position: usize) -> Result<MoveOutcome, MoveRejected> {
        let outcome = match self.game_state.place_mark(position) {
            Ok(outcome) => outcome,
            Err(e) => {
                log!("Move at {} rejected: {}", position, e);
                return Err(e);
            }
        };

        self.history.record(self.game_state.snapshot());
        self.events.push(SessionEvent::MovePlaced {
            position,
            mark: outcome.mark,
        });

        match &outcome.status {
            GameStatus::Won(line) => {
                self.scores.record_result(&outcome.status);
                self.events.push(SessionEvent::GameWon { mark: line.mark });
                log!("Player {} wins with {:?}", line.mark, line.pattern);
            }
            GameStatus::Draw => {
                self.scores.record_result(&outcome.status);
                self.events.push(SessionEvent::GameDrawn);
                log!("Game drawn");
            }
            GameStatus::InProgress => {}
        }

        Ok(outcome)
    }

    /// Fires the scheduled AI move once `now` has reached its deadline.
    pub fn poll_ai(&mut self, now: Instant) -> Option<MoveOutcome> {
        let due_at = self.pending_ai_move?;
        if now < due_at {
            return None;
        }
        self.pending_ai_move = None;
        self.play_ai_move()
    }

    pub fn play_ai_move(&mut self) -> Option<MoveOutcome> {
        if !self.is_ai_turn() {
            log!("Skipping AI move: AI disabled or not its turn");
            return None;
        }

        let Some(position) = calculate_random_move(self.game_state.board(), &mut self.rng) else {
            log!("Skipping AI move: no empty cells");
            return None;
        };

        self.apply_move(position).ok()
    }

    /// Steps back one snapshot; with AI on, keeps stepping until the human is to move.
    pub fn undo(&mut self, now: Instant) -> bool {
        self.pending_ai_move = None;
        let mut changed = false;
        while let Some(snapshot) = self.history.undo() {
            self.game_state.restore(snapshot);
            changed = true;
            if !self.is_ai_turn() {
                break;
            }
        }
        self.schedule_ai_move(now);
        changed
    }

    pub fn redo(&mut self, now: Instant) -> bool {
        self.pending_ai_move = None;
        let mut changed = false;
        while let Some(snapshot) = self.history.redo() {
            self.game_state.restore(snapshot);
            changed = true;
            if !self.is_ai_turn() {
                break;
            }
        }
        self.schedule_ai_move(now);
        changed
    }

    /// History can run out on a position where the AI is to move.
    fn schedule_ai_move(&mut self, now: Instant) {
        if self.is_ai_turn() {
            self.pending_ai_move = Some(now + self.settings.ai_move_delay);
        }
    }

    pub fn status_text(&self) -> String {
        match self.game_state.status() {
            GameStatus::InProgress => {
                format!("Player {}'s Turn", self.game_state.current_mark())
            }
            GameStatus::Won(line) => format!("Player {} Wins!", line.mark),
            GameStatus::Draw => "It's a Draw!".to_string(),
        }
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: self.game_state.board(),
            status: self.game_state.status(),
            status_text: self.status_text(),
            current_mark: self.game_state.current_mark(),
            scores: self.scores,
            ai_enabled: self.settings.ai_enabled,
            ai_move_pending: self.pending_ai_move.is_some(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flushes queued cues, then renders the current state.
    pub fn present<R: GameRenderer>(&mut self, renderer: &mut R) {
        for event in self.drain_events() {
            if let Some(cue) = SoundCue::for_event(&event) {
                renderer.play_cue(cue);
            }
        }
        renderer.render(&self.view());
    }
}

use super::board::Board;
use super::history::Snapshot;
use super::types::{GameStatus, Mark, MoveOutcome, MoveRejected};
use super::win_detector::{check_win, generate_win_patterns};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    win_patterns: Vec<Vec<usize>>,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            win_patterns: generate_win_patterns(size),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn place_mark(&mut self, position: usize) -> Result<MoveOutcome, MoveRejected> {
        if self.status.is_terminal() {
            return Err(MoveRejected::GameOver);
        }

        match self.board.get(position) {
            None => {
                return Err(MoveRejected::OutOfBounds {
                    position,
                    cell_count: self.board.cells().len(),
                });
            }
            Some(Mark::Empty) => {}
            Some(_) => return Err(MoveRejected::CellOccupied { position }),
        }

        let mark = self.current_mark;
        self.board.set(position, mark);
        self.last_move = Some(position);

        self.refresh_status();

        if !self.status.is_terminal() {
            self.switch_turn();
        }

        Ok(MoveOutcome {
            position,
            mark,
            status: self.status.clone(),
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.clone(), self.current_mark)
    }

    /// Replaces board and player with a stored snapshot and re-derives the status.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.board = snapshot.board.clone();
        self.current_mark = snapshot.player;
        self.last_move = None;
        self.refresh_status();
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn refresh_status(&mut self) {
        self.status = if let Some(line) = check_win(&self.board, &self.win_patterns) {
            GameStatus::Won(line)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &position in moves {
            state.place_mark(position).unwrap();
        }
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut state = TicTacToeGameState::new(3);
        play(&mut state, &[0, 4, 1, 5, 2]);

        let GameStatus::Won(line) = state.status() else {
            panic!("expected a win, got {:?}", state.status());
        };
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.pattern, vec![0, 1, 2]);
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let mut state = TicTacToeGameState::new(3);
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), &GameStatus::Draw);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = TicTacToeGameState::new(3);
        play(&mut state, &[4]);
        let before = state.snapshot();

        assert_eq!(
            state.place_mark(4),
            Err(MoveRejected::CellOccupied { position: 4 })
        );
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut state = TicTacToeGameState::new(3);
        assert!(matches!(
            state.place_mark(9),
            Err(MoveRejected::OutOfBounds { position: 9, cell_count: 9 })
        ));
        assert_eq!(state.board().get_available_moves().len(), 9);
    }

    #[test]
    fn test_terminal_state_absorbs_moves() {
        let mut state = TicTacToeGameState::new(3);
        play(&mut state, &[0, 4, 1, 5, 2]);
        let before = state.snapshot();

        assert_eq!(state.place_mark(8), Err(MoveRejected::GameOver));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(4);
        let outcome = state.place_mark(0).unwrap();
        assert_eq!(outcome.mark, Mark::X);
        let outcome = state.place_mark(5).unwrap();
        assert_eq!(outcome.mark, Mark::O);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.last_move(), Some(5));
    }

    #[test]
    fn test_restore_reactivates_finished_game() {
        let mut state = TicTacToeGameState::new(3);
        let initial = state.snapshot();
        play(&mut state, &[0, 4, 1, 5, 2]);
        assert!(state.status().is_terminal());

        state.restore(&initial);
        assert_eq!(state.status(), &GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
    }
}

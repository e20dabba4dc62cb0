use super::types::{GameStatus, Mark};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress statuses are ignored.
    pub fn record_result(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won(line) => match line.mark {
                Mark::X => self.x_wins += 1,
                Mark::O => self.o_wins += 1,
                Mark::Empty => {}
            },
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A completed pattern: every index holds `mark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub pattern: Vec<usize>,
}

impl WinningLine {
    pub fn new(mark: Mark, pattern: Vec<usize>) -> Self {
        Self { mark, pattern }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    GameOver,
    OutOfBounds { position: usize, cell_count: usize },
    CellOccupied { position: usize },
    AwaitingAi,
}

impl fmt::Display for MoveRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejected::GameOver => write!(f, "Game is already over"),
            MoveRejected::OutOfBounds {
                position,
                cell_count,
            } => write!(f, "Position {} out of bounds (board has {} cells)", position, cell_count),
            MoveRejected::CellOccupied { position } => {
                write!(f, "Cell {} is already marked", position)
            }
            MoveRejected::AwaitingAi => write!(f, "Waiting for the AI to move"),
        }
    }
}

/// Outcome of a move that was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub position: usize,
    pub mark: Mark,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    MovePlaced { position: usize, mark: Mark },
    GameWon { mark: Mark },
    GameDrawn,
}

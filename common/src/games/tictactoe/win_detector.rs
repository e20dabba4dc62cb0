use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then the main and anti diagonals. `2 * size + 2` patterns.
pub fn generate_win_patterns(size: usize) -> Vec<Vec<usize>> {
    let mut patterns = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        patterns.push((0..size).map(|col| row * size + col).collect());
    }

    for col in 0..size {
        patterns.push((0..size).map(|row| row * size + col).collect());
    }

    patterns.push((0..size).map(|i| i * size + i).collect());
    patterns.push((0..size).map(|i| i * size + (size - i - 1)).collect());

    patterns
}

/// First pattern, in generator order, fully held by one mark.
pub fn check_win(board: &Board, patterns: &[Vec<usize>]) -> Option<WinningLine> {
    let cells = board.cells();
    for pattern in patterns {
        let Some(&first) = pattern.first() else {
            continue;
        };
        let mark = cells[first];
        if mark == Mark::Empty {
            continue;
        }
        if pattern.iter().all(|&index| cells[index] == mark) {
            return Some(WinningLine::new(mark, pattern.clone()));
        }
    }
    None
}

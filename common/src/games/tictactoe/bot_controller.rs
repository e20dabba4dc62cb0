use crate::games::SessionRng;
use super::board::Board;

/// Uniform pick among the empty cells. `None` on a full board.
pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.get_available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_random_move_picks_empty_cell() {
        let mut board = Board::new(3);
        for position in [0, 1, 2, 3, 5, 6, 7, 8] {
            board.set(position, Mark::X);
        }
        let mut rng = SessionRng::new(1);
        for _ in 0..10 {
            assert_eq!(calculate_random_move(&board, &mut rng), Some(4));
        }
    }

    #[test]
    fn test_random_move_on_full_board_is_none() {
        let mut board = Board::new(3);
        for position in 0..9 {
            board.set(position, Mark::O);
        }
        let mut rng = SessionRng::new(1);
        assert_eq!(calculate_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_move_covers_all_empty_cells() {
        let board = Board::new(3);
        let mut rng = SessionRng::new(99);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let position = calculate_random_move(&board, &mut rng).unwrap();
            seen[position] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }
}

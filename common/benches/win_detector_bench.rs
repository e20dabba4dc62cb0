use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    TicTacToeGameState, calculate_random_move, check_win, generate_win_patterns,
};

fn bench_generate_patterns(c: &mut Criterion) {
    c.bench_function("generate_win_patterns_7x7", |b| {
        b.iter(|| generate_win_patterns(black_box(7)))
    });
}

fn bench_check_win_mid_game(c: &mut Criterion) {
    let mut state = TicTacToeGameState::new(7);
    let mut rng = SessionRng::new(12345);
    for _ in 0..20 {
        let Some(position) = calculate_random_move(state.board(), &mut rng) else {
            break;
        };
        if state.place_mark(position).is_err() {
            break;
        }
    }
    let patterns = generate_win_patterns(7);

    c.bench_function("check_win_7x7_mid_game", |b| {
        b.iter(|| check_win(black_box(state.board()), black_box(&patterns)))
    });
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game_5x5", |b| {
        let mut rng = SessionRng::new(7);
        b.iter(|| {
            let mut state = TicTacToeGameState::new(5);
            while let Some(position) = calculate_random_move(state.board(), &mut rng) {
                if state.place_mark(position).is_err() {
                    break;
                }
            }
            state.status().clone()
        })
    });
}

criterion_group!(benches, bench_generate_patterns, bench_check_win_mid_game, bench_random_game);
criterion_main!(benches);

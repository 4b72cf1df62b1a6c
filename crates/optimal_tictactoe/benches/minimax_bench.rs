use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use optimal_tictactoe::{Board, apply_move, initial_state, minimax};
use std::hint::black_box;
use std::time::Duration;

fn bench_minimax_self_play() {
    let mut board = initial_state();
    while let Some(mv) = minimax(&board) {
        match apply_move(&board, mv) {
            Ok(next) => board = next,
            Err(_) => break,
        }
    }
}

fn bench_minimax_single_move_empty_board() {
    let board = initial_state();
    black_box(minimax(black_box(&board)));
}

fn bench_minimax_single_move_mid_game(board: &Board) {
    black_box(minimax(black_box(board)));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("self_play", |b| b.iter(bench_minimax_self_play));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    let mid_game: Board = match "XO./.X./..O".parse() {
        Ok(board) => board,
        Err(err) => panic!("bench board: {}", err),
    };
    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_minimax_single_move_mid_game(&mid_game))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

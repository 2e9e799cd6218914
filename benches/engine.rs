use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_merge::core::{transform, Board, Game, GameConfig, SimpleRng};
use tile_merge::types::Direction;

fn filled_board() -> Board {
    let mut board = Board::default();
    let mut rng = SimpleRng::new(12345);
    for level in [1, 1, 2, 2, 3, 1, 4, 2, 1, 3] {
        board.spawn(level, &mut rng).unwrap();
    }
    board
}

fn bench_line_transform(c: &mut Criterion) {
    let line = [Some(1), None, Some(1), Some(2)];

    c.bench_function("transform_line_4", |b| {
        b.iter(|| transform(black_box(&line), black_box(false), 11))
    });
}

fn bench_moves(c: &mut Criterion) {
    let board = filled_board();

    c.bench_function("move_all_directions", |b| {
        b.iter(|| {
            let mut board = board.clone();
            for dir in Direction::ALL {
                black_box(board.apply(dir));
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let board = filled_board();
    let mut rng = SimpleRng::new(1);

    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut board = board.clone();
            board.spawn(black_box(1), &mut rng).unwrap()
        })
    });
}

fn bench_play(c: &mut Criterion) {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    game.start().unwrap();
    let mut step = 0usize;

    c.bench_function("game_play", |b| {
        b.iter(|| {
            step += 1;
            if game.board().empty_count() == 0 {
                game.restart().unwrap();
            }
            game.play(Direction::ALL[step % 4]).unwrap()
        })
    });
}

criterion_group!(benches, bench_line_transform, bench_moves, bench_spawn, bench_play);
criterion_main!(benches);

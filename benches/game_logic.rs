//! Benchmarks for the hot paths of the turn loop: drop search, line
//! clearing, snapshot serialization and whole mock-driven turns.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use prompt_tetris::core::{clear::clear_lines, Board, Piece, PieceGenerator};
use prompt_tetris::{GameConfig, GameEngine, MockSource, PieceKind, Position};

fn bench_drop_search(c: &mut Criterion) {
    let board = Board::default();
    let piece = Piece::new(PieceKind::T, board.spawn_anchor());
    c.bench_function("drop_search_empty_board", |b| {
        b.iter(|| black_box(board.find_drop_position(black_box(&piece))))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut template = Board::default();
    for y in 16..20 {
        for x in 0..10 {
            template.set(x, y, Some(PieceKind::I));
        }
    }
    c.bench_function("clear_four_rows", |b| {
        b.iter_batched(
            || template.clone(),
            |mut board| black_box(clear_lines(&mut board)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_serialize(c: &mut Criterion) {
    let mut board = Board::default();
    for x in 0..10 {
        board.set(x, 19, Some(PieceKind::L));
    }
    let piece = Piece::new(PieceKind::S, board.spawn_anchor());
    c.bench_function("serialize_board_with_overlay", |b| {
        b.iter(|| black_box(board.serialize(Some(black_box(&piece)))))
    });
}

fn bench_generator(c: &mut Criterion) {
    c.bench_function("spawn_100_pieces", |b| {
        b.iter(|| {
            let mut generator = PieceGenerator::new(black_box(42));
            for _ in 0..100 {
                black_box(generator.spawn_next(Position::new(4, 0)));
            }
        })
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("mock_driven_turn", |b| {
        b.iter_batched(
            || {
                let mut engine = GameEngine::new(GameConfig::default());
                engine.start();
                (engine, MockSource::new(5))
            },
            |(mut engine, mut source)| black_box(engine.execute_turn(&mut source)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_drop_search,
    bench_line_clear,
    bench_serialize,
    bench_generator,
    bench_full_turn
);
criterion_main!(benches);

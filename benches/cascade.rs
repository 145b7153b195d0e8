use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use match3::config::GameConfig;
use match3::core::{Board, RandomTiles};
use match3::game::{deal, GemBoard};
use match3::types::{Gem, Position, RunReporting};

fn settled_board(seed: u32) -> GemBoard {
    deal(&GameConfig::default(), seed).unwrap()
}

/// First legal swap of neighbours in row-major order.
fn first_legal_move(board: &mut GemBoard) -> Option<(Position, Position)> {
    let cells: Vec<Position> = board.positions().collect();
    for pos in cells {
        for next in [Position::new(pos.row, pos.col + 1), Position::new(pos.row + 1, pos.col)] {
            if board.is_legal_move(pos, next) {
                return Some((pos, next));
            }
        }
    }
    None
}

fn bench_find_matches(c: &mut Criterion) {
    let board = Board::new(RandomTiles::new(Gem::ALL[..4].to_vec(), 7).unwrap(), 8, 8).unwrap();
    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| black_box(board.find_matches()))
    });

    let extending = Board::new(RandomTiles::new(Gem::ALL[..4].to_vec(), 7).unwrap(), 8, 8)
        .unwrap()
        .with_run_reporting(RunReporting::Extending);
    c.bench_function("find_matches_8x8_extending", |b| {
        b.iter(|| black_box(extending.find_matches()))
    });
}

fn bench_is_legal_move(c: &mut Criterion) {
    let mut board = settled_board(12345);
    c.bench_function("is_legal_move_scan_all", |b| {
        b.iter(|| black_box(first_legal_move(&mut board)))
    });
}

fn bench_move_cascade(c: &mut Criterion) {
    c.bench_function("move_tiles_cascade", |b| {
        b.iter_batched(
            || {
                let mut board = settled_board(12345);
                let swap = first_legal_move(&mut board);
                (board, swap)
            },
            |(mut board, swap)| {
                if let Some((first, second)) = swap {
                    black_box(board.move_tiles(first, second));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("deal_and_settle_8x8", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(settled_board(seed))
        })
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_is_legal_move,
    bench_move_cascade,
    bench_settle
);
criterion_main!(benches);

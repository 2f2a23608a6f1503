//! Criterion micro-benchmarks for puzzle moves and completion checks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hanoi_bench::classic_profile;
use hanoi_core::Puzzle;

fn bench_classic_solve(c: &mut Criterion) {
    let (puzzle, moves) = classic_profile(12).unwrap();
    c.bench_function("solve_12_disks", |b| {
        b.iter_batched(
            || puzzle.clone(),
            |mut p| {
                for &(src, dst) in &moves {
                    black_box(p.move_disk(src, dst));
                }
                p
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_rejected_move(c: &mut Criterion) {
    let mut puzzle = Puzzle::new(3, 12).unwrap();
    assert!(puzzle.move_disk(0, 1));
    c.bench_function("rejected_size_violation", |b| {
        b.iter(|| black_box(puzzle.try_move(black_box(0), black_box(1))));
    });
}

fn bench_completion(c: &mut Criterion) {
    let wide = Puzzle::new(64, 256).unwrap();
    c.bench_function("completion_64x256", |b| {
        b.iter(|| black_box(wide.completion()));
    });
}

criterion_group!(benches, bench_classic_solve, bench_rejected_move, bench_completion);
criterion_main!(benches);

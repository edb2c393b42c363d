//! Benchmarks for grid insertion, face extraction and folding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orikit_fold::{find_faces, fold_faces};
use orikit_pattern::{insert_edge, CreasePattern, EdgeAssignment, Point};

/// Unit square with `n - 1` vertical valleys and `n - 1` horizontal mountains.
fn grid(n: usize) -> CreasePattern {
    let mut cp = CreasePattern::unit_square();
    for i in 1..n {
        let t = i as f64 / n as f64;
        cp = insert_edge(&cp, Point::new(t, 0.0), Point::new(t, 1.0), EdgeAssignment::Valley);
        cp = insert_edge(&cp, Point::new(0.0, t), Point::new(1.0, t), EdgeAssignment::Mountain);
    }
    cp
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("grid", n), &n, |b, &n| {
            b.iter(|| grid(black_box(n)));
        });
    }
    group.finish();
}

fn bench_faces(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_faces");
    for n in [4, 8, 16] {
        let cp = grid(n);
        group.bench_with_input(BenchmarkId::new("grid", n), &cp, |b, cp| {
            b.iter(|| find_faces(black_box(cp)).unwrap());
        });
    }
    group.finish();
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_faces");
    for n in [4, 8, 16] {
        let cp = grid(n);
        let faces = find_faces(&cp).unwrap();
        group.bench_with_input(BenchmarkId::new("grid", n), &faces, |b, faces| {
            b.iter(|| fold_faces(black_box(faces), &cp).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_faces, bench_fold);
criterion_main!(benches);

//! Normalization and evaluation benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench normalize
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use nnf_rs::eval::Eval;
use nnf_rs::expr::Expr;
use nnf_rs::facts::FactSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate a deterministic random tree for reproducible benchmarks.
fn random_expr(rng: &mut ChaCha8Rng, depth: u32, num_vars: i32) -> Expr {
    if depth == 0 {
        return Expr::leaf(rng.random_range(1..=num_vars));
    }
    match rng.random_range(0..4) {
        0 => Expr::not(random_expr(rng, depth - 1, num_vars)),
        1 => Expr::and((0..2).map(|_| random_expr(rng, depth - 1, num_vars)).collect::<Vec<_>>()),
        2 => Expr::or((0..2).map(|_| random_expr(rng, depth - 1, num_vars)).collect::<Vec<_>>()),
        _ => Expr::leaf(rng.random_range(1..=num_vars)),
    }
}

// ============================================================================
// Benchmark: Normalize
// ============================================================================

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for depth in [4, 8, 12] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let expr = random_expr(&mut rng, depth, 16);
        group.throughput(Throughput::Elements(expr.size() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &expr, |b, expr| {
            b.iter_batched(|| expr.clone(), |e| e.normalize(), BatchSize::SmallInput)
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Eval (original vs normalized)
// ============================================================================

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let expr = random_expr(&mut rng, 12, 16);
    let nnf = expr.clone().normalize();
    let facts: Vec<FactSet> = (0..64)
        .map(|_| (1..=16).filter(|_| rng.random_bool(0.5)).collect())
        .collect();

    group.bench_function("original", |b| {
        b.iter(|| facts.iter().filter(|f| expr.eval(*f)).count())
    });
    group.bench_function("normalized", |b| {
        b.iter(|| facts.iter().filter(|f| nnf.eval(*f)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_eval);
criterion_main!(benches);

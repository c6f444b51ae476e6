//! Criterion benchmarks for the ranking pipeline.
//!
//! Uses synthetic patient rows to measure the filter + score + sort
//! pipeline at a few input sizes. Real inputs are tens of rows; the
//! larger sizes exist to show the sort dominates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use triage_rank::ranking::RankRunner;
use triage_rank::record::{Condition, PatientRow, Sickness};
use triage_rank::severity::SeverityTable;

fn synthetic_rows(n: usize, rng: &mut impl Rng) -> Vec<PatientRow> {
    (0..n)
        .map(|i| {
            // Roughly one row in ten is an unnamed leftover from the form.
            let name = if rng.random_range(0..10) == 0 {
                String::new()
            } else {
                format!("patient-{i}")
            };
            PatientRow {
                name,
                age: rng.random_range(0..=120),
                condition: *Condition::ALL.choose(rng).unwrap(),
                sickness: *Sickness::ALL.choose(rng).unwrap(),
            }
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let table = SeverityTable::default();
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("rank");
    for size in [10, 100, 1000] {
        let rows = synthetic_rows(size, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| RankRunner::run(black_box(rows), black_box(&table)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);

// Comparing count against filter().len(), and sequential against parallel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sequence_queries::parallel::{par_count, par_filter};
use sequence_queries::query::{count, filter};
use sequence_queries::Person;

fn roster(size: u32) -> Vec<Person> {
    (0..size)
        .map(|i| Person::new(format!("person-{}", i), (i * 37) % 90))
        .collect()
}

fn benchmark_count_implementations(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_implementations");
    let club27 = |p: &Person| p.age <= 27;

    for size in [1_000u32, 100_000] {
        let people = roster(size);

        group.bench_with_input(BenchmarkId::new("count", size), &people, |b, people| {
            b.iter(|| count(black_box(people), club27))
        });

        group.bench_with_input(BenchmarkId::new("filter_len", size), &people, |b, people| {
            b.iter(|| filter(black_box(people), club27).len())
        });

        group.bench_with_input(BenchmarkId::new("par_count", size), &people, |b, people| {
            b.iter(|| par_count(black_box(people), club27))
        });
    }

    group.finish();
}

fn benchmark_filter_parallelism(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_parallelism");
    let people = roster(100_000);
    let adult = |p: &Person| p.age >= 18;

    group.bench_function("sequential", |b| b.iter(|| filter(black_box(&people), adult)));
    group.bench_function("parallel", |b| b.iter(|| par_filter(black_box(&people), adult)));

    group.finish();
}

criterion_group!(benches, benchmark_count_implementations, benchmark_filter_parallelism);
criterion_main!(benches);

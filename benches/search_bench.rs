use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::hint::black_box;
use vcg_allocation::{
    AllocationSearch, NoopSink, Partition, SeededTieBreak, SetPartitions, ValueMatrix,
    effective::derive_effective_values, evaluate_partition,
};

/// Generate a value matrix with a spread of values and a few deliberate ties
fn generate_values(n_bidders: usize, n_items: usize) -> ValueMatrix {
    let rows = (0..n_bidders)
        .map(|b| {
            (0..n_items)
                .map(|i| Decimal::from(((b * 7 + i * 13) % 17) as u32))
                .collect()
        })
        .collect();
    ValueMatrix::from_rows(rows).unwrap()
}

/// Benchmark the exhaustive search over every partition of the items
fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation_search");

    // Bell numbers grow fast; fewer samples for the larger item sets
    let configs = vec![(4, 100), (6, 50), (8, 10)];

    for (n_items, sample_size) in configs {
        group.sample_size(sample_size);
        let values = generate_values(8, n_items);

        group.bench_with_input(BenchmarkId::new("items", n_items), &n_items, |b, &n| {
            b.iter(|| {
                let mut search = AllocationSearch::new(black_box(values.clone()));
                search
                    .run(SetPartitions::new(n).unwrap(), &mut NoopSink)
                    .map(|best| best.score())
            })
        });
    }

    group.finish();
}

/// Benchmark individual components
fn benchmark_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation_components");
    let values = generate_values(16, 8);
    let partition = Partition::from(vec![vec![0, 3, 5], vec![1, 2], vec![4], vec![6, 7]]);
    let tie_break = SeededTieBreak::default();

    group.bench_function("derive_effective_values", |b| {
        b.iter(|| derive_effective_values(black_box(&values), black_box(&partition)))
    });

    group.bench_function("evaluate_partition", |b| {
        b.iter(|| evaluate_partition(black_box(&values), black_box(&partition), &tie_break))
    });

    group.bench_function("enumerate_partitions", |b| {
        b.iter(|| SetPartitions::new(black_box(8)).unwrap().count())
    });

    group.finish();
}

criterion_group!(benches, benchmark_search, benchmark_components);
criterion_main!(benches);

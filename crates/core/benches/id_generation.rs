use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use groundwork_core::SequentialIdGenerator;
use uuid::Uuid;

/// Sequential minting pays for one short critical section per id; this
/// bench keeps that cost visible next to plain random generation.
fn bench_id_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("id_generation");
    group.throughput(Throughput::Elements(1));

    let generator = SequentialIdGenerator::new();
    group.bench_function("sequential_comb", |b| {
        b.iter(|| black_box(generator.new_id()));
    });

    group.bench_function("random_v4", |b| {
        b.iter(|| black_box(Uuid::new_v4()));
    });

    group.finish();
}

criterion_group!(benches, bench_id_generation);
criterion_main!(benches);

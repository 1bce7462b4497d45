use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use corral::prelude::*;

use rand::prelude::*;
use rand_distr::Pareto;
use rayon::prelude::*;
use std::sync::Arc;

const BATCH_SIZE: usize = 50;
const SET_SIZE: u64 = 10_000;

fn make_set() -> Arc<SyncSet<u64>> {
    Arc::new((0..SET_SIZE).collect())
}

fn pure_snapshots(set: Arc<SyncSet<u64>>) {
    (0..BATCH_SIZE).into_par_iter().for_each(|_| {
        let _sum: u64 = set.snapshot().sum();
    });
}

fn bench_snapshot_pure_reads(c: &mut Criterion) {
    let set = make_set();

    let mut group = c.benchmark_group("snapshot_iter_read_throughput");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));
    group.bench_function("pure snapshots", move |b| {
        b.iter_batched(
            || set.clone(),
            pure_snapshots,
            BatchSize::SmallInput,
        )
    });
}

fn rw_pareto(set: Arc<SyncSet<u64>>, dist: f64) {
    (0..BATCH_SIZE).into_par_iter().for_each(|i| {
        if dist < 0.8_f64 {
            // Abandoned after the first element.
            let _ = set.snapshot().next();
        } else {
            set.add(SET_SIZE + i as u64);
        }
    });
}

fn bench_snapshot_rw_pareto(c: &mut Criterion) {
    let set = make_set();

    let mut group = c.benchmark_group("snapshot_iter_rw_pareto_throughput");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));
    group.bench_function("rw_pareto", move |b| {
        b.iter_batched(
            || {
                let dist: f64 =
                    1. / thread_rng().sample(Pareto::new(1., 5.0_f64.log(4.0_f64)).unwrap());
                (set.clone(), dist)
            },
            |vars| rw_pareto(vars.0, vars.1),
            BatchSize::SmallInput,
        )
    });
}

criterion_group! {
    name = snapshot_iter_benches;
    config = Criterion::default();
    targets = bench_snapshot_pure_reads, bench_snapshot_rw_pareto
}
criterion_main!(snapshot_iter_benches);

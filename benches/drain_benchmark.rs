use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use crossbeam_channel::bounded;

use tickpool::{FixedThreadPool, ThreadPool};
use tickpool::config::with_worker_count;

fn drain(workers: usize, items: usize) {
    let (work, jobs) = bounded::<usize>(items);
    let pool = FixedThreadPool::with_options(move |_: usize| {
        for job in jobs.iter() {
            criterion::black_box(job);
        }
    }, vec![with_worker_count(workers)]).unwrap();
    let done = pool.start().unwrap();
    for job in 0..items {
        work.send(job).unwrap();
    }
    drop(work);
    done.wait().unwrap();
}

fn drain_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_1000");
    for workers in [1, 4, 15].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(workers), workers, |b, &workers| {
            b.iter(|| drain(workers, 1000))
        });
    }
    group.finish();
}

criterion_group!(benches, drain_benchmark);
criterion_main!(benches);

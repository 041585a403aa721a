use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use priority_deque::{Options, PriorityDeque};
use rand::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut deque: PriorityDeque<i32> = PriorityDeque::with_limit(10);
    c.bench_function("push", |b| {
        b.iter(|| {
            let mut rng = rand::thread_rng();
            let i: i32 = rng.gen::<i32>() % 1000;
            deque.push(i);
        })
    });

    let mut rng = rand::thread_rng();
    let input: Vec<i32> = (0..10_000).map(|_| rng.gen()).collect();
    c.bench_function("bulk_load", |b| {
        b.iter_batched(
            || input.clone(),
            |items| Options::new().limit(100).items(items).build(),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("append", |b| {
        b.iter_batched(
            || input.clone(),
            |items| {
                let mut deque = PriorityDeque::with_limit(100);
                deque.append(items);
                deque
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

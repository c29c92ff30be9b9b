use blocked_deque::BlockDeque;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs BlockDeque (PushBack 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("BlockDeque<i32, 10>", |b| {
            b.iter(|| {
                let mut d: BlockDeque<i32, 10> = BlockDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs BlockDeque (Get 1024)");
        let mut d_std = VecDeque::new();
        let mut d_block: BlockDeque<i32, 10> = BlockDeque::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            d_block.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("BlockDeque<i32, 10>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_block.get(black_box(i)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs BlockDeque (PushFront 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("BlockDeque<i32, 10>", |b| {
            b.iter(|| {
                let mut d: BlockDeque<i32, 10> = BlockDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);

//! Benchmarks for ffind
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_queue_operations(c: &mut Criterion) {
    use ffind::walker::WorkQueue;

    c.bench_function("queue_push_pop", |b| {
        let queue = WorkQueue::new();

        b.iter(|| {
            queue.push("/test/path".into());
            let dir = queue.pop().unwrap();
            queue.task_done();
            black_box(dir);
        })
    });
}

fn benchmark_matcher(c: &mut Criterion) {
    use ffind::matcher::contains_ignore_case;

    c.bench_function("substring_case_insensitive", |b| {
        let haystack = "SomeModeratelyLongFileName.Extension";

        b.iter(|| {
            let hit = contains_ignore_case(black_box(haystack), black_box("filename"));
            let miss = contains_ignore_case(black_box(haystack), black_box("zzz"));
            black_box((hit, miss));
        })
    });
}

fn benchmark_path_join(c: &mut Criterion) {
    use ffind::paths::join_child;

    c.bench_function("join_child", |b| {
        b.iter(|| {
            let path = join_child(black_box("/usr/share/doc"), black_box("README.md"));
            black_box(path);
        })
    });
}

criterion_group!(
    benches,
    benchmark_queue_operations,
    benchmark_matcher,
    benchmark_path_join
);
criterion_main!(benches);

//! Template rendering and repetition writer benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sinkfmt_bench::{TEMPLATES, template_args};
use sinkfmt_core::printf::{compile, print_segments};
use sinkfmt_core::writer::{write_byte_n_times, write_bytes_n_times};
use sinkfmt_core::{ArgPolicy, print_with};

fn bench_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");
    for (i, &(name, template)) in TEMPLATES.iter().enumerate() {
        let args = template_args(i);
        group.bench_with_input(BenchmarkId::new("scan_each_time", name), &template, |b, t| {
            let mut out = Vec::with_capacity(256);
            b.iter(|| {
                out.clear();
                let r = print_with(&mut out, black_box(t), &args, ArgPolicy::Exact);
                black_box(r.is_ok());
            });
        });

        let Ok(segments) = compile(template) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("precompiled", name), &segments, |b, s| {
            let mut out = Vec::with_capacity(256);
            b.iter(|| {
                out.clear();
                let r = print_segments(&mut out, black_box(s), &args, ArgPolicy::Exact);
                black_box(r.is_ok());
            });
        });
    }
    group.finish();
}

fn bench_repetition(c: &mut Criterion) {
    let counts: &[usize] = &[16, 256, 4096, 65536];
    let mut group = c.benchmark_group("repeat");

    for &n in counts {
        group.throughput(Throughput::Bytes(n as u64));
        group.bench_with_input(BenchmarkId::new("byte_n_times", n), &n, |b, &n| {
            let mut out = Vec::with_capacity(n);
            b.iter(|| {
                out.clear();
                let _ = write_byte_n_times(&mut out, b' ', black_box(n));
                black_box(out.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("bytes_n_times", n), &n, |b, &n| {
            let mut out = Vec::with_capacity(n);
            b.iter(|| {
                out.clear();
                let _ = write_bytes_n_times(&mut out, b"ab", black_box(n / 2));
                black_box(out.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_print, bench_repetition);
criterion_main!(benches);

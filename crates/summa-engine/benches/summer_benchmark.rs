// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use summa_core::math::span::InclusiveSpan;
use summa_engine::monitor::no_op::NoOperationMonitor;
use summa_engine::summer::{RangeSummerBuilder, sum};

/// Measures the bare accumulation loop across span widths.
fn bench_free_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_sum");
    for terms in [1_000i64, 100_000, 10_000_000] {
        group.throughput(Throughput::Elements(terms as u64));
        group.bench_with_input(BenchmarkId::from_parameter(terms), &terms, |b, &terms| {
            b.iter(|| sum(black_box(1i64), black_box(terms)).unwrap());
        });
    }
    group.finish();
}

/// Measures the engine loop with a no-op monitor attached, to expose the
/// dispatch cost of the observation seam.
fn bench_summer_with_noop_monitor(c: &mut Criterion) {
    let mut group = c.benchmark_group("summer_noop_monitor");
    for terms in [1_000i64, 100_000, 10_000_000] {
        group.throughput(Throughput::Elements(terms as u64));
        group.bench_with_input(BenchmarkId::from_parameter(terms), &terms, |b, &terms| {
            let mut summer = RangeSummerBuilder::<i64>::new()
                .with_monitor(NoOperationMonitor::new())
                .build();
            b.iter(|| {
                summer
                    .sum(black_box(InclusiveSpan::new(1i64, terms)))
                    .into_result()
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_free_sum, bench_summer_with_noop_monitor);
criterion_main!(benches);

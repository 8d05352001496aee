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
use limes_core::algorithm::coalesce;
use limes_core::math::interval::Interval;
use limes_core::parse::{IntervalParser, ParseInterval};
use std::hint::black_box;

const EXPRESSIONS: &[(&str, &str)] = &[
    ("closed", "[2,5]"),
    ("half_open", "[-1024, 4096)"),
    ("dotted", "12..480"),
    ("unbounded", "(, 5]"),
    ("padded", "   ]  -7 ,   7  [   "),
    ("malformed", "not an interval"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_interval");
    let parser = IntervalParser::new();

    for &(name, expr) in EXPRESSIONS {
        group.throughput(Throughput::Bytes(expr.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), expr, |b, expr| {
            b.iter(|| parser.parse::<i64>(black_box(expr)))
        });
    }
    group.finish();
}

fn bench_coalesce(c: &mut Criterion) {
    let mut group = c.benchmark_group("coalesce");

    for &n in &[16usize, 256, 4096] {
        // Every third interval touches its successor.
        let intervals: Vec<Interval<i64>> = (0..n as i64)
            .rev()
            .map(|i| {
                let start = i * 10;
                if i % 3 == 0 {
                    Interval::closed_open(start, start + 10)
                } else {
                    Interval::closed(start, start + 5)
                }
            })
            .collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &intervals, |b, intervals| {
            b.iter(|| coalesce(black_box(intervals.clone())))
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let intervals: Vec<Interval<i64>> = (0..64)
        .map(|i| Interval::open_closed(-i * 7, i * 13))
        .collect();

    c.bench_function("display_then_parse", |b| {
        b.iter(|| {
            for iv in &intervals {
                let text = iv.to_string();
                let parsed = text.parse_interval::<i64>();
                black_box(parsed).ok();
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_coalesce, bench_round_trip);
criterion_main!(benches);

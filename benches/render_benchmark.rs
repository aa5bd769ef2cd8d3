// SPDX-License-Identifier: MIT OR Apache-2.0
// Benchmarks: missing_docs - criterion_group! macro generates undocumentable code
#![allow(missing_docs)]
// Benchmarks: clippy lints relaxed for benchmark code (not production)
#![allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Benchmark for SVG chart and Markdown table rendering

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trialplot::{
    Chart, ChartConfig, FoldOptions, Summary, TableConfig, aggregate_str, render_table,
};

fn summary(points: usize, metrics: usize) -> Summary {
    let mut csv = String::from("N,R,M");
    for m in 0..metrics {
        csv.push_str(&format!(",metric_{m}"));
    }
    csv.push('\n');
    for i in 0..points {
        for t in 0..3 {
            csv.push_str(&format!("{},10,100", 1 << (i % 20)));
            for m in 0..metrics {
                csv.push_str(&format!(",{}", 0.01 * (m + 1) as f64 + 0.001 * t as f64));
            }
            csv.push('\n');
        }
    }
    Summary::fold(&aggregate_str(&csv).unwrap().buckets, FoldOptions::default())
}

fn bench_render(c: &mut Criterion) {
    let summary = summary(20, 4);
    let config = ChartConfig::default();
    let table = TableConfig::default();

    let mut group = c.benchmark_group("render");
    group.bench_function("chart_svg", |b| {
        b.iter(|| {
            let svg = Chart::new(&config, black_box(&summary)).render().unwrap();
            black_box(svg);
        });
    });
    group.bench_function("markdown_table", |b| {
        b.iter(|| {
            let text = render_table(black_box(&summary), &table);
            black_box(text);
        });
    });
    drop(group);
}

criterion_group!(render_benches, bench_render);
criterion_main!(render_benches);

//! Criterion benchmarks for rust_console_handler

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_console_handler::prelude::*;
use std::sync::Arc;

fn sink_handler(opts: Option<HandlerOptions>) -> ConsoleHandler {
    ConsoleHandler::with_writer(std::io::sink(), opts, [])
}

// ============================================================================
// Console Handler Benchmarks
// ============================================================================

fn bench_console_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("console_handle");
    group.throughput(Throughput::Elements(1));

    let handler = sink_handler(None);

    group.bench_function("no_attrs", |b| {
        let record = Record::new(LogLevel::INFO, "starting");
        b.iter(|| handler.handle(black_box(&record)))
    });

    group.bench_function("flat_attrs", |b| {
        let record = Record::new(LogLevel::INFO, "request").with_attrs(vec![
            Attr::new("status", 200),
            Attr::new("path", "/x"),
            Attr::new("latency", std::time::Duration::from_millis(12)),
        ]);
        b.iter(|| handler.handle(black_box(&record)))
    });

    group.bench_function("nested_attrs", |b| {
        let record = Record::new(LogLevel::WARN, "slow query").with_attrs(vec![Attr::group(
            "db",
            vec![
                Attr::new("table", "users"),
                Attr::new("rows", 1024),
                Attr::group("conn", vec![Attr::new("pool", 4), Attr::new("idle", false)]),
            ],
        )]);
        b.iter(|| handler.handle(black_box(&record)))
    });

    let escaping = ConsoleHandler::with_writer(std::io::sink(), None, [with_escape_html(true)]);
    group.bench_function("escape_html", |b| {
        let record = Record::new(LogLevel::INFO, "render")
            .with_attrs(vec![Attr::new("body", "<p>a & b</p>")]);
        b.iter(|| escaping.handle(black_box(&record)))
    });

    group.finish();
}

// ============================================================================
// Handler Family Benchmarks
// ============================================================================

fn bench_derived_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_handlers");
    group.throughput(Throughput::Elements(1));

    let root = sink_handler(None);

    group.bench_function("with_attrs", |b| {
        b.iter(|| root.with_attrs(black_box(vec![Attr::new("service", "api")])))
    });

    let derived = root
        .with_attrs(vec![Attr::new("service", "api")])
        .with_group("req");
    group.bench_function("handle_derived", |b| {
        let record = Record::new(LogLevel::INFO, "handled").with_attrs(vec![Attr::new("status", 200)]);
        b.iter(|| derived.handle(black_box(&record)))
    });

    group.finish();
}

fn bench_concurrent_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_family");

    let handler: Arc<dyn Handler> = Arc::new(sink_handler(None));

    group.bench_function("4_threads_x_100", |b| {
        b.iter(|| {
            let workers: Vec<_> = (0..4)
                .map(|t| {
                    let handler = Arc::clone(&handler);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            let record = Record::new(LogLevel::INFO, "tick").with_attrs(vec![
                                Attr::new("thread", t),
                                Attr::new("iter", i),
                            ]);
                            let _ = handler.handle(&record);
                        }
                    })
                })
                .collect();
            for worker in workers {
                let _ = worker.join();
            }
        })
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");

    let logger = Logger::new(sink_handler(Some(
        HandlerOptions::new().with_level(LogLevel::WARN),
    )));

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("hidden"), Vec::new()))
    });

    group.bench_function("passed_error", |b| {
        b.iter(|| logger.error(black_box("shown"), vec![Attr::new("code", 500)]))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_console_handle,
    bench_derived_handlers,
    bench_concurrent_family,
    bench_level_filtering,
);

criterion_main!(benches);

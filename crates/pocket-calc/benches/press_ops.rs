//! Press Operations Benchmarks
//!
//! Benchmarks for token decoding, state machine dispatch and formatting.
//!
//! Run with: `cargo bench --bench press_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pocket_calc::prelude::*;

fn bench_token_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_decoding");

    let tokens = vec![
        ("digit", "7"),
        ("decimal", "."),
        ("operator", "*"),
        ("equals", "="),
        ("toggle_sign", "+/-"),
        ("backspace", "del"),
        ("unknown", "sqrt"),
    ];

    for (name, token) in tokens {
        group.bench_with_input(BenchmarkId::from_parameter(name), &token, |bench, tok| {
            bench.iter(|| {
                let command = Command::parse_token(black_box(tok));
                black_box(command).ok();
            });
        });
    }

    group.finish();
}

fn bench_press_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("press_sequences");

    let sequences: Vec<(&str, Vec<&str>)> = vec![
        ("entry", vec!["1", "2", "3", ".", "4", "5"]),
        ("single_op", vec!["7", "+", "3", "="]),
        ("chained", vec!["5", "+", "3", "-", "2", "*", "4", "/", "2", "="]),
        ("percent", vec!["5", "0", "+", "1", "0", "%", "="]),
        ("error", vec!["1", "/", "0", "=", "4"]),
    ];

    for (name, tokens) in sequences {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &tokens,
            |bench, tokens| {
                bench.iter(|| {
                    let mut calc = Calculator::new();
                    let snapshot = calc.press_all(black_box(tokens)).unwrap();
                    black_box(snapshot);
                });
            },
        );
    }

    group.finish();
}

fn bench_long_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_chain");

    for length in [10usize, 100, 1000] {
        let tokens: Vec<&str> = (0..length)
            .flat_map(|i| [if i % 2 == 0 { "+" } else { "*" }, "1"])
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(length), &tokens, |bench, tokens| {
            bench.iter(|| {
                let mut calc = Calculator::new();
                for token in tokens {
                    calc.press(black_box(token)).unwrap();
                }
                black_box(calc.display());
            });
        });
    }

    group.finish();
}

fn bench_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    let values = vec![
        ("integer", 42.0),
        ("fraction", 0.1 + 0.2),
        ("negative", -1234.5678),
        ("large", 1e21),
        ("small", 1.5e-7),
    ];

    for (name, value) in values {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |bench, v| {
            bench.iter(|| black_box(format_number(black_box(*v), 12)));
        });
    }

    group.finish();
}

fn bench_web_page(c: &mut Criterion) {
    c.bench_function("web_page_click_sequence", |bench| {
        bench.iter(|| {
            let mut page = WebCalculator::new();
            for id in ["btn-7", "btn-plus", "btn-3", "btn-equals"] {
                black_box(page.click(id).unwrap());
            }
            black_box(page.display_text().map(str::to_string));
        });
    });
}

criterion_group!(
    benches,
    bench_token_decoding,
    bench_press_sequences,
    bench_long_chain,
    bench_format_number,
    bench_web_page
);
criterion_main!(benches);

//! Benchmarks for diagram lexing and markup rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flowpad_core::LineIndex;
use flowpad_syntax::{lex, lex_line, render, Palette};

/// Generates a flowchart with `lines` edges.
fn generate_diagram(lines: usize) -> String {
    let mut text = String::from("graph TD\n");
    for i in 0..lines {
        match i % 4 {
            0 => text.push_str(&format!("    N{i}[Step {i}] --> N{}[Step {}]\n", i + 1, i + 1)),
            1 => text.push_str(&format!("    N{i}(Check<br/>{i}) --> A\n")),
            2 => text.push_str(&format!("    style N{i} fill:#ff{:04x}\n", i % 0xffff)),
            _ => text.push_str("    subgraph detail --> B\n"),
        }
    }
    text
}

/// Benchmarks lexing whole documents.
fn bench_lex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");

    for size in [100, 1000, 10000].iter() {
        let text = generate_diagram(*size);

        group.bench_with_input(BenchmarkId::new("document", size), &text, |b, text| {
            b.iter(|| black_box(lex(black_box(text))))
        });
    }

    group.bench_function("single_line", |b| {
        let line = "    A[Start] --> B(Decide<br/>now) --> C[#61afef]";
        b.iter(|| black_box(lex_line(black_box(line))))
    });

    group.finish();
}

/// Benchmarks markup rendering.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let palette = Palette::default();

    for size in [100, 1000, 10000].iter() {
        let text = generate_diagram(*size);

        group.bench_with_input(BenchmarkId::new("document", size), &text, |b, text| {
            b.iter(|| black_box(render(black_box(text), &palette)))
        });
    }

    group.finish();
}

/// Benchmarks the line index refresh done on every edit.
fn bench_line_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_index");
    let text = generate_diagram(10000);

    group.bench_function("refresh_changed", |b| {
        let edited = format!("{text}    Z --> Y\n");
        b.iter_with_setup(
            || LineIndex::new(&text),
            |mut index| {
                index.refresh(black_box(&edited));
                black_box(index)
            },
        )
    });

    group.bench_function("refresh_unchanged", |b| {
        let mut index = LineIndex::new(&text);
        b.iter(|| black_box(index.refresh(black_box(&text))))
    });

    group.finish();
}

criterion_group!(benches, bench_lex, bench_render, bench_line_index);
criterion_main!(benches);

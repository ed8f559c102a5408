//! Benchmarks for proposal rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proposalforge::render::{to_html, to_text};
use proposalforge::{
    build_service_text, sample_proposal, MarkdownRenderer, ProposalSection, RenderOptions,
    Selection, ServiceCatalog,
};

/// Concatenates every sample section, repeated `times` times.
fn sample_markdown(times: usize) -> String {
    let proposal = sample_proposal();
    let body: Vec<&str> = ProposalSection::ALL
        .into_iter()
        .filter_map(|s| proposal.section(s))
        .collect();
    vec![body.join("\n\n"); times].join("\n\n")
}

fn bench_line_rendering(c: &mut Criterion) {
    let renderer = MarkdownRenderer::new();
    let mut group = c.benchmark_group("line_rendering");

    for times in [1, 10, 50] {
        let markdown = sample_markdown(times);
        group.bench_function(format!("{}x_sample", times), |b| {
            b.iter(|| renderer.render(black_box(&markdown)))
        });
    }

    group.finish();
}

fn bench_output_formats(c: &mut Criterion) {
    let records = MarkdownRenderer::new().render(&sample_markdown(10));
    let options = RenderOptions::default();

    c.bench_function("to_text", |b| {
        b.iter(|| to_text(black_box(&records), &options))
    });
    c.bench_function("to_html", |b| {
        b.iter(|| to_html(black_box(&records), &options))
    });
}

fn bench_service_text(c: &mut Criterion) {
    let catalog = ServiceCatalog::builtin();
    let selection = Selection::select_all(&catalog);

    c.bench_function("build_service_text", |b| {
        b.iter(|| build_service_text(black_box(&catalog), black_box(&selection)))
    });
}

fn bench_renderer_creation(c: &mut Criterion) {
    c.bench_function("renderer_new", |b| b.iter(MarkdownRenderer::new));
}

criterion_group!(
    benches,
    bench_line_rendering,
    bench_output_formats,
    bench_service_text,
    bench_renderer_creation
);
criterion_main!(benches);

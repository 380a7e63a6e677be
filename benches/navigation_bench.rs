//! Benchmark for `Maybe` navigation over JSON documents.
//!
//! Compares `prop` chains, `props`, `path` and a hand-written `Option` walk
//! over documents of increasing depth.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use maybe_baby::{Maybe, keys};
use serde_json::{Value, json};
use std::hint::black_box;

fn nested_document(depth: usize) -> (Value, Vec<String>) {
    let segments: Vec<String> = (0..depth).map(|level| format!("layer{level}")).collect();
    let document = segments
        .iter()
        .rev()
        .fold(json!(["foo", "bar"]), |child, segment| json!({ segment.as_str(): child }));
    (document, segments)
}

// =============================================================================
// Shallow Access
// =============================================================================

fn benchmark_shallow(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("shallow_access");
    let document = json!({ "layer1": { "layer2": { "layer3": ["foo", "bar"] } } });

    group.bench_function("prop_chain", |bencher| {
        bencher.iter(|| {
            let value = Maybe::of(black_box(&document))
                .prop("layer1")
                .prop("layer2")
                .prop("layer3")
                .prop(1);
            black_box(value)
        });
    });

    group.bench_function("props", |bencher| {
        bencher.iter(|| {
            let value =
                Maybe::of(black_box(&document)).props(keys!["layer1", "layer2", "layer3", 1]);
            black_box(value)
        });
    });

    group.bench_function("path", |bencher| {
        bencher.iter(|| {
            let value = Maybe::of(black_box(&document)).path("layer1.layer2.layer3.1");
            black_box(value)
        });
    });

    // Baseline: plain Option combinators
    group.bench_function("option_baseline", |bencher| {
        bencher.iter(|| {
            let value = black_box(&document)
                .get("layer1")
                .and_then(|layer| layer.get("layer2"))
                .and_then(|layer| layer.get("layer3"))
                .and_then(|layer| layer.get(1));
            black_box(value)
        });
    });

    group.finish();
}

// =============================================================================
// Depth Scaling
// =============================================================================

fn benchmark_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("depth_scaling");

    for depth in [4, 16, 64] {
        let (document, segments) = nested_document(depth);
        let path = segments.join(".");

        group.bench_with_input(BenchmarkId::new("path", depth), &path, |bencher, path| {
            bencher.iter(|| black_box(Maybe::of(&document).path(path.as_str())));
        });

        group.bench_with_input(
            BenchmarkId::new("props", depth),
            &segments,
            |bencher, segments| {
                bencher.iter(|| black_box(Maybe::of(&document).props(segments)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Missing Paths
// =============================================================================

fn benchmark_missing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("missing_path");
    let (document, _) = nested_document(16);

    // First segment misses; the remaining steps run on Nothing
    group.bench_function("early_miss_with_default", |bencher| {
        let fallback = json!("N/A");
        bencher.iter(|| {
            let value = Maybe::of(&document)
                .path("missing.layer1.layer2.layer3")
                .or_else(&fallback);
            black_box(value)
        });
    });

    group.bench_function("of_fn_direct_access", |bencher| {
        bencher.iter(|| {
            let value = Maybe::of_fn(|| document.get("layer0")?.get("missing")?.get(0));
            black_box(value)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_shallow,
    benchmark_depth,
    benchmark_missing
);
criterion_main!(benches);

//! Criterion benchmarks for the request-building path.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks cover the work done before a request leaves the process:
//! catalogue assembly, parameter filtering, path interpolation and query encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Map, Value};

use launchdarkly_blocks::categories::{all_descriptors, flags};
use launchdarkly_blocks::client::encode_query;
use launchdarkly_blocks::core::endpoint::EndpointDescriptor;
use launchdarkly_blocks::core::parameter::filter_defined_params;
use launchdarkly_blocks::core::registry::BlockRegistry;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn descriptor(id: &str) -> EndpointDescriptor {
    flags::descriptors()
        .into_iter()
        .find(|d| d.id == id)
        .unwrap()
}

fn inputs(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

fn bench_catalogue_registration(c: &mut Criterion) {
    c.bench_function("catalogue_registration", |b| {
        b.iter(|| black_box(BlockRegistry::with_catalogue().unwrap().count()));
    });
}

fn bench_search(c: &mut Criterion) {
    let registry = BlockRegistry::with_catalogue().unwrap();
    c.bench_function("search_blocks", |b| {
        b.iter(|| black_box(registry.search_blocks(black_box("environment")).len()));
    });
}

fn bench_descriptor_validation(c: &mut Criterion) {
    let descriptors = all_descriptors();
    c.bench_function("validate_all_descriptors", |b| {
        b.iter(|| {
            for d in &descriptors {
                black_box(d.validate().is_ok());
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Request preparation
// ---------------------------------------------------------------------------

fn bench_filter_defined_params(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_defined_params");

    for count in [4, 16, 64] {
        let entries: Vec<(String, Option<Value>)> = (0..count)
            .map(|i| {
                let value = if i % 3 == 0 { None } else { Some(json!(i)) };
                (format!("field{}", i), value)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, e| {
            b.iter(|| black_box(filter_defined_params(e.clone()).len()));
        });
    }
    group.finish();
}

fn bench_prepare(c: &mut Criterion) {
    let get = descriptor("get_feature_flag");
    let get_inputs = inputs(json!({
        "projectKey": "default",
        "featureFlagKey": "new/checkout flow",
        "env": ["production", "staging"],
        "summary": true
    }));

    let patch = descriptor("patch_feature_flag");
    let patch_inputs = inputs(json!({
        "projectKey": "default",
        "featureFlagKey": "dark-mode",
        "patch": [{"op": "replace", "path": "/description", "value": "updated"}],
        "comment": "bench"
    }));

    let mut group = c.benchmark_group("prepare");
    group.bench_function("get_feature_flag", |b| {
        b.iter(|| black_box(get.prepare(black_box(&get_inputs)).unwrap()));
    });
    group.bench_function("patch_feature_flag", |b| {
        b.iter(|| black_box(patch.prepare(black_box(&patch_inputs)).unwrap()));
    });
    group.finish();
}

fn bench_encode_query(c: &mut Criterion) {
    let query = vec![
        ("env".to_string(), json!(["production", "staging", "test"])),
        ("limit".to_string(), json!(20)),
        ("filter".to_string(), json!("query:dark-mode,tags:beta")),
        ("archived".to_string(), json!(null)),
    ];
    c.bench_function("encode_query", |b| {
        b.iter(|| black_box(encode_query(black_box(&query)).len()));
    });
}

criterion_group!(
    catalogue_benches,
    bench_catalogue_registration,
    bench_search,
    bench_descriptor_validation,
);

criterion_group!(
    request_benches,
    bench_filter_defined_params,
    bench_prepare,
    bench_encode_query,
);

criterion_main!(catalogue_benches, request_benches);

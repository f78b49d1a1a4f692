//! Benchmarks for the JSON extraction chain.
//!
//! Measures the three extraction stages separately plus the worst case where
//! every stage runs and fails. Extraction sits on the hot path of the grammar
//! and plagiarism features, once per completion.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use writekit::extract::extract_json;

fn payload_json() -> String {
    serde_json::json!({
        "plagiarism_score": 78,
        "flagged_sentences": [
            "Artificial intelligence is transforming every industry in the modern world.",
            "In conclusion, technology will shape the future of education."
        ],
        "feedback": "These sentences appear overly generic. Consider personalizing them."
    })
    .to_string()
}

fn bench_extraction_stages(c: &mut Criterion) {
    let payload = payload_json();
    let tagged = format!("Here is my analysis:\n```json\n{payload}\n```\nLet me know!");
    let untagged = format!("```\n{payload}\n```");
    let bare = payload.clone();

    let mut group = c.benchmark_group("extraction_stages");
    group.throughput(Throughput::Bytes(tagged.len() as u64));

    group.bench_function("tagged_fence", |b| {
        b.iter(|| extract_json(black_box(&tagged)).unwrap())
    });
    group.bench_function("untagged_fence", |b| {
        b.iter(|| extract_json(black_box(&untagged)).unwrap())
    });
    group.bench_function("bare_json", |b| {
        b.iter(|| extract_json(black_box(&bare)).unwrap())
    });

    group.finish();
}

fn bench_extraction_failure(c: &mut Criterion) {
    // Prose long enough to exercise the fence scans without ever matching.
    let prose = "I could not produce the requested structure, sorry. ".repeat(50);

    let mut group = c.benchmark_group("extraction_failure");
    group.throughput(Throughput::Bytes(prose.len() as u64));

    group.bench_function("all_stages_fail", |b| {
        b.iter(|| extract_json(black_box(&prose)).unwrap_err())
    });

    group.finish();
}

criterion_group!(benches, bench_extraction_stages, bench_extraction_failure);
criterion_main!(benches);

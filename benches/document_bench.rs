use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use senml_document::Document;
use serde_json::{Value, json};

fn sample(records: usize) -> Value {
    let mut array = vec![json!({
        "bn": "urn:dev:mac:0b92569229fc9e68/rpm/",
        "bt": 1234567890.123,
        "bu": "1/min",
        "n": "fwd",
        "v": 17.666544,
        "s": 3.0,
        "t": 0.0
    })];
    array.extend((1..records).map(|i| {
        json!({
            "n": "rev",
            "v": i as f64 * 0.5,
            "t": i as f64
        })
    }));
    Value::Array(array)
}

fn document_benchmark(c: &mut Criterion) {
    let data = sample(256);
    let doc = Document::from_json(&data).unwrap();

    c.bench_function("document_from_json", |b| {
        b.iter(|| Document::from_json(black_box(&data)).unwrap())
    });

    c.bench_function("document_to_json", |b| b.iter(|| black_box(&doc).to_json()));

    c.bench_function("document_to_normalized_json", |b| {
        b.iter(|| black_box(&doc).to_normalized_json())
    });
}

criterion_group!(benches, document_benchmark);
criterion_main!(benches);

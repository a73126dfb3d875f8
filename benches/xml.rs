use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use xmlout::{fragment, Map, Value};

fn flat_map() -> Map {
    let mut map = Map::new();
    map.insert("title", "Example Domain");
    map.insert("status", 200i32);
    map.insert("ok", true);
    map.insert("description", "This domain is for use in examples & tests.");
    map
}

fn nested_map() -> Map {
    let mut meta = Map::new();
    meta.insert("og:title", "Example");
    meta.insert("og:type", "website");

    let links: Vec<Value> = (0..64)
        .map(|i| {
            let mut link = Map::new();
            link.insert("href", format!("/page/{i}"));
            link.insert("text", format!("Page <{i}>"));
            Value::Object(link)
        })
        .collect();

    let mut map = Map::new();
    map.insert("metadata", Value::Object(meta));
    map.insert("links", Value::Array(links));
    map
}

fn bench_flat(c: &mut Criterion) {
    let map = flat_map();
    c.bench_function("xmlout_fragment_flat", |b| {
        b.iter(|| fragment(black_box(&map)))
    });
}

fn bench_nested(c: &mut Criterion) {
    let map = nested_map();
    c.bench_function("xmlout_fragment_nested", |b| {
        b.iter(|| fragment(black_box(&map)))
    });
}

criterion_group!(benches, bench_flat, bench_nested);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use taglog::MESSAGE_SIZE;
use taglog::fmt::{Palette, render, strip, validate, validate_strict};

const PLAIN: &str = "connection established to 10.0.0.1 after 3 retries";
const MARKED: &str = "connection g|established| to b|10.0.0.1| after y|3 retries|";
const ESCAPED: &str = "a || b || c r|x||y| || d";

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup::render");
    let palette = Palette::standard();

    group.bench_function("plain", |b| {
        b.iter(|| render(black_box(PLAIN), MESSAGE_SIZE, palette));
    });

    group.bench_function("three_spans", |b| {
        b.iter(|| render(black_box(MARKED), MESSAGE_SIZE, palette));
    });

    group.bench_function("escapes", |b| {
        b.iter(|| render(black_box(ESCAPED), MESSAGE_SIZE, palette));
    });

    group.bench_function("truncated", |b| {
        let long = MARKED.repeat(20);
        b.iter(|| render(black_box(&long), MESSAGE_SIZE, palette));
    });

    group.finish();
}

fn bench_strip(c: &mut Criterion) {
    c.bench_function("markup::strip", |b| {
        b.iter(|| strip(black_box(MARKED), MESSAGE_SIZE));
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup::validate");
    let palette = Palette::standard();

    group.bench_function("runtime", |b| {
        b.iter(|| validate(black_box(MARKED), palette));
    });

    group.bench_function("strict", |b| {
        b.iter(|| validate_strict(black_box(MARKED)));
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_strip, bench_validate);
criterion_main!(benches);

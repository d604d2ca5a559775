// benches/slugify_bench.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use slugy::Slugify;
use std::hint::black_box;

// ── Real-world titles — deliberately messy ───────────────────────────────────
const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "Hello World: A Guide to Rust (2nd Edition)!"),
    ("already_slug", "hello-world-a-guide-to-rust"),
    ("polish", "Zażółć gęślą jaźń — pchnąć w tę łódź jeża"),
    ("cyrillic", "Смысловые галлюцинации в языковых моделях"),
    ("greek", "Η γρήγορη καφέ αλεπού πηδάει"),
    ("latin1", "Crème brûlée à la française, ÅÄÖ ß"),
    ("whitespace", "\t  lots   of\r\n  whitespace\u{00A0}\u{3000}here   "),
    ("cjk", "健康管理 and 東京 travel"),
];

fn bench_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("slugify/default");
    let slugify = Slugify::new();
    for &(name, input) in SAMPLES {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| slugify.slugify(black_box(input)));
        });
    }
    group.finish();
}

fn bench_configured(c: &mut Criterion) {
    let mut group = c.benchmark_group("slugify/configured");
    let variants = [
        ("underscore", Slugify::new().with_underscore_separator(true)),
        ("keep_case", Slugify::new().with_lower_case(false)),
        (
            "replacements",
            Slugify::new()
                .with_custom_replacement("&", " and ")
                .with_custom_replacement("@", " at ")
                .with_custom_replacement("Rust", "rustlang"),
        ),
        ("transliterator", Slugify::new().with_transliterator(true)),
    ];
    for (variant, slugify) in &variants {
        for &(name, input) in SAMPLES {
            group.throughput(Throughput::Bytes(input.len() as u64));
            group.bench_with_input(BenchmarkId::new(*variant, name), input, |b, input| {
                b.iter(|| slugify.slugify(black_box(input)));
            });
        }
    }
    group.finish();
}

fn bench_long_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("slugify/long");
    let slugify = Slugify::new();
    let long = SAMPLES.iter().map(|(_, s)| *s).collect::<Vec<_>>().join(" ").repeat(200);
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("mixed_200x", |b| b.iter(|| slugify.slugify(black_box(&long))));
    group.bench_function("zero_copy_cow", |b| {
        let clean = "already-a-slug-".repeat(500);
        let clean = clean.trim_end_matches('-');
        b.iter(|| slugify.slugify_cow(black_box(clean)));
    });
    group.finish();
}

criterion_group!(benches, bench_default, bench_configured, bench_long_input);
criterion_main!(benches);

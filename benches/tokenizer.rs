use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cutline::{Tokenizer, TokenizerConfig};

const SENTENCE: &str = "I believe life is an intelligent thing: that things aren't random.";

fn benchmark_legacy_mode(c: &mut Criterion) {
    let tokenizer = Tokenizer::new(TokenizerConfig::legacy()).unwrap();
    c.bench_function("tokenize_legacy", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SENTENCE)))
    });
}

fn benchmark_unicode_mode(c: &mut Criterion) {
    let tokenizer = Tokenizer::new(TokenizerConfig::default()).unwrap();
    c.bench_function("tokenize_unicode", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SENTENCE)))
    });
}

fn benchmark_round_trip(c: &mut Criterion) {
    let tokenizer = Tokenizer::default();
    let mut group = c.benchmark_group("round_trip");

    group.bench_function("tokenize_with_trace", |b| {
        b.iter(|| tokenizer.tokenize_with_trace(black_box(SENTENCE)))
    });

    let tokenized = tokenizer.tokenize_with_trace(SENTENCE);
    group.bench_function("restore", |b| b.iter(|| black_box(&tokenized).restore()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_legacy_mode,
    benchmark_unicode_mode,
    benchmark_round_trip
);
criterion_main!(benches);

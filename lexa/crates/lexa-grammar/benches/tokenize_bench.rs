//! Tokenizer Benchmarks
//!
//! Measures the reference tokenizer and individual grammar probes.
//! Run with: `cargo bench --package lexa-grammar`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexa_grammar::{configuration, tokenize, Language, Probe};

fn token_count(language: Language, source: &str) -> usize {
    tokenize(configuration(language), source).len()
}

fn bench_tokenize_languages(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let samples = [
        (
            Language::Python,
            r#"
def fibonacci(n: int) -> int:
    """Return the n-th Fibonacci number."""
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)  # naive

values = [0x1F, 0b1010, 1_000_000, 3.14e-2, 2j]
"#,
        ),
        (
            Language::C,
            r#"
/* table lookup */
static const unsigned long table[] = { 0x1p-3, 0755, 10UL };
int main(void) {
    char c = L'x';
    return sizeof(table) / sizeof(table[0]) >= 3 ? 0 : 1; // done
}
"#,
        ),
        (
            Language::Json,
            r#"{"name": "lexa", "version": [0, 0, 3], "tags": null, "ratio": -0.5e+10, "ok": true}"#,
        ),
        (
            Language::Haskell,
            r#"
{- outer {- nested -} comment -}
module Main where
main :: IO ()
main = mapM_ print (foldl' (+) 0 <$> [[1, 2], [3]])  -- sums
"#,
        ),
    ];

    for (language, source) in samples {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(language), source, |b, source| {
            b.iter(|| token_count(language, black_box(source)))
        });
    }

    group.finish();
}

fn bench_number_probes(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe_numbers");
    let python = configuration(Language::Python);

    for literal in ["123456", "1_000_000", "0xDEAD_BEEF", "0x1.8p3", "6.02e23"] {
        group.bench_function(literal, |b| {
            b.iter(|| python.number_grammar().probe(black_box(literal), 0))
        });
    }

    group.finish();
}

fn bench_string_probes(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe_strings");
    let python = configuration(Language::Python);

    group.bench_function("short_string", |b| {
        b.iter(|| python.string_grammar().probe(black_box("'hello'"), 0))
    });

    group.bench_function("triple_quoted", |b| {
        let source = "'''This is a longer docstring\nthat spans 'several' lines\nfor benchmarking.'''";
        b.iter(|| python.string_grammar().probe(black_box(source), 0))
    });

    group.finish();
}

fn bench_registry_lookup(c: &mut Criterion) {
    c.bench_function("registry_lookup", |b| {
        b.iter(|| configuration(black_box(Language::TypeScript)).name())
    });
}

criterion_group!(
    benches,
    bench_tokenize_languages,
    bench_number_probes,
    bench_string_probes,
    bench_registry_lookup
);
criterion_main!(benches);

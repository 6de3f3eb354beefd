use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use morphtok::{tokenize, AffixTable, MemDictionary, TokenizerOptions};

pub const TS: &[(&str, &str)] = &[
    ("short", "this is a test"),
    ("contraction", "you've seen this before, right?"),
    ("mixed-units", "the box is 86mm by 120mm and weighs 4kg"),
];

fn dictionary() -> MemDictionary {
    MemDictionary::new().with_words([
        "this", "is", "a", "test", "you", "seen", "before", "right", "the", "box", "by", "and", "weighs", "86", "120", "4",
    ])
}

fn affix() -> AffixTable {
    AffixTable::builder().suf(["'ve"]).rpunc([",", "?"]).units(["mm", "kg"]).build().unwrap()
}

fn benchmark(cr: &mut Criterion) {
    let dict = dictionary();
    let affix = affix();
    let opts = TokenizerOptions::new();
    let mut gr = cr.benchmark_group("tokenize");

    for &(name, text) in TS {
        let size = text.len() as u64;
        gr.throughput(Throughput::Bytes(size))
            .sample_size(1_000)
            .measurement_time(Duration::from_secs(10))
            .bench_with_input(BenchmarkId::new(name, size), text, |b, text| {
                b.iter(|| tokenize(text, &dict, &affix, None, &opts).unwrap())
            });
    }

    gr.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

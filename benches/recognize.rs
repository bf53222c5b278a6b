use charter::{earley, grammar::Grammar, samples};
use criterion::{criterion_group, criterion_main, Criterion};

criterion_main!(benches);
criterion_group!(benches, bench_tiny_english);

fn bench_tiny_english(c: &mut Criterion) {
    let grammar = Grammar::define(samples::tiny_english).unwrap();

    let mut group = c.benchmark_group("tiny_english");
    for sentence in [
        "they can fish",
        "they can fish in rivers in December",
        "they can fish in rivers in rivers in rivers in rivers",
    ] {
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        group.bench_function(sentence, |b| {
            b.iter(|| earley::recognize(&grammar, &tokens));
        });
    }
    group.finish();
}

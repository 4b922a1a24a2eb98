use criterion::{criterion_group, criterion_main, Criterion};
use linematch_core::{answer_query, build_index_and_table};

const LINES: &[&str] = &[
    "Oil prices rose on Monday as traders weighed supply concerns",
    "The central bank left interest rates unchanged for a third month",
    "Shares of the carmaker fell after it cut its sales forecast",
    "Wheat futures climbed on worries about dry weather in the plains",
    "The company said quarterly profit rose on strong demand for chips",
];

fn corpus() -> Vec<String> {
    (0..2_000).map(|i| format!("{} batch {}", LINES[i % LINES.len()], "x".repeat(i % 7 + 1))).collect()
}

fn bench_build(c: &mut Criterion) {
    let lines = corpus();
    c.bench_function("build_index_and_table", |b| b.iter(|| build_index_and_table(lines.iter().cloned())));
}

fn bench_query(c: &mut Criterion) {
    let (index, table) = build_index_and_table(corpus());
    c.bench_function("answer_query", |b| b.iter(|| answer_query("oil prices and interest rates", &index, &table)));
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use csskeys::{Parser, SourceBuffer, print_table};

fn stylesheet(blocks: usize) -> String {
    (0..blocks)
        .map(|i| {
            format!(
                "/* block {i} */\n.shape{i} .outline{i} hidden, #id{i} dragging {{\n  border-width: {i}px;\n  fill-color: #00FFFF;\n  fill-opacity: 1;\n}}\n"
            )
        })
        .collect()
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");

    for blocks in [10, 100, 400] {
        let css = stylesheet(blocks);
        group.bench_with_input(BenchmarkId::new("source_buffer", blocks), &css, |b, css| {
            b.iter(|| SourceBuffer::new(black_box(css)))
        });
    }
    group.finish();
}

fn bench_negotiation(c: &mut Criterion) {
    let mut group = c.benchmark_group("negotiation");
    let parser = Parser::default();

    // 400 blocks * 9 records stays under the 4095 record ceiling
    for blocks in [10, 100, 400] {
        let source = SourceBuffer::new(&stylesheet(blocks));

        group.bench_with_input(BenchmarkId::new("probe", blocks), &source, |b, source| {
            b.iter(|| parser.parse(black_box(source), None))
        });

        let mut table = parser.parse_to_table(&source).unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("materialize", blocks), &source, |b, source| {
            b.iter(|| parser.parse(black_box(source), Some(&mut table)))
        });
    }
    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let parser = Parser::default();
    let source = SourceBuffer::new(&stylesheet(100));
    let table = parser.parse_to_table(&source).unwrap_or_default();

    c.bench_function("print_100_blocks", |b| {
        b.iter(|| print_table(black_box(&source), black_box(&table)))
    });
}

criterion_group!(benches, bench_preprocess, bench_negotiation, bench_print);
criterion_main!(benches);

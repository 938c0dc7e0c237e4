use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use otkit_core::protocol::{from_json, to_json};
use otkit_core::{apply, compose, transform, Operation};

/// Operation that rewrites every other run of `run` characters in a document of `size`
fn striped_op(id: &str, doc: &str, run: usize, offset: usize) -> Operation {
    let chars: Vec<char> = doc.chars().collect();
    let mut op = Operation::with_id(id, 0).unwrap();
    let mut pos = 0;
    if offset > 0 {
        op.retain(offset).unwrap();
        pos = offset;
    }
    while pos < chars.len() {
        let end = (pos + run).min(chars.len());
        let text: String = chars[pos..end].iter().collect();
        op.delete(&text).unwrap().insert("xy").unwrap();
        pos = end;
        let keep = run.min(chars.len() - pos);
        if keep > 0 {
            op.retain(keep).unwrap();
            pos += keep;
        }
    }
    op
}

/// Benchmark applying a single insert to documents of growing size
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("ot_apply");

    for size in [100, 1000, 10000].iter() {
        let doc = "a".repeat(*size);
        let mut op = Operation::new(0);
        op.retain(size / 2)
            .unwrap()
            .insert("hello")
            .unwrap()
            .retain(size - size / 2)
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(apply(&doc, &op).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark composing two dense edits
fn bench_compose(c: &mut Criterion) {
    let doc = "abcdefghij".repeat(100);
    let a = striped_op("a", &doc, 5, 0);
    let after_a = apply(&doc, &a).unwrap();
    let b = striped_op("b", &after_a, 3, 1);

    c.bench_function("ot_compose_dense_1000", |bench| {
        bench.iter(|| black_box(compose(&a, &b).unwrap()));
    });
}

/// Benchmark transforming two dense concurrent edits
fn bench_transform(c: &mut Criterion) {
    let doc = "abcdefghij".repeat(100);
    let a = striped_op("a", &doc, 5, 0);
    let b = striped_op("b", &doc, 7, 2);

    c.bench_function("ot_transform_dense_1000", |bench| {
        bench.iter(|| black_box(transform(&a, &b).unwrap()));
    });
}

/// Benchmark validating a wire record
fn bench_from_json(c: &mut Criterion) {
    let doc = "abcdefghij".repeat(100);
    let json = to_json(&striped_op("a", &doc, 5, 0)).unwrap();

    c.bench_function("ot_from_json_dense_1000", |b| {
        b.iter(|| black_box(from_json(&json).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_apply,
    bench_compose,
    bench_transform,
    bench_from_json
);
criterion_main!(benches);

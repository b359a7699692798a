use bsearch_fixture::Fixture;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn render_bench(c: &mut Criterion) {
    c.bench_function("render_1k", |b| {
        let fixture = Fixture::new(1_000).unwrap();
        b.iter(|| {
            let mut buf = Vec::new();
            fixture.write_to(&mut buf).unwrap();
            let _ = black_box(buf);
        })
    });

    c.bench_function("render_100k", |b| {
        let fixture = Fixture::new(100_000).unwrap();
        b.iter(|| {
            let mut buf = Vec::new();
            fixture.write_to(&mut buf).unwrap();
            let _ = black_box(buf);
        })
    });
}

criterion_group!(benches, render_bench);
criterion_main!(benches);

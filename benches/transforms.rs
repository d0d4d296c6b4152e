use criterion::{black_box, criterion_group, criterion_main, Criterion};
use customcolour::{add_rgba, grayscale, invert, BlendLocation, BlendSpec, Color, Registry};

fn bench_transforms(c: &mut Criterion) {
    let registry = Registry::with_builtins().unwrap();
    let jet = registry.resolve("jet").unwrap().clone();

    c.bench_function("grayscale jet", |b| {
        b.iter(|| grayscale(black_box(&jet), None).unwrap())
    });

    c.bench_function("invert jet", |b| b.iter(|| invert(black_box(&jet), None).unwrap()));

    let magenta = Color::new(1.0, 0.0, 1.0, 1.0);
    for loc in [BlendLocation::Start, BlendLocation::Mid, BlendLocation::Fraction(0.2)] {
        let spec = BlendSpec::default().with_loc(loc);
        c.bench_function(&format!("add_rgba jet loc={}", loc), |b| {
            b.iter(|| add_rgba(black_box(&jet), magenta, &spec).unwrap())
        });
    }

    c.bench_function("builtin registry", |b| b.iter(|| Registry::with_builtins().unwrap()));
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::f64::consts::PI;
use vecta::{helpers, Axis, Vector};

fn bench_arithmetic(c: &mut Criterion) {
    let a = Vector::new_3d(1.0, 2.0, 3.0);
    let b = Vector::new_3d(4.0, -5.0, 6.0);

    c.bench_function("add_in_place_3d", |bench| {
        bench.iter(|| {
            let mut v = black_box(a);
            v.add(black_box(b));
            v
        })
    });
    c.bench_function("div_by_vector_3d", |bench| {
        bench.iter(|| helpers::div(black_box(a), black_box(b)))
    });
    c.bench_function("dot_3d", |bench| bench.iter(|| black_box(a).dot(black_box(b))));
}

fn bench_geometry(c: &mut Criterion) {
    let v = Vector::new_3d(3.0, 0.0, 1.0);

    c.bench_function("rotate_about_y", |bench| {
        bench.iter(|| helpers::rotate_about(black_box(v), black_box(PI / 3.0), Axis::Y))
    });
    c.bench_function("normalized", |bench| bench.iter(|| black_box(v).normalized()));
    c.bench_function("reflect", |bench| {
        let axis = Vector::new_3d(1.0, 1.0, 0.0).normalized();
        bench.iter(|| {
            let mut r = black_box(v);
            r.reflect(axis);
            r
        })
    });
}

criterion_group!(benches, bench_arithmetic, bench_geometry);
criterion_main!(benches);

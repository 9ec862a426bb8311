use criterion::{ black_box, criterion_group, Criterion };
use galois::roots;

pub fn cubic(c: &mut Criterion) {
    c.bench_function("cubic", |bench| {
        bench.iter(|| roots::solve_cubic(black_box(1.0), black_box(-6.0), black_box(11.0), black_box(-6.0)))
    });
}

pub fn companion(c: &mut Criterion) {
    let coefficients = [720.0, -1764.0, 1624.0, -735.0, 175.0, -21.0, 1.0];
    c.bench_function("companion matrix (degree 6)", |bench| {
        bench.iter(|| roots::solve_polynomial(black_box(&coefficients)))
    });
}

criterion_group!(group, cubic, companion);

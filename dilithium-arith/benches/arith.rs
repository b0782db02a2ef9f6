use criterion::{Criterion, criterion_group, criterion_main};
use dilithium_arith::array::typenum::U5;
use dilithium_arith::*;
use rand::Rng;
use std::hint::black_box;

fn random_poly(rng: &mut impl Rng) -> Poly {
    Poly::new(core::array::from_fn(|_| rng.random_range(0..Q)))
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();

    // Scalar kernel
    let x: i32 = rng.random();
    let wide: i64 = rng.random_range(-(i64::from(Q) << 31)..(i64::from(Q) << 31));
    c.bench_function("montgomery_reduce", |b| {
        b.iter(|| montgomery_reduce(black_box(wide)))
    });
    c.bench_function("freeze", |b| b.iter(|| freeze(black_box(x))));

    // Transforms
    let a = random_poly(&mut rng);
    c.bench_function("ntt", |b| {
        b.iter(|| {
            let mut p = black_box(a);
            p.ntt();
            p
        })
    });

    let mut a_hat = a;
    a_hat.ntt();
    // The inverse transform wants coefficients below q.
    let mut a_hat_reduced = a_hat;
    a_hat_reduced.reduce();
    c.bench_function("invntt_tomont", |b| {
        b.iter(|| {
            let mut p = black_box(a_hat_reduced);
            p.invntt_tomont();
            p
        })
    });

    // Pointwise products
    let b_hat = {
        let mut p = random_poly(&mut rng);
        p.ntt();
        p
    };
    c.bench_function("pointwise_montgomery", |b| {
        b.iter(|| black_box(a_hat).pointwise_montgomery(&b_hat))
    });

    let row: PolyVec<U5> = PolyVec::from_fn(|_| {
        let mut p = random_poly(&mut rng);
        p.ntt();
        p
    });
    let v = row.clone();
    c.bench_function("pointwise_acc_montgomery", |b| {
        b.iter(|| black_box(&row).pointwise_acc_montgomery(&v))
    });

    c.bench_function("poly_freeze", |b| {
        b.iter(|| {
            let mut p = black_box(a_hat);
            p.freeze();
            p
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

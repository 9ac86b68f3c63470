use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qir_roots::{
    num::{BigInt, BigRational},
    poly,
    __testing::{isolating_brackets, poly_from_roots},
    Precision, Refiner, RootRefinement,
};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, sqrt2_scale, sqrt2_digits, cbrt2_refine_again);

fn int(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

pub fn sqrt2_scale(c: &mut Criterion) {
    let p = poly![-2, 0, 1];
    let mut group = c.benchmark_group("sqrt2 scale");
    for scale in [1, 10, 100, 1000] {
        group.bench_function(BenchmarkId::from_parameter(scale), |b| {
            b.iter(|| {
                black_box(Refiner::new().refine(
                    &p,
                    &int(1),
                    &int(2),
                    Precision::Scale(black_box(scale)),
                ))
            })
        });
    }
    group.finish();
}

pub fn sqrt2_digits(c: &mut Criterion) {
    // 10^8 x^2 - 2, a small root where digits and scale differ
    let p = poly![-2, 0, 100_000_000];
    let lower = BigRational::new(BigInt::from(1), BigInt::from(10_000));
    let upper = BigRational::new(BigInt::from(2), BigInt::from(10_000));
    let mut group = c.benchmark_group("small root digits");
    for digits in [1, 10, 100, 1000] {
        group.bench_function(BenchmarkId::from_parameter(digits), |b| {
            b.iter(|| {
                black_box(Refiner::new().refine(
                    &p,
                    &lower,
                    &upper,
                    Precision::Digits(black_box(digits)),
                ))
            })
        });
    }
    group.finish();
}

pub fn cbrt2_refine_again(c: &mut Criterion) {
    let Ok(root) = RootRefinement::new(poly![-2, 0, 0, 1], int(1), int(2), Precision::Scale(50))
    else {
        return;
    };
    c.bench_function("cbrt2 50 -> 500", |b| {
        b.iter(|| black_box(root.refine_scale(black_box(500))))
    });
}

criterion_group!(realistic_benches, all_roots_of_product);

pub fn all_roots_of_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("all roots of product");
    for n in [2, 4, 8, 16] {
        let roots = (1..=n).map(|k| BigRational::new(BigInt::from(3 * k + 1), BigInt::from(3))).collect::<Vec<_>>();
        let p = poly_from_roots(&roots);
        let brackets = isolating_brackets(&roots);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                for (lower, upper) in &brackets {
                    let _ = black_box(Refiner::new().refine(&p, lower, upper, Precision::Scale(50)));
                }
            })
        });
    }
    group.finish();
}
